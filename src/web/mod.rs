// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::core::ConfigManager;
use crate::page::PageComposer;
use crate::session::PortfolioSession;
use crate::theme::{Theme, ThemeManager};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::http::{Header, Status};
use rocket::response::content::RawHtml;
use rocket::response::stream::{Event, EventStream};
use rocket::serde::json::Json;
use rocket::tokio::select;
use rocket::tokio::sync::broadcast::error::RecvError;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, Shutdown, State};
use tokio::sync::RwLock;
use tracing::{error, info};

/// Theme assumed for visitors until a browser reports otherwise
pub const DEFAULT_SYSTEM_THEME: Theme = Theme::Dark;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/")]
pub async fn index(
    session: &State<PortfolioSession>,
    composer: &State<PageComposer>,
) -> RawHtml<String> {
    handlers::index_handler(session, composer).await
}

#[get("/health")]
pub async fn health(session: &State<PortfolioSession>) -> Json<TextResponse> {
    handlers::health_handler(session).await
}

#[get("/profile")]
pub async fn get_profile(
    session: &State<PortfolioSession>,
) -> Result<Json<DataResponse<crate::types::Profile>>, Json<StandardErrorResponse>> {
    handlers::get_profile_handler(session).await
}

#[get("/profile/sections")]
pub async fn get_sections(
    session: &State<PortfolioSession>,
) -> Result<Json<DataResponse<std::collections::BTreeMap<String, String>>>, Json<StandardErrorResponse>>
{
    handlers::get_sections_handler(session).await
}

#[get("/profile/markdown")]
pub async fn download_markdown(
    session: &State<PortfolioSession>,
) -> Result<MarkdownResponse, Json<StandardErrorResponse>> {
    handlers::download_markdown_handler(session).await
}

#[get("/experience")]
pub async fn get_experience(
    session: &State<PortfolioSession>,
) -> Result<Json<DataResponse<ExperienceData>>, Json<StandardErrorResponse>> {
    handlers::get_experience_handler(session).await
}

#[get("/theme")]
pub async fn get_theme(themes: &State<ThemeService>) -> Json<DataResponse<ThemeData>> {
    handlers::get_theme_handler(themes).await
}

#[post("/theme/toggle")]
pub async fn toggle_theme(
    themes: &State<ThemeService>,
) -> Result<Json<DataResponse<ThemeData>>, Json<StandardErrorResponse>> {
    handlers::toggle_theme_handler(themes).await
}

#[post("/theme/system", data = "<request>")]
pub async fn system_theme(
    request: Json<SystemThemeRequest>,
    themes: &State<ThemeService>,
) -> Json<DataResponse<ThemeData>> {
    handlers::system_theme_handler(request, themes).await
}

/// Server-sent theme changes for background observers
#[get("/theme/events")]
pub async fn theme_events(themes: &State<ThemeService>, mut end: Shutdown) -> EventStream![] {
    let mut rx = themes.read().await.subscribe();
    EventStream! {
        loop {
            let change = select! {
                msg = rx.recv() => match msg {
                    Ok(change) => change,
                    Err(RecvError::Closed) => break,
                    Err(RecvError::Lagged(_)) => continue,
                },
                _ = &mut end => break,
            };

            yield Event::json(&change).event("theme");
        }
    }
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the request path".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

/// Everything the server shares between requests
pub struct WebState {
    pub server: ServerConfig,
    pub session: PortfolioSession,
    pub composer: PageComposer,
    pub themes: ThemeManager,
}

pub fn build_rocket(figment: Figment, state: WebState) -> Rocket<Build> {
    let mut rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(state.session)
        .manage(state.composer)
        .manage(RwLock::new(state.themes))
        .register("/api", catchers![not_found, internal_error])
        .mount("/", routes![index])
        .mount(
            "/api",
            routes![
                health,
                get_profile,
                get_sections,
                download_markdown,
                get_experience,
                get_theme,
                toggle_theme,
                system_theme,
                theme_events,
                options,
            ],
        );

    if state.server.public_dir.is_dir() {
        rocket = rocket.mount("/", FileServer::from(&state.server.public_dir));
    } else {
        error!(
            "Public directory not found, static files disabled: {}",
            state.server.public_dir.display()
        );
    }

    rocket
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    config.ensure_directories().await?;

    let session = PortfolioSession::start(&config.profile_loader()).await;

    let composer = match PageComposer::from_file(config.index_path()).await {
        Ok(composer) => composer,
        Err(e) => {
            error!("Failed to load page template: {:#}", e);
            return Err(e);
        }
    };

    let themes = ThemeManager::new(config.theme_store(), DEFAULT_SYSTEM_THEME).await?;

    info!("Starting portfolio server");
    info!("Page template: {}", config.index_path().display());
    info!("Server: http://0.0.0.0:{}", config.service.port);

    let figment = rocket::Config::figment()
        .merge(("port", config.service.port))
        .merge(("address", "0.0.0.0"));

    let state = WebState {
        server: ServerConfig {
            public_dir: config.environment.public_path.clone(),
        },
        session,
        composer,
        themes,
    };

    build_rocket(figment, state)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}
