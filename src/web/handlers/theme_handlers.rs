// src/web/handlers/theme_handlers.rs
//! Theme preference handlers

use rocket::serde::json::Json;
use rocket::State;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::theme::ThemeManager;
use crate::web::types::{DataResponse, StandardErrorResponse, SystemThemeRequest, ThemeData};

pub type ThemeService = RwLock<ThemeManager>;

fn theme_data(themes: &ThemeManager) -> ThemeData {
    ThemeData {
        theme: themes.current(),
        saved: themes.has_saved_preference(),
    }
}

pub async fn get_theme_handler(themes: &State<ThemeService>) -> Json<DataResponse<ThemeData>> {
    let themes = themes.read().await;
    Json(DataResponse::success(
        format!("Current theme: {}", themes.current()),
        theme_data(&themes),
    ))
}

pub async fn toggle_theme_handler(
    themes: &State<ThemeService>,
) -> Result<Json<DataResponse<ThemeData>>, Json<StandardErrorResponse>> {
    let mut themes = themes.write().await;
    match themes.toggle().await {
        Ok(theme) => {
            info!("Theme toggled to {}", theme);
            Ok(Json(DataResponse::success(
                format!("Theme switched to {}", theme),
                theme_data(&themes),
            )))
        }
        Err(e) => {
            error!("Failed to persist theme preference: {:#}", e);
            Err(Json(StandardErrorResponse::new(
                "Failed to save theme preference".to_string(),
                "THEME_SAVE_ERROR".to_string(),
                vec!["Check that the theme store path is writable".to_string()],
            )))
        }
    }
}

pub async fn system_theme_handler(
    request: Json<SystemThemeRequest>,
    themes: &State<ThemeService>,
) -> Json<DataResponse<ThemeData>> {
    let mut themes = themes.write().await;
    let current = themes.system_changed(request.theme);
    Json(DataResponse::success(
        format!("System theme is {}, showing {}", request.theme, current),
        theme_data(&themes),
    ))
}
