// src/web/handlers/system_handlers.rs
use crate::session::PortfolioSession;
use crate::web::types::*;

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

pub async fn health_handler(session: &State<PortfolioSession>) -> Json<TextResponse> {
    let message = if session.is_loaded() {
        "OK"
    } else {
        "OK (no profile loaded)"
    };
    info!("Health check: {}", message);
    Json(TextResponse::success(message.to_string()))
}
