// src/web/types.rs

use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::serde::{Deserialize, Serialize};
use rocket::{Request, Response};
use std::path::PathBuf;

use crate::render::ExperienceSpan;
use crate::theme::Theme;

pub struct ServerConfig {
    pub public_dir: PathBuf,
}

/// Markdown export served as a download
pub struct MarkdownResponse {
    pub content: String,
    pub filename: String,
}

impl MarkdownResponse {
    pub fn new(content: String, filename: String) -> Self {
        Self { content, filename }
    }
}

impl<'r> Responder<'r, 'static> for MarkdownResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let mut binding = Response::build();
        let bytes = self.content.into_bytes();
        binding
            .header(ContentType::new("text", "markdown").with_params(("charset", "utf-8")))
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(bytes.len(), std::io::Cursor::new(bytes))
            .ok()
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ExperienceData {
    pub start_date: String,
    pub years: u32,
    pub months: u32,
    pub text: String,
}

impl ExperienceData {
    pub fn new(start_date: String, span: ExperienceSpan) -> Self {
        Self {
            start_date,
            years: span.years,
            months: span.months,
            text: span.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ThemeData {
    pub theme: Theme,
    pub saved: bool,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct SystemThemeRequest {
    pub theme: Theme,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }

    pub fn profile_not_loaded() -> Self {
        Self::new(
            "Profile data is not available".to_string(),
            "PROFILE_NOT_LOADED".to_string(),
            vec![
                "Check the configured profile source".to_string(),
                "Restart the server once the source is reachable".to_string(),
            ],
        )
    }
}
