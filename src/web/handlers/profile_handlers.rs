// src/web/handlers/profile_handlers.rs
//! Profile page and profile API handlers

use chrono::{Local, NaiveDate};
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::page::PageComposer;
use crate::render::{parse_start_date, Document, ExperienceSpan};
use crate::session::PortfolioSession;
use crate::types::Profile;
use crate::web::types::{DataResponse, ExperienceData, MarkdownResponse, StandardErrorResponse};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn loaded(session: &PortfolioSession) -> Result<&Profile, Json<StandardErrorResponse>> {
    session.profile().ok_or_else(|| {
        warn!("Profile requested but none is loaded");
        Json(StandardErrorResponse::profile_not_loaded())
    })
}

/// `index.html` with every present mount point filled in
pub async fn index_handler(
    session: &State<PortfolioSession>,
    composer: &State<PageComposer>,
) -> RawHtml<String> {
    let mut document = composer.document();
    let written = session.mount(&mut document, today());
    info!("Serving index with {} rendered regions", written);
    RawHtml(composer.compose(&document))
}

pub async fn get_profile_handler(
    session: &State<PortfolioSession>,
) -> Result<Json<DataResponse<Profile>>, Json<StandardErrorResponse>> {
    let profile = loaded(session)?;
    Ok(Json(DataResponse::success(
        format!("Profile for {}", profile.personal.name),
        profile.clone(),
    )))
}

/// Every DOM region keyed by mount point id
pub async fn get_sections_handler(
    session: &State<PortfolioSession>,
) -> Result<Json<DataResponse<BTreeMap<String, String>>>, Json<StandardErrorResponse>> {
    loaded(session)?;

    let mut document = Document::full();
    session.mount(&mut document, today());
    let sections: BTreeMap<String, String> = document
        .rendered()
        .map(|(mount, html)| (mount.id().to_string(), html.to_string()))
        .collect();

    Ok(Json(DataResponse::success(
        format!("{} sections rendered", sections.len()),
        sections,
    )))
}

pub async fn download_markdown_handler(
    session: &State<PortfolioSession>,
) -> Result<MarkdownResponse, Json<StandardErrorResponse>> {
    let profile = loaded(session)?;
    let markdown = session.markdown().unwrap_or_default();
    let filename = format!("{}.md", markdown_filename(&profile.personal.name));

    info!("Markdown export: {} bytes as {}", markdown.len(), filename);
    Ok(MarkdownResponse::new(markdown, filename))
}

pub async fn get_experience_handler(
    session: &State<PortfolioSession>,
) -> Result<Json<DataResponse<ExperienceData>>, Json<StandardErrorResponse>> {
    let profile = loaded(session)?;

    let start_date = profile.personal.career_start_date.clone().ok_or_else(|| {
        Json(StandardErrorResponse::new(
            "Profile has no career start date".to_string(),
            "MISSING_START_DATE".to_string(),
            vec!["Add personal.careerStartDate to the profile".to_string()],
        ))
    })?;

    let start = parse_start_date(&start_date).map_err(|e| {
        warn!("Invalid career start date: {}", e);
        Json(StandardErrorResponse::new(
            e.to_string(),
            "INVALID_START_DATE".to_string(),
            vec!["Use the YYYY-MM-DD format".to_string()],
        ))
    })?;

    let span = ExperienceSpan::between(start, today());
    Ok(Json(DataResponse::success(
        "Experience calculated".to_string(),
        ExperienceData::new(start_date, span),
    )))
}

/// "Ada Example" -> "Ada_Example"
fn markdown_filename(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "profile".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::markdown_filename;

    #[test]
    fn test_markdown_filename() {
        assert_eq!(markdown_filename("Ada Example"), "Ada_Example");
        assert_eq!(markdown_filename("  "), "profile");
        assert_eq!(markdown_filename("José/Ng"), "José_Ng");
    }
}
