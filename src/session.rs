// src/session.rs
//! The loaded profile for the lifetime of a page session

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use crate::clipboard::{copy_markdown, Clipboard, CopyOutcome};
use crate::loader::ProfileLoader;
use crate::render::{render_dom, render_markdown, Document};
use crate::types::Profile;

/// Holds the profile loaded once at start-up. Immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct PortfolioSession {
    profile: Option<Arc<Profile>>,
}

impl PortfolioSession {
    /// Run the single load of the session. A failed load gives an empty session.
    pub async fn start(loader: &ProfileLoader) -> Self {
        let profile = loader.load().await.map(Arc::new);
        if profile.is_none() {
            warn!("Session started without a profile; nothing will be rendered");
        }
        Self { profile }
    }

    pub fn from_profile(profile: Profile) -> Self {
        Self {
            profile: Some(Arc::new(profile)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.profile.is_some()
    }

    /// Render every region into the document. Leaves it untouched without a profile.
    pub fn mount(&self, document: &mut Document, today: NaiveDate) -> usize {
        match self.profile() {
            Some(profile) => render_dom(profile, today, document),
            None => 0,
        }
    }

    pub fn markdown(&self) -> Option<String> {
        self.profile().map(render_markdown)
    }

    pub async fn copy_markdown(&self, clipboard: &mut dyn Clipboard) -> CopyOutcome {
        match self.profile() {
            Some(profile) => {
                let outcome = copy_markdown(profile, clipboard).await;
                info!("Copy markdown: {}", outcome.label());
                outcome
            }
            None => CopyOutcome::Failed {
                reason: "No profile loaded".to_string(),
            },
        }
    }
}
