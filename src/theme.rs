// src/theme.rs
//! Light/dark theme preference with change notifications.
//!
//! Observers subscribe to [`ThemeChange`] events; nothing here knows about the
//! profile renderer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::core::FsOps;

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => anyhow::bail!("Unknown theme: {}. Use light or dark", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeChange {
    pub theme: Theme,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    theme: Theme,
}

/// Persisted user preference, one small JSON file
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Option<Theme>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = FsOps::read_file_safe(&self.path).await?;
        let stored: StoredPreference = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse theme preference: {}", self.path.display()))?;
        Ok(Some(stored.theme))
    }

    pub async fn save(&self, theme: Theme) -> Result<()> {
        let content = serde_json::to_string(&StoredPreference { theme })
            .context("Failed to serialize theme preference")?;
        FsOps::write_file_safe(&self.path, &content).await
    }
}

pub struct ThemeManager {
    store: ThemeStore,
    system: Theme,
    saved: Option<Theme>,
    sender: broadcast::Sender<ThemeChange>,
}

impl ThemeManager {
    pub async fn new(store: ThemeStore, system: Theme) -> Result<Self> {
        let saved = store.load().await?;
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        info!(
            "Theme initialised: {} (saved: {:?}, system: {})",
            saved.unwrap_or(system),
            saved,
            system
        );
        Ok(Self {
            store,
            system,
            saved,
            sender,
        })
    }

    /// Saved preference first, system preference otherwise
    pub fn current(&self) -> Theme {
        self.saved.unwrap_or(self.system)
    }

    pub fn has_saved_preference(&self) -> bool {
        self.saved.is_some()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ThemeChange> {
        self.sender.subscribe()
    }

    pub async fn toggle(&mut self) -> Result<Theme> {
        let theme = self.current().toggled();
        self.store.save(theme).await?;
        self.saved = Some(theme);
        self.notify(theme);
        Ok(theme)
    }

    /// Follow the OS setting unless the user picked a theme explicitly.
    pub fn system_changed(&mut self, system: Theme) -> Theme {
        self.system = system;
        if self.saved.is_none() {
            self.notify(system);
        }
        self.current()
    }

    fn notify(&self, theme: Theme) {
        // no receivers is fine
        let receivers = self.sender.send(ThemeChange { theme }).unwrap_or(0);
        debug!("Theme change to {} delivered to {} observers", theme, receivers);
    }
}
