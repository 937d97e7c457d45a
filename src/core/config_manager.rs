// src/core/config_manager.rs
//! Unified configuration: config.yaml plus environment overrides

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::environment::EnvironmentConfig;
use crate::loader::{ProfileLoader, ProfileSource};
use crate::theme::ThemeStore;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub timeout_seconds: u64,
}

impl ConfigManager {
    /// Load all configurations
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let environment_name = EnvironmentConfig::get_environment();
        let environment = match config_path {
            Some(path) => EnvironmentConfig::load_from(path, &environment_name)?,
            None => EnvironmentConfig::load()?,
        };
        let manager = Self::from_environment(environment)?;

        info!("Profile source: {}", manager.environment.profile_source);
        info!("Public files: {}", manager.environment.public_path.display());
        Ok(manager)
    }

    pub fn from_environment(mut environment: EnvironmentConfig) -> Result<Self> {
        if let Ok(source) = std::env::var("PORTFOLIO_PROFILE") {
            environment.profile_source = source;
        }

        let port = match std::env::var("ROCKET_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?,
            Err(_) => environment.port,
        };

        Ok(Self {
            environment,
            service: ServiceConfig {
                port,
                timeout_seconds: 30,
            },
        })
    }

    pub fn with_profile_source(mut self, source: String) -> Self {
        self.environment.profile_source = source;
        self
    }

    pub fn profile_loader(&self) -> ProfileLoader {
        ProfileLoader::new(ProfileSource::parse(&self.environment.profile_source))
            .with_timeout(self.service.timeout_seconds)
    }

    pub fn theme_store(&self) -> ThemeStore {
        ThemeStore::new(self.environment.theme_store_path.clone())
    }

    pub fn index_path(&self) -> &PathBuf {
        &self.environment.index_path
    }

    /// Ensure the directories the server writes to exist
    pub async fn ensure_directories(&self) -> Result<()> {
        use crate::core::FsOps;

        if let Some(parent) = self.environment.theme_store_path.parent() {
            FsOps::ensure_dir_exists(parent)
                .await
                .context("Failed to prepare theme store directory")?;
        }
        Ok(())
    }
}
