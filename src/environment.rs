// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub public_path: PathBuf,
    pub index_path: PathBuf,
    /// URL of the static JSON endpoint or a local file path
    pub profile_source: String,
    pub theme_store_path: PathBuf,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            public_path: PathBuf::from("public"),
            index_path: PathBuf::from("public/index.html"),
            profile_source: "public/data/profile.json".to_string(),
            theme_store_path: PathBuf::from(".portfolio/theme.json"),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: Option<EnvironmentConfig>,
}

impl EnvironmentConfig {
    /// Load configuration for the current environment from `config.yaml`
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.yaml"), &Self::get_environment())
    }

    pub fn get_environment() -> String {
        std::env::var("PORTFOLIO_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Built-in defaults when the file is missing
    pub fn load_from(config_path: &Path, environment: &str) -> Result<Self> {
        info!("Loading configuration for environment: {}", environment);

        if !config_path.exists() {
            info!(
                "{} not found, using built-in defaults",
                config_path.display()
            );
            return Self::default().resolved();
        }

        let config_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config_file: ConfigFile = serde_yaml::from_str(&config_content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let env_config = match environment {
            "production" => config_file
                .production
                .context("config.yaml has no production section")?,
            _ => config_file.local,
        };

        env_config.resolved()
    }

    /// Make paths absolute against the working directory
    fn resolved(self) -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        let resolve = |path: &PathBuf| crate::core::FsOps::normalize_path(&current_dir, path);

        let profile_source = if crate::utils::is_remote_source(&self.profile_source) {
            self.profile_source
        } else {
            resolve(&PathBuf::from(&self.profile_source))
                .display()
                .to_string()
        };

        Ok(Self {
            public_path: resolve(&self.public_path),
            index_path: resolve(&self.index_path),
            profile_source,
            theme_store_path: resolve(&self.theme_store_path),
            port: self.port,
        })
    }
}
