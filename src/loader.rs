// src/loader.rs
//! Fetches the profile record from a static JSON endpoint or a local file

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

use crate::core::FsOps;
use crate::types::Profile;
use crate::utils::is_remote_source;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSource {
    Url(String),
    File(PathBuf),
}

impl ProfileSource {
    pub fn parse(source: &str) -> Self {
        if is_remote_source(source) {
            Self::Url(source.trim().to_string())
        } else {
            Self::File(PathBuf::from(source.trim()))
        }
    }
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct ProfileLoader {
    source: ProfileSource,
    timeout_seconds: u64,
}

impl ProfileLoader {
    pub fn new(source: ProfileSource) -> Self {
        Self {
            source,
            timeout_seconds: 30,
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn source(&self) -> &ProfileSource {
        &self.source
    }

    /// Load the profile, logging and swallowing any failure.
    pub async fn load(&self) -> Option<Profile> {
        match self.fetch().await {
            Ok(profile) => {
                info!(
                    "Loaded profile for {} from {}",
                    profile.personal.name, self.source
                );
                Some(profile)
            }
            Err(e) => {
                error!("Error loading profile data from {}: {:#}", self.source, e);
                None
            }
        }
    }

    pub async fn fetch(&self) -> Result<Profile> {
        match &self.source {
            ProfileSource::Url(url) => self.fetch_url(url).await,
            ProfileSource::File(path) => Self::fetch_file(path).await,
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<Profile> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        let body = client
            .get(url)
            .send()
            .await
            .context("HTTP request failed")?
            .error_for_status()
            .context("Profile endpoint returned an error status")?
            .text()
            .await
            .context("Failed to read profile response body")?;

        parse_json(&body)
    }

    async fn fetch_file(path: &Path) -> Result<Profile> {
        let content = FsOps::read_file_safe(path).await?;

        match FsOps::get_extension(path).as_deref() {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).context("Failed to parse profile YAML")
            }
            Some("toml") => toml::from_str(&content).context("Failed to parse profile TOML"),
            _ => parse_json(&content),
        }
    }
}

pub fn parse_json(content: &str) -> Result<Profile> {
    serde_json::from_str(content).context("Failed to parse profile JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::fixtures::SAMPLE_PROFILE_JSON;

    #[test]
    fn test_source_parse() {
        assert_eq!(
            ProfileSource::parse("http://localhost:3000/data/profile.json"),
            ProfileSource::Url("http://localhost:3000/data/profile.json".into())
        );
        assert_eq!(
            ProfileSource::parse("public/data/profile.json"),
            ProfileSource::File(PathBuf::from("public/data/profile.json"))
        );
    }

    #[tokio::test]
    async fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, SAMPLE_PROFILE_JSON).unwrap();

        let profile = ProfileLoader::new(ProfileSource::File(path)).load().await;
        assert_eq!(profile.map(|p| p.personal.name), Some("Ada Example".into()));
    }

    #[tokio::test]
    async fn test_load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.yaml");
        std::fs::write(
            &path,
            "personal:\n  name: Yaml Person\n  title: Engineer\nskills:\n  tools:\n    title: Tools\n    items: [git]\n  cloud:\n    title: Cloud\n    items: [aws]\n",
        )
        .unwrap();

        let profile = ProfileLoader::new(ProfileSource::File(path))
            .fetch()
            .await
            .unwrap();
        assert_eq!(profile.personal.name, "Yaml Person");
        let keys: Vec<&str> = profile.skills.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["tools", "cloud"]);
    }

    #[tokio::test]
    async fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(
            &path,
            "interests = [\"Chess\"]\n\n[personal]\nname = \"Toml Person\"\ntitle = \"Engineer\"\n",
        )
        .unwrap();

        let profile = ProfileLoader::new(ProfileSource::File(path))
            .fetch()
            .await
            .unwrap();
        assert_eq!(profile.personal.name, "Toml Person");
        assert_eq!(profile.interests, vec!["Chess"]);
    }

    #[tokio::test]
    async fn test_toml_skills_keep_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(
            &path,
            "[personal]\nname = \"Toml Person\"\ntitle = \"Engineer\"\n\n[skills.zeta]\ntitle = \"Zeta\"\nitems = [\"z\"]\n\n[skills.alpha]\ntitle = \"Alpha\"\nitems = [\"a\"]\n",
        )
        .unwrap();

        let profile = ProfileLoader::new(ProfileSource::File(path))
            .fetch()
            .await
            .unwrap();
        let keys: Vec<&str> = profile.skills.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[tokio::test]
    async fn test_malformed_json_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "{ \"personal\": ").unwrap();

        assert!(ProfileLoader::new(ProfileSource::File(path)).load().await.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_yields_none() {
        let loader = ProfileLoader::new(ProfileSource::File(PathBuf::from(
            "/nonexistent/profile.json",
        )));
        assert!(loader.load().await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_none() {
        let loader = ProfileLoader::new(ProfileSource::Url(
            "http://127.0.0.1:9/data/profile.json".into(),
        ))
        .with_timeout(2);
        assert!(loader.load().await.is_none());
    }
}
