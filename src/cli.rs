// src/cli.rs
use crate::clipboard::{wait_for_release, FileClipboard, SystemClipboard};
use crate::core::{ConfigManager, FsOps};
use crate::render::{render_dom, Document, MountPoint};
use crate::session::PortfolioSession;
use crate::theme::{Theme, ThemeManager};
use crate::web::{start_web_server, DEFAULT_SYSTEM_THEME};
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Render and serve a personal portfolio from its profile data")]
pub struct PortfolioCli {
    #[command(subcommand)]
    pub command: Option<PortfolioCommand>,

    /// Path to config.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile source (file path or http(s) URL), overrides the configuration
    #[arg(long, global = true)]
    pub profile: Option<String>,
}

#[derive(Subcommand)]
pub enum PortfolioCommand {
    /// Serve the site and its API (default)
    Serve,
    /// Print the profile as Markdown
    Markdown {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Copy to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Print rendered HTML regions
    Html {
        /// Only this mount point id, e.g. experience-list
        #[arg(long)]
        section: Option<String>,
    },
    /// Print the experience duration derived from the career start date
    Experience,
    /// Show or toggle the saved theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    Show,
    Toggle,
}

pub async fn handle_command(cli: PortfolioCli) -> Result<()> {
    let mut config = ConfigManager::load(cli.config.as_deref())?;
    if let Some(profile) = cli.profile {
        config = config.with_profile_source(profile);
    }

    match cli.command.unwrap_or(PortfolioCommand::Serve) {
        PortfolioCommand::Serve => start_web_server(config).await,
        PortfolioCommand::Markdown { output, copy } => markdown(&config, output, copy).await,
        PortfolioCommand::Html { section } => html(&config, section).await,
        PortfolioCommand::Experience => experience(&config).await,
        PortfolioCommand::Theme { action } => theme(&config, action).await,
    }
}

/// CLI commands need the profile; a failed load is an error here.
async fn load_session(config: &ConfigManager) -> Result<PortfolioSession> {
    let profile = config
        .profile_loader()
        .fetch()
        .await
        .with_context(|| format!("Failed to load profile from {}", config.environment.profile_source))?;
    Ok(PortfolioSession::from_profile(profile))
}

async fn markdown(config: &ConfigManager, output: Option<PathBuf>, copy: bool) -> Result<()> {
    let session = load_session(config).await?;

    if copy {
        let mut clipboard = SystemClipboard::new();
        let outcome = session.copy_markdown(&mut clipboard).await;
        println!("{}", outcome.label());
        if !outcome.is_copied() {
            anyhow::bail!("Copy to clipboard failed");
        }

        // the selection disappears with its owner
        if clipboard.owns_selection() {
            eprintln!("Keeping the clipboard alive; press Enter after pasting");
            if !wait_for_release(BufReader::new(tokio::io::stdin())).await? {
                warn!("stdin closed, clipboard contents are released on exit");
            }
        }
        return Ok(());
    }

    match output {
        Some(path) => {
            let outcome = session
                .copy_markdown(&mut FileClipboard::new(path.clone()))
                .await;
            if !outcome.is_copied() {
                anyhow::bail!("Failed to write markdown to {}", path.display());
            }
            info!("Markdown written to {}", path.display());
        }
        None => print!("{}", session.markdown().unwrap_or_default()),
    }
    Ok(())
}

async fn html(config: &ConfigManager, section: Option<String>) -> Result<()> {
    let session = load_session(config).await?;
    let profile = session.profile().context("Profile not loaded")?;

    let mut document = match section.as_deref() {
        Some(id) => {
            let mount = MountPoint::from_id(id).with_context(|| {
                let known: Vec<&str> = MountPoint::ALL.iter().map(|m| m.id()).collect();
                format!("Unknown section: {}. Available: {:?}", id, known)
            })?;
            Document::with_mounts([mount])
        }
        None => Document::full(),
    };

    render_dom(profile, Local::now().date_naive(), &mut document);
    for (mount, markup) in document.rendered() {
        println!("<!-- {} -->", mount.id());
        println!("{}", markup);
    }
    Ok(())
}

async fn experience(config: &ConfigManager) -> Result<()> {
    let session = load_session(config).await?;
    let profile = session.profile().context("Profile not loaded")?;
    let start = profile
        .personal
        .career_start_date
        .as_deref()
        .context("Profile has no career start date")?;

    let text = crate::render::experience_text(start, Local::now().date_naive())?;
    println!("{}", text);
    Ok(())
}

async fn theme(config: &ConfigManager, action: ThemeCommand) -> Result<()> {
    let store = config.theme_store();
    if let Some(parent) = store.path().parent() {
        FsOps::ensure_dir_exists(parent).await?;
    }
    let mut themes = ThemeManager::new(store, DEFAULT_SYSTEM_THEME).await?;

    let theme: Theme = match action {
        ThemeCommand::Show => themes.current(),
        ThemeCommand::Toggle => themes.toggle().await?,
    };
    println!("{}", theme);
    Ok(())
}
