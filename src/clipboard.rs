// src/clipboard.rs
//! Copy-as-Markdown action and the sinks it can write to

use anyhow::{anyhow, Context, Result};
use copypasta::{ClipboardContext, ClipboardProvider};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::core::FsOps;
use crate::render::render_markdown;
use crate::types::Profile;

#[rocket::async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the copied text lives only as long as this process.
    /// X11 and Wayland serve the selection from its owner; macOS and Windows keep a copy.
    pub fn owns_selection(&self) -> bool {
        cfg!(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))
            && self.ctx.is_some()
    }
}

#[rocket::async_trait(?Send)]
impl Clipboard for SystemClipboard {
    async fn write_text(&mut self, text: &str) -> Result<()> {
        let mut ctx = ClipboardContext::new().map_err(|e| anyhow!("Clipboard error: {}", e))?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| anyhow!("Clipboard error: {}", e))?;
        self.ctx = Some(ctx);
        Ok(())
    }
}

/// Block until a line (or EOF) arrives on `input`. Returns false on EOF.
pub async fn wait_for_release<R: AsyncBufRead + Unpin>(mut input: R) -> Result<bool> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .await
        .context("Failed to read from stdin")?;
    Ok(read > 0)
}

/// Writes the copied text to a file instead, the "download" variant
pub struct FileClipboard {
    pub path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[rocket::async_trait(?Send)]
impl Clipboard for FileClipboard {
    async fn write_text(&mut self, text: &str) -> Result<()> {
        FsOps::write_file_safe(&self.path, text).await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CopyOutcome {
    Copied { bytes: usize },
    Failed { reason: String },
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }

    /// Button label reported back to the UI affordance
    pub fn label(&self) -> &'static str {
        match self {
            Self::Copied { .. } => "✓ copied!",
            Self::Failed { .. } => "✗ failed",
        }
    }
}

/// Render the profile as Markdown and hand it to the clipboard. Never fails.
pub async fn copy_markdown(profile: &Profile, clipboard: &mut dyn Clipboard) -> CopyOutcome {
    let markdown = render_markdown(profile);

    match clipboard.write_text(&markdown).await {
        Ok(()) => {
            info!("Copied {} bytes of profile markdown", markdown.len());
            CopyOutcome::Copied {
                bytes: markdown.len(),
            }
        }
        Err(e) => {
            warn!("Copy to clipboard failed: {:#}", e);
            CopyOutcome::Failed {
                reason: format!("{:#}", e),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Default)]
    pub struct MemoryClipboard {
        pub contents: Option<String>,
    }

    #[rocket::async_trait(?Send)]
    impl Clipboard for MemoryClipboard {
        async fn write_text(&mut self, text: &str) -> Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    pub struct BrokenClipboard;

    #[rocket::async_trait(?Send)]
    impl Clipboard for BrokenClipboard {
        async fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(anyhow!("Clipboard error: permission denied"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{BrokenClipboard, MemoryClipboard};
    use super::*;
    use crate::types::profile::fixtures::sample_profile;

    #[tokio::test]
    async fn test_copy_writes_markdown() {
        let profile = sample_profile();
        let mut clipboard = MemoryClipboard::default();

        let outcome = copy_markdown(&profile, &mut clipboard).await;

        let expected = render_markdown(&profile);
        assert_eq!(
            outcome,
            CopyOutcome::Copied {
                bytes: expected.len()
            }
        );
        assert_eq!(outcome.label(), "✓ copied!");
        assert_eq!(clipboard.contents, Some(expected));
    }

    #[tokio::test]
    async fn test_copy_failure_is_reported_not_raised() {
        let outcome = copy_markdown(&sample_profile(), &mut BrokenClipboard).await;
        assert!(!outcome.is_copied());
        assert_eq!(outcome.label(), "✗ failed");
        assert!(matches!(outcome, CopyOutcome::Failed { reason } if reason.contains("permission denied")));
    }

    #[tokio::test]
    async fn test_file_clipboard_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports/profile.md");
        let outcome = copy_markdown(&sample_profile(), &mut FileClipboard::new(path.clone())).await;
        assert!(outcome.is_copied());
        assert!(std::fs::read_to_string(path).unwrap().starts_with("# Ada Example"));
    }

    #[tokio::test]
    async fn test_file_clipboard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut clipboard = FileClipboard::new(blocker.join("profile.md"));
        assert!(!copy_markdown(&sample_profile(), &mut clipboard).await.is_copied());
    }

    #[test]
    fn test_fresh_system_clipboard_owns_nothing() {
        assert!(!SystemClipboard::new().owns_selection());
    }

    #[tokio::test]
    async fn test_wait_for_release() {
        assert!(wait_for_release(&b"\n"[..]).await.unwrap());
        assert!(!wait_for_release(&b""[..]).await.unwrap());
    }
}
