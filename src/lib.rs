//! Personal portfolio renderer: loads a profile record once and projects it
//! into page regions and Markdown, with a small server around it.

pub mod cli;
pub mod clipboard;
pub mod core;
pub mod environment;
pub mod loader;
pub mod page;
pub mod render;
pub mod session;
pub mod theme;
pub mod types;
pub mod utils;
pub mod web;

pub use loader::{ProfileLoader, ProfileSource};
pub use render::{render_dom, render_markdown, Document, MountPoint};
pub use session::PortfolioSession;
pub use types::Profile;
pub use web::start_web_server;
