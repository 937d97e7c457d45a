// src/render/mod.rs
//! Profile projections: DOM regions and Markdown, both pure functions of a `Profile`

pub mod document;
pub mod dom;
pub mod duration;
pub mod icons;
pub mod markdown;

pub use document::{Document, MountPoint};
pub use dom::{render_dom, render_region};
pub use duration::{experience_text, parse_start_date, ExperienceSpan};
pub use icons::{HighlightIcon, SkillPalette};
pub use markdown::render_markdown;
