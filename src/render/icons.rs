// src/render/icons.rs
//! Closed lookup tables for highlight icons and skill palettes

/// Icon shown on a highlight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightIcon {
    Robot,
    Code,
    Cloud,
}

impl HighlightIcon {
    /// Unknown keys fall back to `Code`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "robot" => Self::Robot,
            "cloud" => Self::Cloud,
            _ => Self::Code,
        }
    }

    pub fn svg(&self) -> &'static str {
        match self {
            Self::Robot => r#"<svg class="w-8 h-8" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"/></svg>"#,
            Self::Code => r#"<svg class="w-8 h-8" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4"/></svg>"#,
            Self::Cloud => r#"<svg class="w-8 h-8" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 15a4 4 0 004 4h9a5 5 0 10-.1-9.999 5.002 5.002 0 10-9.78 2.096A4.001 4.001 0 003 15z"/></svg>"#,
        }
    }
}

/// Accent colours cycled across highlight cards
pub const HIGHLIGHT_COLORS: [&str; 3] = ["text-green-400", "text-blue-400", "text-purple-400"];

pub fn highlight_color(index: usize) -> &'static str {
    HIGHLIGHT_COLORS[index % HIGHLIGHT_COLORS.len()]
}

/// Colour scheme of a skill group, keyed by the skill category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillPalette {
    Programming,
    AiMl,
    DevOps,
    Cloud,
    Tools,
    Visualization,
}

impl SkillPalette {
    /// Unknown keys fall back to `Programming`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "aiml" => Self::AiMl,
            "devops" => Self::DevOps,
            "cloud" => Self::Cloud,
            "tools" => Self::Tools,
            "visualization" => Self::Visualization,
            _ => Self::Programming,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Programming => "#4ade80",
            Self::AiMl => "#a78bfa",
            Self::DevOps => "#fbbf24",
            Self::Cloud => "#60a5fa",
            Self::Tools => "#22d3ee",
            Self::Visualization => "#f87171",
        }
    }

    fn rgb(&self) -> &'static str {
        match self {
            Self::Programming => "74, 222, 128",
            Self::AiMl => "167, 139, 250",
            Self::DevOps => "251, 191, 36",
            Self::Cloud => "96, 165, 250",
            Self::Tools => "34, 211, 238",
            Self::Visualization => "248, 113, 113",
        }
    }

    pub fn background(&self) -> String {
        format!("rgba({}, 0.1)", self.rgb())
    }

    pub fn border(&self) -> String {
        format!("rgba({}, 0.3)", self.rgb())
    }

    /// Inline style applied to each skill tag
    pub fn tag_style(&self) -> String {
        format!(
            "background: {}; border: 1px solid {}; color: {}",
            self.background(),
            self.border(),
            self.color()
        )
    }
}
