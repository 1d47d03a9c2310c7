//! Configuration types for opmanual

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// Icon rendering mode for the TUI.
///
/// Unicode glyphs look best; ASCII works on terminals without good font
/// coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Glyph set for accordion indicators and the warning sign
    #[serde(default)]
    pub icons: IconMode,

    /// Show the key hint bar at the bottom of the manual
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
