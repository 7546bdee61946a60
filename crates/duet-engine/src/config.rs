//! Configuration types for duet.
//!
//! This module defines the configuration schema: frame styling, the
//! selection trigger policy and logging settings. Every field has a default,
//! so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logging::LogConfig;

/// Main configuration for duet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame styling.
    pub style: StyleConfig,

    /// When a list selection regenerates the table.
    pub selection_trigger: SelectionTrigger,

    /// Logging settings.
    pub log: LogConfig,
}

/// When a list selection regenerates the table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTrigger {
    /// Any forwarded event while the list is focused and has a selection.
    #[default]
    Auto,
    /// Only an explicit Enter on the list.
    Confirm,
}

impl std::str::FromStr for SelectionTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "confirm" => Ok(Self::Confirm),
            other => Err(format!("unknown selection trigger: {other}")),
        }
    }
}

/// Outer margin around the whole frame, in cells per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameMargin {
    pub vertical: u16,
    pub horizontal: u16,
}

impl Default for FrameMargin {
    fn default() -> Self {
        Self {
            vertical: 1,
            horizontal: 2,
        }
    }
}

/// Colours and spacing used when composing the frame.
///
/// Colours are strings: an ANSI index (`"205"`), a name (`"magenta"`) or
/// `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Outer margin.
    pub margin: FrameMargin,

    /// Columns between the two panels.
    pub gap: u16,

    /// List title and selection marker.
    pub accent_color: String,

    /// Border of the unfocused panel.
    pub border_color: String,

    /// Border of the focused panel.
    pub focused_border_color: String,

    /// Rule under the table header.
    pub header_border_color: String,

    /// Foreground of the selected table row.
    pub selected_fg: String,

    /// Background of the selected table row.
    pub selected_bg: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            margin: FrameMargin::default(),
            gap: 2,
            accent_color: "205".into(),
            border_color: "240".into(),
            focused_border_color: "205".into(),
            header_border_color: "240".into(),
            selected_fg: "229".into(),
            selected_bg: "57".into(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
