//! Colour palette resolved from [`StyleConfig`].
//!
//! Colour strings go through ratatui's `Color::from_str`, so ANSI indices
//! (`"205"`), names (`"magenta"`) and `#rrggbb` all work.

use std::str::FromStr;

use duet_engine::StyleConfig;
use ratatui::style::{Color, Modifier, Style};

/// Theme color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Accents
    pub accent: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
    pub header_border: Color,

    // Table selection
    pub selected_fg: Color,
    pub selected_bg: Color,

    /// No colours at all; emphasis through modifiers only.
    pub monochrome: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Indexed(205),
            text: Color::Reset,
            subtext: Color::Indexed(245),
            muted: Color::Indexed(241),
            border: Color::Indexed(240),
            border_focused: Color::Indexed(205),
            header_border: Color::Indexed(240),
            selected_fg: Color::Indexed(229),
            selected_bg: Color::Indexed(57),
            monochrome: false,
        }
    }
}

impl Theme {
    /// Resolve a theme from the style configuration.
    pub fn from_style(style: &StyleConfig) -> Result<Self, ThemeError> {
        Ok(Self {
            accent: parse_color("accent_color", &style.accent_color)?,
            border: parse_color("border_color", &style.border_color)?,
            border_focused: parse_color("focused_border_color", &style.focused_border_color)?,
            header_border: parse_color("header_border_color", &style.header_border_color)?,
            selected_fg: parse_color("selected_fg", &style.selected_fg)?,
            selected_bg: parse_color("selected_bg", &style.selected_bg)?,
            ..Self::default()
        })
    }

    /// Theme for `NO_COLOR` terminals.
    pub fn monochrome() -> Self {
        Self {
            accent: Color::Reset,
            text: Color::Reset,
            subtext: Color::Reset,
            muted: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            header_border: Color::Reset,
            selected_fg: Color::Reset,
            selected_bg: Color::Reset,
            monochrome: true,
        }
    }

    /// Style of the highlighted table row.
    pub fn selected_row(&self) -> Style {
        if self.monochrome {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.selected_fg)
                .bg(self.selected_bg)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Border style for a panel.
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ThemeError> {
    Color::from_str(value).map_err(|_| ThemeError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// Errors resolving a theme.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid colour {value:?} for {field}")]
    InvalidColor { field: &'static str, value: String },
}
