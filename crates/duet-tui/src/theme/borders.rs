//! Border sets for coloured and monochrome terminals.
//!
//! Supports `NO_COLOR`: without colour the focused panel cannot be told apart
//! by border colour, so it gets a double border instead.

use ratatui::symbols::border;

/// Border rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Colour distinguishes focus; every panel uses a plain border.
    #[default]
    Colored,
    /// Shape distinguishes focus (used with `NO_COLOR`).
    Monochrome,
}

/// Border set based on border mode.
#[derive(Debug, Clone, Default)]
pub struct BorderSet {
    mode: BorderMode,
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: BorderMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> BorderMode {
        self.mode
    }

    /// Normal (unfocused) borders.
    pub fn normal(&self) -> border::Set {
        border::PLAIN
    }

    /// Focused borders - plain with colour, double without.
    pub fn focused(&self) -> border::Set {
        match self.mode {
            BorderMode::Colored => border::PLAIN,
            BorderMode::Monochrome => border::DOUBLE,
        }
    }

    /// Border set for a panel.
    pub fn for_focus(&self, focused: bool) -> border::Set {
        if focused {
            self.focused()
        } else {
            self.normal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_colored_mode() {
        assert_eq!(BorderSet::default().mode(), BorderMode::Colored);
    }

    #[test]
    fn test_colored_borders() {
        let borders = BorderSet::new(BorderMode::Colored);
        assert_eq!(borders.normal().top_left, "┌");
        assert_eq!(borders.focused().top_left, "┌");
    }

    #[test]
    fn test_monochrome_borders() {
        let borders = BorderSet::new(BorderMode::Monochrome);
        assert_eq!(borders.for_focus(false).top_left, "┌");
        assert_eq!(borders.for_focus(true).top_left, "╔");
    }
}
