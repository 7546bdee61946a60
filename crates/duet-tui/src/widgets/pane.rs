//! Bordered panel box.
//!
//! Supports focused/unfocused states with different border styles.

use ratatui::widgets::{Block, Borders};

use crate::theme::{BorderSet, Theme};

/// Bordered box around a panel.
pub struct Pane<'a> {
    focused: bool,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    /// Create a new pane.
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            focused: false,
            theme,
            borders,
        }
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Build the border block.
    pub fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.for_focus(self.focused))
            .border_style(self.theme.panel_border(self.focused))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::BorderMode;
    use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

    #[test]
    fn test_pane_builder() {
        let theme = Theme::default();
        let borders = BorderSet::default();

        let pane = Pane::new(&theme, &borders);
        assert!(!pane.focused);
        assert!(pane.focused(true).focused);
    }

    #[test]
    fn test_focused_border_color() {
        let theme = Theme::default();
        let borders = BorderSet::default();
        let area = Rect::new(0, 0, 6, 3);

        let mut buf = Buffer::empty(area);
        Pane::new(&theme, &borders).focused(true).block().render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(0, 0)].fg, Color::Indexed(205));

        let mut buf = Buffer::empty(area);
        Pane::new(&theme, &borders).block().render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Indexed(240));
    }

    #[test]
    fn test_monochrome_focused_border_is_double() {
        let theme = Theme::monochrome();
        let borders = BorderSet::new(BorderMode::Monochrome);
        let area = Rect::new(0, 0, 6, 3);

        let mut buf = Buffer::empty(area);
        Pane::new(&theme, &borders).focused(true).block().render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "╔");
    }
}
