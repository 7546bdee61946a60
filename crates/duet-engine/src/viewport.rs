//! Terminal viewport and the panel sizes derived from it.

use crate::config::FrameMargin;

/// Width and height of a panel, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelSize {
    pub width: u16,
    pub height: u16,
}

impl PanelSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Current terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width given to each panel: half the terminal minus the horizontal margin.
    ///
    /// Saturates at zero on very narrow terminals.
    pub fn half_width(&self, margin: FrameMargin) -> u16 {
        (self.width / 2).saturating_sub(margin.horizontal)
    }

    /// Size of the list panel: half width, full height minus the vertical frame.
    pub fn list_size(&self, margin: FrameMargin) -> PanelSize {
        PanelSize::new(
            self.half_width(margin),
            self.height.saturating_sub(margin.vertical.saturating_mul(2)),
        )
    }

    /// Width of the table panel.
    pub fn table_width(&self, margin: FrameMargin) -> u16 {
        self.half_width(margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_resize() {
        let viewport = Viewport::new(100, 40);
        let margin = FrameMargin::default();
        assert_eq!(viewport.list_size(margin), PanelSize::new(48, 38));
        assert_eq!(viewport.table_width(margin), 48);
    }

    #[test]
    fn test_odd_width_rounds_down() {
        let viewport = Viewport::new(81, 24);
        let margin = FrameMargin::default();
        assert_eq!(viewport.list_size(margin), PanelSize::new(38, 22));
    }

    #[test]
    fn test_tiny_viewport_clamps_to_zero() {
        let viewport = Viewport::new(3, 1);
        let margin = FrameMargin::default();
        assert_eq!(viewport.list_size(margin), PanelSize::new(0, 0));
        assert_eq!(viewport.table_width(margin), 0);
    }

    #[test]
    fn test_custom_margin() {
        let viewport = Viewport::new(100, 40);
        let margin = FrameMargin {
            vertical: 0,
            horizontal: 0,
        };
        assert_eq!(viewport.list_size(margin), PanelSize::new(50, 40));
    }
}
