//! Side-by-side frame layout.
//!
//! ```text
//!  (margin)
//!  ┌──────────┐  ┌──────────┐
//!  │ list     │  │ table    │
//!  │          │  └──────────┘
//!  └──────────┘
//! ```
//!
//! Panel boxes take their own sizes and are clipped to the frame, so a
//! terminal narrower than the two panels cuts off the right side of the table.

use duet_engine::{FocusState, FrameMargin, PanelSize};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::app::App;
use crate::widgets::{ListView, TableView};

/// Screen areas of the two panel boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelAreas {
    pub list: Rect,
    pub table: Rect,
}

/// Place the list and table boxes inside `area`.
pub fn panel_areas(
    area: Rect,
    margin: FrameMargin,
    gap: u16,
    list: PanelSize,
    table: PanelSize,
) -> PanelAreas {
    let x = area.x.saturating_add(margin.horizontal);
    let y = area.y.saturating_add(margin.vertical);
    let inner = Rect::new(
        x,
        y,
        area.width.saturating_sub(margin.horizontal.saturating_mul(2)),
        area.height.saturating_sub(margin.vertical.saturating_mul(2)),
    );

    let list_rect = Rect::new(inner.x, inner.y, list.width, list.height).intersection(inner);

    let table_x = inner.x.saturating_add(list.width).saturating_add(gap);
    let table_rect = Rect::new(table_x, inner.y, table.width, table.height).intersection(inner);

    PanelAreas {
        list: list_rect,
        table: table_rect,
    }
}

/// Render the whole frame.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    let table_size = PanelSize::new(app.table.width(), TableView::box_height(&app.table));
    let areas = panel_areas(area, app.margin, app.gap, app.list.size(), table_size);

    if !areas.list.is_empty() {
        ListView::new(&app.list, &app.theme, &app.borders)
            .focused(app.focus == FocusState::List)
            .render(areas.list, buf);
    }
    if !areas.table.is_empty() {
        TableView::new(&app.table, &app.theme, &app.borders)
            .focused(app.focus == FocusState::Table)
            .render(areas.table, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, render_app_to_string};
    use ratatui::style::Color;

    #[test]
    fn test_panel_areas_standard() {
        let areas = panel_areas(
            Rect::new(0, 0, 100, 40),
            FrameMargin::default(),
            2,
            PanelSize::new(48, 38),
            PanelSize::new(48, 11),
        );
        assert_eq!(areas.list, Rect::new(2, 1, 48, 38));
        // 2 + 48 + 2 = 52; the frame ends at column 98.
        assert_eq!(areas.table, Rect::new(52, 1, 46, 11));
    }

    #[test]
    fn test_panel_areas_wide_terminal_leaves_space() {
        let areas = panel_areas(
            Rect::new(0, 0, 200, 40),
            FrameMargin::default(),
            2,
            PanelSize::new(40, 38),
            PanelSize::new(40, 11),
        );
        assert_eq!(areas.table, Rect::new(44, 1, 40, 11));
    }

    #[test]
    fn test_panel_areas_tiny_terminal() {
        let areas = panel_areas(
            Rect::new(0, 0, 3, 2),
            FrameMargin::default(),
            2,
            PanelSize::new(0, 0),
            PanelSize::new(0, 11),
        );
        assert!(areas.list.is_empty());
        assert!(areas.table.is_empty());
    }

    #[test]
    fn test_render_app_side_by_side() {
        let app = create_test_app();
        let screen = render_app_to_string(&app, 80, 24);
        let lines: Vec<&str> = screen.split('\n').collect();

        assert_eq!(lines.len(), 24);
        assert!(lines[0].is_empty());
        assert!(lines[2].contains("Select an Item"));
        assert!(lines[2].contains("ID"));
        assert!(lines[4].contains("Sample 1"));
    }

    #[test]
    fn test_focused_panel_gets_accent_border() {
        let mut app = create_test_app();
        let area = Rect::new(0, 0, 80, 24);

        let mut buf = Buffer::empty(area);
        render_app(&app, area, &mut buf);
        // List box starts at (2, 1); table box at (2 + 38 + 2, 1).
        assert_eq!(buf[(2, 1)].fg, Color::Indexed(205));
        assert_eq!(buf[(42, 1)].fg, Color::Indexed(240));

        app.toggle_focus();
        let mut buf = Buffer::empty(area);
        render_app(&app, area, &mut buf);
        assert_eq!(buf[(2, 1)].fg, Color::Indexed(240));
        assert_eq!(buf[(42, 1)].fg, Color::Indexed(205));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut app = create_test_app();
        app.handle_resize(4, 2);
        let screen = render_app_to_string(&app, 4, 2);
        assert!(screen.trim().is_empty());
    }
}
