//! Test utilities for duet-tui snapshot and integration testing.
//!
//! This module provides helpers for building an app and rendering it to a
//! string for snapshot testing.

use crate::app::{App, UiConfig};
use crate::layout::render_app;
use duet_engine::Config;
use ratatui::{buffer::Buffer, layout::Rect};

pub use crate::headless::buffer_to_string;

/// Default configuration and coloured borders, sized to 80x24.
pub fn create_test_app() -> App {
    let mut app =
        App::new(&Config::default(), &UiConfig::default()).expect("default theme must resolve");
    app.handle_resize(80, 24);
    app
}

/// Render the app into a fresh buffer and return it as a string.
pub fn render_app_to_string(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_app(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert_eq!(app.viewport.width, 80);
        assert_eq!(app.list.total_items(), 3);
    }

    #[test]
    fn test_render_app_to_string_has_one_line_per_row() {
        let app = create_test_app();
        let screen = render_app_to_string(&app, 40, 10);
        assert_eq!(screen.split('\n').count(), 10);
    }
}
