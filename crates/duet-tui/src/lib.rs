//! duet-tui: two-panel list/table terminal UI
//!
//! This crate provides the TUI layer for duet, including:
//! - The list panel with filtering and the detail table panel
//! - The shell that routes input and focus between them
//! - Theme, borders and shared widgets
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod headless;
mod layout;
mod list;
mod table;
#[cfg(test)]
pub mod test_utils;
mod theme;
pub mod widgets;

pub use app::{App, UiConfig};
pub use duet_engine;
pub use event::{poll_event, Event};
pub use headless::{parse_script, run_headless, HeadlessConfig, HeadlessState, ScriptError};
pub use layout::{panel_areas, render_app, PanelAreas};
pub use list::{FilterState, ListMessage, ListPanel, LIST_TITLE};
pub use table::{TablePanel, TABLE_HEIGHT};
pub use theme::{BorderMode, BorderSet, Theme, ThemeError};

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use duet_engine::Config;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::time::Duration;
use tracing::info;

/// Poll interval for the interactive loop (~60fps).
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Errors from running the interactive TUI.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop until quit, and restores the
/// terminal on exit (including on error).
pub fn run_tui(config: &Config) -> Result<(), TuiError> {
    let app = App::new(config, &UiConfig::from_env())?;

    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_shell(&mut terminal, app)?;

    terminal.show_cursor()?;
    Ok(())
}

/// Run the event loop on any backend until the app quits.
pub fn run_shell<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);
    info!(width = size.width, height = size.height, "tui started");

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_app(&app, area, frame.buffer_mut());
        })?;

        if let Some(event) = poll_event(POLL_INTERVAL)? {
            app.handle_event(event);
        }

        if app.should_quit {
            break;
        }
    }

    info!("tui exited");
    Ok(())
}
