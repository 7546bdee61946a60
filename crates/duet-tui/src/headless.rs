//! Headless mode for the duet TUI.
//!
//! Replays a key script against the shell on ratatui's `TestBackend`,
//! enabling E2E testing and automation without a real terminal.
//!
//! Scripts are comma-separated tokens:
//! `down,down,enter,tab,/,i,t,e,m,esc,resize:100x40,q`

use std::io;

use crossterm::event::KeyCode;
use duet_engine::{FocusState, Row};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use serde::Serialize;
use tracing::debug;

use crate::app::App;
use crate::event::Event;
use crate::layout::render_app;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after the last render.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessState {
    /// Which panel had focus.
    pub focus: FocusState,
    /// Table contents.
    pub rows: Vec<Row>,
    /// Title of the item under the list cursor.
    pub selected_item: Option<String>,
    /// Whether the script ended with a quit.
    pub should_quit: bool,
    /// Number of events applied before stopping.
    pub events_applied: usize,
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
}

/// Configuration for headless mode.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Errors parsing a key script.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key {0:?}")]
    UnknownKey(String),

    #[error("invalid resize {0:?}, expected resize:WIDTHxHEIGHT")]
    InvalidResize(String),
}

/// Parse a comma-separated key script.
pub fn parse_script(script: &str) -> Result<Vec<Event>, ScriptError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<Event, ScriptError> {
    if let Some(size) = token.strip_prefix("resize:") {
        return parse_resize(size).ok_or_else(|| ScriptError::InvalidResize(token.to_string()));
    }
    if let Some(rest) = token.strip_prefix("ctrl+") {
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Event::ctrl(c)),
            _ => Err(ScriptError::UnknownKey(token.to_string())),
        };
    }

    let code = match token {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        "comma" => KeyCode::Char(','),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(ScriptError::UnknownKey(token.to_string())),
            }
        }
    };
    Ok(Event::key(code))
}

fn parse_resize(size: &str) -> Option<Event> {
    let (w, h) = size.split_once('x')?;
    Some(Event::Resize(w.parse().ok()?, h.parse().ok()?))
}

/// Run `events` through `app` on a test backend and capture the final state.
///
/// The app first receives a resize to the configured size. Replay stops at
/// the first event that makes the app quit.
pub fn run_headless(
    mut app: App,
    config: HeadlessConfig,
    events: &[Event],
) -> io::Result<HeadlessState> {
    let backend = TestBackend::new(config.width, config.height);
    let mut terminal = Terminal::new(backend)?;

    app.handle_event(Event::Resize(config.width, config.height));
    draw(&mut terminal, &app)?;

    let mut applied = 0;
    for event in events {
        if let Event::Resize(width, height) = *event {
            terminal.backend_mut().resize(width, height);
        }
        app.handle_event(event.clone());
        applied += 1;
        draw(&mut terminal, &app)?;

        if app.should_quit {
            break;
        }
    }
    debug!(applied, total = events.len(), "headless replay finished");

    Ok(HeadlessState {
        focus: app.focus,
        rows: app.table.rows().to_vec(),
        selected_item: app.list.selected_item().map(|item| item.title().to_string()),
        should_quit: app.should_quit,
        events_applied: applied,
        screen_contents: buffer_to_string(terminal.backend().buffer()),
    })
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &App) -> io::Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        render_app(app, area, frame.buffer_mut());
    })?;
    Ok(())
}

/// Convert a buffer to plain text, one line per row.
///
/// Trailing spaces on each line are trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(usize::from(area.height));
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect();
        lines.push(line.trim_end_matches(' ').to_string());
    }
    lines.join("\n")
}
