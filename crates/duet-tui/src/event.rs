//! Event handling for the duet TUI.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events the shell reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
}

impl Event {
    /// Plain key press without modifiers.
    pub fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Key press with Ctrl held.
    pub fn ctrl(c: char) -> Self {
        Self::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// Translate a crossterm event. Key releases, mouse and focus events are dropped.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            CrosstermEvent::Resize(w, h) => Some(Self::Resize(w, h)),
            _ => None,
        }
    }
}

/// `q` or Ctrl+C.
pub fn is_quit(key: &KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return key.code == KeyCode::Char('c');
    }
    key.code == KeyCode::Char('q')
}

/// Plain Tab (Shift+Tab arrives as `BackTab` and is forwarded like any other key).
pub fn is_focus_toggle(key: &KeyEvent) -> bool {
    key.code == KeyCode::Tab
}

/// Wait up to `timeout` for the next relevant terminal event.
pub fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Event::from_crossterm(event::read()?))
    } else {
        Ok(None)
    }
}
