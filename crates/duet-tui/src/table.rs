//! Scrollable data table panel.

use crossterm::event::KeyCode;
use duet_engine::{sample_rows, Row};

use crate::event::Event;

/// Number of body rows visible at once.
pub const TABLE_HEIGHT: u16 = 7;

/// Table panel state.
#[derive(Debug, Clone)]
pub struct TablePanel {
    rows: Vec<Row>,
    selected: Option<usize>,
    focused: bool,
    width: u16,
}

impl Default for TablePanel {
    fn default() -> Self {
        Self::new(sample_rows())
    }
}

impl TablePanel {
    /// Create a blurred table with the cursor on the first row.
    pub fn new(rows: Vec<Row>) -> Self {
        let selected = (!rows.is_empty()).then_some(0);
        Self {
            rows,
            selected,
            focused: false,
            width: 0,
        }
    }

    /// Replace every row; the cursor returns to the top.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.selected = (!rows.is_empty()).then_some(0);
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        TABLE_HEIGHT
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Index of the row under the cursor.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    fn move_up(&mut self, n: usize) {
        if let Some(current) = self.selected {
            self.selected = Some(current.saturating_sub(n));
        }
    }

    fn move_down(&mut self, n: usize) {
        if let Some(current) = self.selected {
            let last = self.rows.len().saturating_sub(1);
            self.selected = Some(current.saturating_add(n).min(last));
        }
    }

    /// Process an event. Navigation keys only apply while focused.
    pub fn handle_input(&mut self, event: &Event) {
        let Event::Key(key) = event else {
            return;
        };
        if !self.focused {
            return;
        }

        let page = usize::from(TABLE_HEIGHT);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(1),
            KeyCode::PageUp => self.move_up(page),
            KeyCode::PageDown => self.move_down(page),
            KeyCode::Home | KeyCode::Char('g') => self.move_up(usize::MAX),
            KeyCode::End | KeyCode::Char('G') => self.move_down(usize::MAX),
            _ => {}
        }
    }
}
