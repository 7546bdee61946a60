//! Selectable, filterable list panel.
//!
//! The panel owns the items, a cursor into the *visible* (filtered) items,
//! the filter query and the focus/help flags. Rendering lives in
//! [`crate::widgets::ListView`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use duet_engine::{Item, PanelSize};

use crate::event::Event;

/// Title shown at the top of the panel.
pub const LIST_TITLE: &str = "Select an Item";

/// Messages the list emits to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    /// Enter was pressed on an item.
    ItemSelected(Item),
}

/// Filter state of the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    /// No filter.
    #[default]
    Unfiltered,
    /// Query being typed.
    Filtering(String),
    /// Query applied; browsing the filtered items.
    Applied(String),
}

impl FilterState {
    /// Current query, empty when unfiltered.
    pub fn query(&self) -> &str {
        match self {
            Self::Unfiltered => "",
            Self::Filtering(q) | Self::Applied(q) => q,
        }
    }
}

/// List panel state.
#[derive(Debug, Clone)]
pub struct ListPanel {
    items: Vec<Item>,
    cursor: usize,
    filter: FilterState,
    focused: bool,
    show_help: bool,
    size: PanelSize,
}

impl ListPanel {
    /// Create a focused list with the cursor on the first item.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            cursor: 0,
            filter: FilterState::Unfiltered,
            focused: true,
            show_help: true,
            size: PanelSize::default(),
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.size = PanelSize::new(width, height);
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    /// Toggle key handling and the help footer together.
    pub fn set_focus(&mut self, active: bool) {
        self.focused = active;
        self.show_help = active;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn shows_help(&self) -> bool {
        self.show_help
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Items matching the current filter, in original order.
    pub fn visible_items(&self) -> Vec<&Item> {
        let query = self.filter.query();
        self.items.iter().filter(|item| item.matches(query)).collect()
    }

    /// Cursor position within [`ListPanel::visible_items`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Item under the cursor, `None` when nothing is visible.
    pub fn selected_item(&self) -> Option<&Item> {
        let query = self.filter.query();
        self.items
            .iter()
            .filter(|item| item.matches(query))
            .nth(self.cursor)
    }

    /// Move the cursor to a visible index, clamped to the last visible item.
    pub fn select(&mut self, index: usize) {
        let last = self.visible_items().len().saturating_sub(1);
        self.cursor = index.min(last);
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.select(self.cursor + 1);
    }

    /// Process an event.
    ///
    /// Navigation and filter keys apply whether or not the panel is focused;
    /// only a focused panel turns Enter into [`ListMessage::ItemSelected`].
    pub fn handle_input(&mut self, event: &Event) -> Option<ListMessage> {
        let Event::Key(key) = event else {
            // Resizes are sized by the shell; keep the cursor in range.
            self.select(self.cursor);
            return None;
        };

        if matches!(self.filter, FilterState::Filtering(_)) {
            self.handle_filter_key(*key);
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor_down(),
            KeyCode::Home | KeyCode::Char('g') => self.select(0),
            KeyCode::End | KeyCode::Char('G') => self.select(usize::MAX),
            KeyCode::Enter if self.focused => {
                return self.selected_item().cloned().map(ListMessage::ItemSelected);
            }
            KeyCode::Char('/') => {
                self.filter = FilterState::Filtering(self.filter.query().to_string());
            }
            KeyCode::Esc => {
                if self.filter != FilterState::Unfiltered {
                    self.set_filter(FilterState::Unfiltered);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        let mut query = self.filter.query().to_string();
        match key.code {
            KeyCode::Up => self.cursor_up(),
            KeyCode::Down => self.cursor_down(),
            KeyCode::Enter => {
                self.filter = if query.is_empty() {
                    FilterState::Unfiltered
                } else {
                    FilterState::Applied(query)
                };
            }
            KeyCode::Esc => self.set_filter(FilterState::Unfiltered),
            KeyCode::Backspace => {
                query.pop();
                self.set_filter(FilterState::Filtering(query));
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                query.push(c);
                self.set_filter(FilterState::Filtering(query));
            }
            _ => {}
        }
    }

    /// Replace the filter and move the cursor to the first visible item.
    fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.cursor = 0;
    }
}
