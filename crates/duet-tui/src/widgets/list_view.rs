//! Renders the list panel.
//!
//! ```text
//! ┌────────────────────────────┐
//! │  Select an Item            │
//! │  3 items                   │
//! │                            │
//! ││ Item 1                    │
//! ││ Description for Item 1    │
//! │  Item 2                    │
//! │  Description for Item 2    │
//! │  ...                       │
//! │↑/k up • ↓/j down • …       │
//! └────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{HighlightSpacing, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::help_footer::{hints_for_list, HelpFooter};
use super::pane::Pane;
use crate::list::{FilterState, ListPanel, LIST_TITLE};
use crate::theme::{BorderSet, Theme};

/// Status line under the title.
pub fn status_text(panel: &ListPanel) -> String {
    let total = panel.total_items();
    let visible = panel.visible_items().len();
    match panel.filter() {
        FilterState::Filtering(query) => format!("Filter: {query}"),
        FilterState::Applied(_) if visible == 0 => "No matches".to_string(),
        FilterState::Applied(_) => format!("{visible} of {total} items"),
        FilterState::Unfiltered => match total {
            0 => "No items".to_string(),
            1 => "1 item".to_string(),
            n => format!("{n} items"),
        },
    }
}

/// List panel widget.
pub struct ListView<'a> {
    panel: &'a ListPanel,
    theme: &'a Theme,
    borders: &'a BorderSet,
    focused: bool,
}

impl<'a> ListView<'a> {
    /// Create a new list view.
    pub fn new(panel: &'a ListPanel, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            panel,
            theme,
            borders,
            focused: false,
        }
    }

    /// Draw the accent border.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_items(&self, area: Rect, buf: &mut Buffer) {
        let visible = self.panel.visible_items();
        if visible.is_empty() {
            let line = Line::styled("  No items.", Style::default().fg(self.theme.muted));
            Paragraph::new(line).render(area, buf);
            return;
        }

        let items: Vec<ListItem<'_>> = visible
            .iter()
            .map(|item| {
                ListItem::new(Text::from(vec![
                    Line::styled(item.title(), Style::default().fg(self.theme.text)),
                    Line::styled(item.description(), Style::default().fg(self.theme.subtext)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_symbol("│ ")
            .highlight_spacing(HighlightSpacing::Always)
            .repeat_highlight_symbol(true)
            .highlight_style(Style::default().fg(self.theme.accent));

        let mut state = ListState::default().with_selected(Some(self.panel.cursor()));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

impl Widget for ListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Pane::new(self.theme, self.borders)
            .focused(self.focused)
            .block();
        let inner = block.inner(area);
        block.render(area, buf);

        let help_height = u16::from(self.panel.shows_help());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),           // Title
                Constraint::Length(1),           // Status
                Constraint::Length(1),           // Spacer
                Constraint::Min(0),              // Items
                Constraint::Length(help_height), // Help
            ])
            .split(inner);

        let title = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                LIST_TITLE,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let status = Line::styled(
            format!("  {}", status_text(self.panel)),
            Style::default().fg(self.theme.muted),
        );
        Paragraph::new(status).render(chunks[1], buf);

        self.render_items(chunks[3], buf);

        if self.panel.shows_help() {
            let hints = hints_for_list(self.panel.filter());
            HelpFooter::new(&hints, self.theme).render(chunks[4], buf);
        }
    }
}
