//! Renders the table panel.
//!
//! Column widths come from [`duet_engine::COLUMNS`] and never stretch to the
//! panel; narrow panels truncate the trailing columns.

use duet_engine::COLUMNS;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Row as TableRow, StatefulWidget, Table, TableState, Widget},
};

use super::pane::Pane;
use crate::table::TablePanel;
use crate::theme::{BorderSet, Theme};

/// Header line plus the rule under it.
pub const HEADER_HEIGHT: u16 = 2;

/// Table panel widget.
pub struct TableView<'a> {
    panel: &'a TablePanel,
    theme: &'a Theme,
    borders: &'a BorderSet,
    focused: bool,
}

impl<'a> TableView<'a> {
    /// Create a new table view.
    pub fn new(panel: &'a TablePanel, theme: &'a Theme, borders: &'a BorderSet) -> Self {
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

    /// Full box height: borders, header and the visible rows.
    pub fn box_height(panel: &TablePanel) -> u16 {
        panel.height() + HEADER_HEIGHT + 2
    }
}

impl Widget for TableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Pane::new(self.theme, self.borders)
            .focused(self.focused)
            .block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let header = TableRow::new(COLUMNS.iter().map(|c| c.title))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows = self
            .panel
            .rows()
            .iter()
            .map(|row| TableRow::new(row.cells()));

        let widths = COLUMNS.iter().map(|c| Constraint::Length(c.width));

        let highlight = if self.panel.is_focused() {
            self.theme.selected_row()
        } else {
            Style::default()
        };

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(highlight);

        let mut state = TableState::default().with_selected(self.panel.selected());
        StatefulWidget::render(table, inner, buf, &mut state);

        // Rule under the header, drawn over the header's bottom margin.
        if inner.height > 1 {
            let rule_style = Style::default().fg(self.theme.header_border);
            let rule = self.borders.normal().horizontal_top.repeat(usize::from(inner.width));
            buf.set_string(inner.x, inner.y + 1, rule, rule_style);
        }
    }
}
