//! Key hint footer shown under the list while it has focus.
//!
//! Format: `↑/k up • ↓/j down • / filter • q quit`. Hints that do not fit the
//! width are dropped from the end and replaced with `…`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::list::FilterState;
use crate::theme::Theme;

const SEPARATOR: &str = " • ";
const ELLIPSIS: &str = "…";

/// A single keybinding hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The key or key combination (e.g., "tab", "ctrl+c").
    pub key: String,
    /// The action description (e.g., "table", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }

    /// Display width of `key action`.
    fn width(&self) -> usize {
        self.key.width() + 1 + self.action.width()
    }
}

/// Hints for the list in its current filter state.
pub fn hints_for_list(filter: &FilterState) -> Vec<KeyHint> {
    match filter {
        FilterState::Filtering(_) => vec![
            KeyHint::new("enter", "apply filter"),
            KeyHint::new("esc", "cancel"),
        ],
        FilterState::Unfiltered | FilterState::Applied(_) => {
            let mut hints = vec![
                KeyHint::new("↑/k", "up"),
                KeyHint::new("↓/j", "down"),
                KeyHint::new("/", "filter"),
            ];
            if matches!(filter, FilterState::Applied(_)) {
                hints.push(KeyHint::new("esc", "clear filter"));
            }
            hints.push(KeyHint::new("enter", "select"));
            hints.push(KeyHint::new("tab", "table"));
            hints.push(KeyHint::new("q", "quit"));
            hints
        }
    }
}

/// Footer hints widget.
pub struct HelpFooter<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpFooter<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Number of leading hints that fit in `width`, leaving room for `…` when truncated.
    fn fitting(&self, width: usize) -> (usize, bool) {
        let mut used = 0;
        for (i, hint) in self.hints.iter().enumerate() {
            let sep = if i == 0 { 0 } else { SEPARATOR.width() };
            let needed = used + sep + hint.width();
            let is_last = i + 1 == self.hints.len();
            let reserve = if is_last { 0 } else { SEPARATOR.width() + ELLIPSIS.width() };
            if needed + reserve > width {
                return (i, true);
            }
            used = needed;
        }
        (self.hints.len(), false)
    }
}

impl Widget for HelpFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (count, truncated) = self.fitting(usize::from(area.width));
        let key_style = Style::default().fg(self.theme.subtext);
        let muted = Style::default().fg(self.theme.muted);

        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().take(count).enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, muted));
            }
            spans.push(Span::styled(hint.key.as_str(), key_style));
            spans.push(Span::styled(format!(" {}", hint.action), muted));
        }
        if truncated {
            if count > 0 {
                spans.push(Span::styled(SEPARATOR, muted));
            }
            spans.push(Span::styled(ELLIPSIS, muted));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
