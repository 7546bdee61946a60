//! Application shell: owns both panels and routes events between them.
//!
//! Routing order for every event:
//! 1. Resize: resize both panels, focus unchanged.
//! 2. `q` / Ctrl+C: quit.
//! 3. Tab: flip focus.
//! 4. Anything else: list first, then the selection trigger, then the table.

use duet_engine::{
    demo_items, rows_for_item, Config, FocusState, FrameMargin, Item, SelectionTrigger, Viewport,
};
use tracing::{debug, info};

use crate::event::{is_focus_toggle, is_quit, Event};
use crate::list::{ListMessage, ListPanel};
use crate::table::TablePanel;
use crate::theme::{BorderMode, BorderSet, Theme, ThemeError};

/// UI configuration derived from the environment.
#[derive(Debug, Clone, Default)]
pub struct UiConfig {
    /// Border mode (coloured, or monochrome under `NO_COLOR`).
    pub borders: BorderMode,
}

impl UiConfig {
    /// Create config from environment, respecting `NO_COLOR`.
    pub fn from_env() -> Self {
        let borders = if std::env::var_os("NO_COLOR").is_some() {
            BorderMode::Monochrome
        } else {
            BorderMode::Colored
        };
        Self { borders }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Selection list (left).
    pub list: ListPanel,
    /// Detail table (right).
    pub table: TablePanel,
    /// Which panel has focus.
    pub focus: FocusState,
    /// Current terminal size.
    pub viewport: Viewport,
    /// Theme colors.
    pub theme: Theme,
    /// Border set based on border mode.
    pub borders: BorderSet,
    /// Outer frame margin.
    pub margin: FrameMargin,
    /// Columns between the panels.
    pub gap: u16,
    /// When a selection regenerates the table.
    pub trigger: SelectionTrigger,
    /// Should the app quit?
    pub should_quit: bool,
}

impl App {
    /// Create the app with the demo items, resolving colours from `config`.
    pub fn new(config: &Config, ui: &UiConfig) -> Result<Self, ThemeError> {
        let theme = match ui.borders {
            BorderMode::Monochrome => Theme::monochrome(),
            BorderMode::Colored => Theme::from_style(&config.style)?,
        };

        let mut app = Self {
            list: ListPanel::new(demo_items()),
            table: TablePanel::default(),
            focus: FocusState::List,
            viewport: Viewport::default(),
            theme,
            borders: BorderSet::new(ui.borders),
            margin: config.style.margin,
            gap: config.style.gap,
            trigger: config.selection_trigger,
            should_quit: false,
        };
        app.set_focus(FocusState::List);
        Ok(app)
    }

    /// Handle one event to completion.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => self.handle_resize(width, height),
            Event::Key(key) if is_quit(&key) => {
                info!(focus = %self.focus, "quit requested");
                self.should_quit = true;
            }
            Event::Key(key) if is_focus_toggle(&key) => self.toggle_focus(),
            other => self.forward(&other),
        }
    }

    /// Handle terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        let list_size = self.viewport.list_size(self.margin);
        self.list.set_size(list_size.width, list_size.height);
        self.table.set_width(self.viewport.table_width(self.margin));
        debug!(width, height, list_width = list_size.width, "viewport resized");
    }

    /// Flip focus between list and table.
    pub fn toggle_focus(&mut self) {
        self.set_focus(self.focus.toggle());
    }

    /// Move focus, keeping the panels' own focus flags in step.
    pub fn set_focus(&mut self, focus: FocusState) {
        self.focus = focus;
        match focus {
            FocusState::List => {
                self.list.set_focus(true);
                self.table.blur();
            }
            FocusState::Table => {
                self.list.set_focus(false);
                self.table.focus();
            }
        }
        debug!(%focus, "focus changed");
    }

    /// Send an event to the list, apply the selection trigger, then the table.
    fn forward(&mut self, event: &Event) {
        let message = self.list.handle_input(event);

        match self.trigger {
            SelectionTrigger::Auto => {
                if self.focus == FocusState::List {
                    if let Some(item) = self.list.selected_item().cloned() {
                        self.show_item(&item);
                    }
                }
            }
            SelectionTrigger::Confirm => {
                if let Some(ListMessage::ItemSelected(item)) = message {
                    self.show_item(&item);
                }
            }
        }

        self.table.handle_input(event);
    }

    /// Regenerate the table from `item` and move focus to it.
    fn show_item(&mut self, item: &Item) {
        self.table.set_rows(rows_for_item(item));
        info!(item_id = %item.id(), title = item.title(), "table regenerated");
        self.set_focus(FocusState::Table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use crate::list::FilterState;
    use crate::test_utils::create_test_app;
    use duet_engine::{PanelSize, Row};

    fn confirm_app() -> App {
        let config = Config {
            selection_trigger: SelectionTrigger::Confirm,
            ..Config::default()
        };
        App::new(&config, &UiConfig::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::key(code));
    }

    fn detail_rows(title: &str) -> Vec<Row> {
        (1..=3)
            .map(|n| {
                Row::new(
                    n.to_string(),
                    format!("{title} - Detail {n}"),
                    (n * 100).to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_app_defaults() {
        let app = create_test_app();
        assert_eq!(app.focus, FocusState::List);
        assert!(app.list.is_focused());
        assert!(app.list.shows_help());
        assert!(!app.table.is_focused());
        assert_eq!(app.table.rows()[0].name, "Sample 1");
        assert_eq!(app.trigger, SelectionTrigger::Auto);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_resize_sizes_panels() {
        let mut app = create_test_app();
        app.handle_event(Event::Resize(100, 40));
        assert_eq!(app.viewport, Viewport::new(100, 40));
        assert_eq!(app.list.size(), PanelSize::new(48, 38));
        assert_eq!(app.table.width(), 48);
        assert_eq!(app.focus, FocusState::List);
    }

    #[test]
    fn test_resize_clamps_small_terminal() {
        let mut app = create_test_app();
        app.handle_event(Event::Resize(2, 1));
        assert_eq!(app.list.size(), PanelSize::new(0, 0));
        assert_eq!(app.table.width(), 0);
    }

    #[test]
    fn test_resize_does_not_trigger_selection() {
        let mut app = create_test_app();
        app.handle_event(Event::Resize(120, 50));
        assert_eq!(app.focus, FocusState::List);
        assert_eq!(app.table.rows()[0].name, "Sample 1");
    }

    #[test]
    fn test_tab_toggles_focus_and_flags() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, FocusState::Table);
        assert!(!app.list.shows_help());
        assert!(app.table.is_focused());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, FocusState::List);
        assert!(app.list.shows_help());
        assert!(!app.table.is_focused());
    }

    #[test]
    fn test_tab_from_table_focuses_list() {
        let mut app = create_test_app();
        app.set_focus(FocusState::Table);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, FocusState::List);
        assert!(app.list.shows_help());
        assert!(!app.table.is_focused());
    }

    #[test]
    fn test_quit_from_either_focus() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = create_test_app();
        app.set_focus(FocusState::Table);
        app.handle_event(Event::ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_while_filtering() {
        let mut app = confirm_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_auto_trigger_down_down_tab_then_any_key() {
        let mut app = create_test_app();
        app.handle_event(Event::Resize(100, 40));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.list.selected_item().unwrap().title(), "Item 3");
        assert_eq!(app.table.rows(), detail_rows("Item 2").as_slice());

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.table.rows(), detail_rows("Item 3").as_slice());
        assert_eq!(app.focus, FocusState::Table);
        assert!(!app.list.shows_help());
        assert!(app.table.is_focused());
    }

    #[test]
    fn test_auto_trigger_filter_keeps_receiving_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.list.filter(), &FilterState::Filtering("2".into()));
        assert_eq!(app.list.filter().query(), "2");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.list.filter(), &FilterState::Applied("2".into()));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.table.rows(), detail_rows("Item 2").as_slice());
        assert_eq!(app.focus, FocusState::Table);
    }

    #[test]
    fn test_auto_trigger_forwards_key_to_table_after_switch() {
        let mut app = create_test_app();

        // Down moves the list to Item 2, regenerates, then moves the table cursor.
        press(&mut app, KeyCode::Down);
        assert_eq!(app.table.rows(), detail_rows("Item 2").as_slice());
        assert_eq!(app.focus, FocusState::Table);
        assert_eq!(app.table.selected(), Some(1));

        // The unfocused list still moves; the table keeps Item 2's rows.
        press(&mut app, KeyCode::Down);
        assert_eq!(app.list.selected_item().unwrap().title(), "Item 3");
        assert_eq!(app.table.rows(), detail_rows("Item 2").as_slice());
        assert_eq!(app.table.selected(), Some(2));
    }

    #[test]
    fn test_auto_trigger_after_returning_to_list() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, FocusState::List);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.table.rows(), detail_rows("Item 3").as_slice());
        assert_eq!(app.focus, FocusState::Table);
    }

    #[test]
    fn test_auto_trigger_needs_selection() {
        let mut app = create_test_app();
        app.list = ListPanel::new(Vec::new());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, FocusState::List);
        assert_eq!(app.table.rows()[0].name, "Sample 1");
    }

    #[test]
    fn test_auto_trigger_ignored_when_table_focused() {
        let mut app = create_test_app();
        app.set_focus(FocusState::Table);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.table.rows()[0].name, "Sample 1");
        assert_eq!(app.focus, FocusState::Table);
    }

    #[test]
    fn test_confirm_trigger_scenario() {
        let mut app = confirm_app();
        app.handle_event(Event::Resize(100, 40));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, FocusState::List);
        assert_eq!(app.list.selected_item().unwrap().title(), "Item 3");
        assert_eq!(app.table.rows()[0].name, "Sample 1");

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.table.rows(),
            [
                Row::new("1", "Item 3 - Detail 1", "100"),
                Row::new("2", "Item 3 - Detail 2", "200"),
                Row::new("3", "Item 3 - Detail 3", "300"),
            ]
            .as_slice()
        );
        assert_eq!(app.focus, FocusState::Table);
        assert_eq!(app.table.selected(), Some(0));
    }

    #[test]
    fn test_confirm_trigger_filter_then_select() {
        let mut app = confirm_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, FocusState::List);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.table.rows(), detail_rows("Item 2").as_slice());
        assert_eq!(app.focus, FocusState::Table);
    }

    #[test]
    fn test_confirm_trigger_no_match_keeps_focus() {
        let mut app = confirm_app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, FocusState::List);
        assert_eq!(app.table.rows()[0].name, "Sample 1");
    }

    #[test]
    fn test_no_color_uses_monochrome_theme() {
        let ui = UiConfig {
            borders: BorderMode::Monochrome,
        };
        let app = App::new(&Config::default(), &ui).unwrap();
        assert!(app.theme.monochrome);
        assert_eq!(app.borders.mode(), BorderMode::Monochrome);
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let mut config = Config::default();
        config.style.accent_color = "nope".into();
        assert!(App::new(&config, &UiConfig::default()).is_err());
    }
}
