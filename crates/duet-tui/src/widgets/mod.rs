//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`Pane`] - Bordered box whose border reflects focus
//! - [`ListView`] - Renders a [`crate::list::ListPanel`]
//! - [`TableView`] - Renders a [`crate::table::TablePanel`]
//! - [`HelpFooter`] - Key hints under the list

mod help_footer;
mod list_view;
mod pane;
mod table_view;

pub use help_footer::{hints_for_list, HelpFooter, KeyHint};
pub use list_view::{status_text, ListView};
pub use pane::Pane;
pub use table_view::TableView;
