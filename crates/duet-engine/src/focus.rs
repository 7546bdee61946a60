//! Which panel receives navigation keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which panel has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusState {
    /// List panel has focus.
    #[default]
    List,
    /// Table panel has focus.
    Table,
}

impl FocusState {
    /// Toggle focus to the other panel.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::List => Self::Table,
            Self::Table => Self::List,
        }
    }
}

impl fmt::Display for FocusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Table => write!(f, "table"),
        }
    }
}
