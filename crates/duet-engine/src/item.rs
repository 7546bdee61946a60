//! List items shown in the selection panel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A selectable entry in the list panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    description: String,
}

impl Item {
    /// Create a new item.
    pub fn new(id: ItemId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Text the list filter matches against.
    pub fn filter_value(&self) -> &str {
        &self.title
    }

    /// Case-insensitive substring match of `query` against [`Item::filter_value`].
    ///
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self
                .filter_value()
                .to_lowercase()
                .contains(&query.to_lowercase())
    }
}

/// The fixed demo set loaded at startup.
pub fn demo_items() -> Vec<Item> {
    (1..=3)
        .map(|n| {
            Item::new(
                ItemId(n),
                format!("Item {n}"),
                format!("Description for Item {n}"),
            )
        })
        .collect()
}
