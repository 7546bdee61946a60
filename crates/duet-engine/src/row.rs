//! Table rows and the row template.
//!
//! Rows are never edited in place. Selecting an item replaces the whole
//! table with [`rows_for_item`].

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Number of rows generated per selected item.
pub const DETAIL_ROWS: u32 = 3;

/// A table column with a fixed display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: u16,
}

/// The table's columns. Widths are absolute and ignore the panel width.
pub const COLUMNS: [Column; 3] = [
    Column { title: "ID", width: 4 },
    Column { title: "Name", width: 20 },
    Column { title: "Value", width: 10 },
];

/// One table row: `(id, name, value)` display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub value: String,
}

impl Row {
    /// Create a new row.
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> [&str; 3] {
        [&self.id, &self.name, &self.value]
    }
}

/// Rows shown before anything has been selected.
pub fn sample_rows() -> Vec<Row> {
    (1..=DETAIL_ROWS)
        .map(|n| Row::new(n.to_string(), format!("Sample {n}"), (n * 100).to_string()))
        .collect()
}

/// Synthesize the detail rows for a selected item.
///
/// Row `n` is `(n, "<title> - Detail n", 100 * n)`.
pub fn rows_for_item(item: &Item) -> Vec<Row> {
    (1..=DETAIL_ROWS)
        .map(|n| {
            Row::new(
                n.to_string(),
                format!("{} - Detail {n}", item.title()),
                (n * 100).to_string(),
            )
        })
        .collect()
}
