//! duet-engine: Headless model for the duet list/table demo
//!
//! This crate provides everything that does not touch the terminal:
//! - Demo items and the table row template
//! - Focus state and viewport arithmetic
//! - Configuration and logging setup

pub mod config;
pub mod focus;
pub mod item;
pub mod logging;
pub mod row;
pub mod viewport;

// Re-export commonly used types
pub use config::{Config, ConfigError, FrameMargin, SelectionTrigger, StyleConfig};
pub use focus::FocusState;
pub use item::{demo_items, Item, ItemId};
pub use logging::{init_logging, LogConfig, LogError};
pub use row::{rows_for_item, sample_rows, Column, Row, COLUMNS, DETAIL_ROWS};
pub use viewport::{PanelSize, Viewport};
