//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Colours resolved from the style configuration
//! - [`BorderSet`] - Border characters for coloured and monochrome terminals

mod borders;
mod colors;

pub use borders::{BorderMode, BorderSet};
pub use colors::{Theme, ThemeError};
