//! Frame composition.
//!
//! This module provides:
//! - [`panel_areas`] - Where the two panel boxes go
//! - [`render_app`] - Draws the whole frame from app state

mod frame;

pub use frame::{panel_areas, render_app, PanelAreas};
