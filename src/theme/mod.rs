//! Light/dark selection of fragment tables.
//!
//! This module provides:
//!
//! - [`AdaptiveTable`]: A light/dark pair of fragment tables with OS detection
//! - [`TableChoice`]: Reference type for selecting a table at resolve time
//! - [`ColorMode`]: Light or dark color mode enum

mod adaptive;
mod choice;

pub use adaptive::{detect_color_mode, set_mode_detector, AdaptiveTable, ColorMode};
pub use choice::{resolve_style_with, TableChoice};
