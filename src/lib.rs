//! # Statestyle - state-driven styles for input chrome
//!
//! Statestyle picks the visual treatment of input-like widgets from a handful
//! of overlapping state flags and hands back the style fragments to apply.
//!
//! ## Core Concepts
//!
//! - [`StateSnapshot`]: The widget's flags at render time (disabled, error,
//!   warning, open, focused)
//! - [`FragmentTable`]: Named [`Fragment`]s the caller prepared, one per condition
//! - [`resolve_style`]: Arbitrates between the active flags and returns a
//!   [`StyleDescriptor`]
//!
//! The flags are not mutually exclusive, so resolution follows a fixed
//! precedence: disabled, then error, then warning, then open-or-focused. Only
//! the winner's fragment is layered over the base fragment.
//!
//! ## Quick Start
//!
//! ```rust
//! use statestyle::{resolve_style, Condition, FragmentTable, StateSnapshot};
//!
//! let table = FragmentTable::new()
//!     .add("base", "border: 1px solid #ccc; color: #1a1a1a;")
//!     .add("disabled", "cursor: not-allowed; color: #999;")
//!     .add("error", "border-color: #e60050;")
//!     .add("warning", "border-color: #f16d0e;")
//!     .add("focusedOrOpen", "border-color: #00b39e;");
//!
//! let snapshot = StateSnapshot::new().with_warning(true).with_focused(true);
//! let descriptor = resolve_style(&snapshot, &table).unwrap();
//!
//! assert_eq!(descriptor.selected(), Some(Condition::Warning));
//! assert_eq!(descriptor.fragments().len(), 2);
//! ```
//!
//! ## Components
//!
//! [`components`] builds the fragments for the library's card, toggle, link
//! and date/time input chrome from [`Tokens`]. [`Stylesheet`] loads token and
//! fragment overrides from YAML, and [`AdaptiveTable`] switches tables with
//! the system color mode.

pub mod components;
mod fragment;
mod resolve;
mod state;
mod stylesheet;
mod theme;
mod tokens;

pub use fragment::{Declaration, Fragment, NestedRule};
pub use resolve::{
    resolve_style, ConfigurationError, FragmentTable, StyleDescriptor, BASE_FRAGMENT,
    REQUIRED_FRAGMENTS,
};
pub use state::{Condition, StateSnapshot};
pub use stylesheet::{select_table, Stylesheet, StylesheetError};
pub use theme::{
    detect_color_mode, resolve_style_with, set_mode_detector, AdaptiveTable, ColorMode,
    TableChoice,
};
pub use tokens::Tokens;
