//! Style fragments: ordered bags of CSS-like declarations.
//!
//! This module provides:
//!
//! - [`Fragment`]: Declarations plus nested selector rules
//! - [`Declaration`]: A single `property: value` pair
//! - [`NestedRule`]: A selector scoped block such as `&:focus { ... }`
//!
//! Fragments are parsed leniently with `cssparser`. Malformed declarations
//! are logged and skipped so a partially broken fragment still applies.

mod parser;
mod value;

pub use value::{Declaration, Fragment, NestedRule};
