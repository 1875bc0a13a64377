//! State-to-style resolution.
//!
//! This module provides:
//!
//! - [`resolve_style`]: Picks the single treatment for a [`StateSnapshot`](crate::StateSnapshot)
//! - [`FragmentTable`]: The caller-supplied named fragments
//! - [`StyleDescriptor`]: The ordered fragments to compose
//! - [`ConfigurationError`]: A required fragment is missing
//!
//! Resolution is arbitration, not a state machine: the highest-priority
//! active condition wins and nothing is remembered between calls.

mod descriptor;
mod error;
mod resolver;
mod table;

pub use descriptor::StyleDescriptor;
pub use error::ConfigurationError;
pub use resolver::resolve_style;
pub use table::{FragmentTable, BASE_FRAGMENT, REQUIRED_FRAGMENTS};
