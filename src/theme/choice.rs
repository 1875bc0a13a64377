//! Table selection for resolution.

use super::adaptive::AdaptiveTable;
use crate::resolve::{resolve_style, ConfigurationError, FragmentTable, StyleDescriptor};
use crate::state::StateSnapshot;

/// Reference to either a fixed table or an adaptive one.
#[derive(Debug, Clone, Copy)]
pub enum TableChoice<'a> {
    /// A table that doesn't change with the color mode.
    Table(&'a FragmentTable),
    /// A light/dark pair picked by the current color mode.
    Adaptive(&'a AdaptiveTable),
}

impl<'a> TableChoice<'a> {
    /// Resolves to a concrete table.
    pub fn resolve(&self) -> &'a FragmentTable {
        match *self {
            TableChoice::Table(table) => table,
            TableChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl<'a> From<&'a FragmentTable> for TableChoice<'a> {
    fn from(table: &'a FragmentTable) -> Self {
        TableChoice::Table(table)
    }
}

impl<'a> From<&'a AdaptiveTable> for TableChoice<'a> {
    fn from(adaptive: &'a AdaptiveTable) -> Self {
        TableChoice::Adaptive(adaptive)
    }
}

/// Resolves a snapshot against a fixed or adaptive table.
///
/// Same as [`resolve_style`] once the table is chosen.
pub fn resolve_style_with<'a>(
    choice: impl Into<TableChoice<'a>>,
    snapshot: &StateSnapshot,
) -> Result<StyleDescriptor, ConfigurationError> {
    resolve_style(snapshot, choice.into().resolve())
}
