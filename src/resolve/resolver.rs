//! Precedence arbitration over the state flags.

use super::descriptor::StyleDescriptor;
use super::error::ConfigurationError;
use super::table::{FragmentTable, BASE_FRAGMENT};
use crate::state::{Condition, StateSnapshot};

/// Selects the style treatment for a widget state.
///
/// Walks [`Condition::PRECEDENCE`] and appends the fragment of the first
/// active condition to the base fragment:
///
/// 1. disabled
/// 2. error
/// 3. warning
/// 4. open or focused
///
/// With no active condition the descriptor is the base fragment alone.
///
/// # Errors
///
/// Returns [`ConfigurationError::MissingFragment`] when the table lacks the
/// base fragment or the fragment of the selected condition.
///
/// # Example
///
/// ```rust
/// use statestyle::{resolve_style, Condition, FragmentTable, StateSnapshot};
///
/// let table = FragmentTable::new()
///     .add("base", "border: 1px solid gray;")
///     .add("disabled", "cursor: not-allowed;")
///     .add("error", "border-color: red;")
///     .add("warning", "border-color: orange;")
///     .add("focusedOrOpen", "border-color: blue;");
///
/// let snapshot = StateSnapshot::new().with_error(true).with_focused(true);
/// let descriptor = resolve_style(&snapshot, &table).unwrap();
///
/// assert_eq!(descriptor.selected(), Some(Condition::Error));
/// assert_eq!(descriptor.compose().get("border-color"), Some("red"));
/// ```
pub fn resolve_style(
    snapshot: &StateSnapshot,
    fragments: &FragmentTable,
) -> Result<StyleDescriptor, ConfigurationError> {
    let base = fragments.require(BASE_FRAGMENT)?.clone();

    let selected = Condition::PRECEDENCE
        .into_iter()
        .find(|condition| condition.is_active(snapshot));
    tracing::trace!(?snapshot, ?selected, "resolved widget style");

    match selected {
        Some(condition) => {
            let fragment = fragments.for_condition(condition)?.clone();
            Ok(StyleDescriptor::with_override(base, condition, fragment))
        }
        None => Ok(StyleDescriptor::base(base)),
    }
}
