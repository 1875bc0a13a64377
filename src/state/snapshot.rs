//! The per-render state snapshot.

use serde::{Deserialize, Serialize};

use super::condition::Condition;

/// The condition of one input-like widget at the moment styling is computed.
///
/// All flags default to `false`, the idle state. Callers build a fresh
/// snapshot on every render.
///
/// # Example
///
/// ```rust
/// use statestyle::StateSnapshot;
///
/// let snapshot = StateSnapshot::new().with_error(true).with_focused(true);
/// assert!(snapshot.has_error);
/// assert!(!snapshot.is_disabled);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateSnapshot {
    pub is_disabled: bool,
    pub has_error: bool,
    pub has_warning: bool,
    pub is_open: bool,
    pub is_focused: bool,
}

impl StateSnapshot {
    /// Creates an idle snapshot with every flag cleared.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disabled(mut self, value: bool) -> Self {
        self.is_disabled = value;
        self
    }

    pub fn with_error(mut self, value: bool) -> Self {
        self.has_error = value;
        self
    }

    pub fn with_warning(mut self, value: bool) -> Self {
        self.has_warning = value;
        self
    }

    pub fn with_open(mut self, value: bool) -> Self {
        self.is_open = value;
        self
    }

    pub fn with_focused(mut self, value: bool) -> Self {
        self.is_focused = value;
        self
    }

    /// Returns every triggered condition, highest priority first.
    ///
    /// The resolver only ever applies the first entry.
    pub fn active_conditions(&self) -> Vec<Condition> {
        Condition::PRECEDENCE
            .into_iter()
            .filter(|condition| condition.is_active(self))
            .collect()
    }

    /// Returns `true` when no flag is set.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let snapshot = StateSnapshot::default();
        assert!(snapshot.is_idle());
        assert!(snapshot.active_conditions().is_empty());
    }

    #[test]
    fn test_active_conditions_in_precedence_order() {
        let snapshot = StateSnapshot::new()
            .with_focused(true)
            .with_warning(true)
            .with_disabled(true);

        assert_eq!(
            snapshot.active_conditions(),
            vec![
                Condition::Disabled,
                Condition::Warning,
                Condition::FocusedOrOpen
            ]
        );
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_fields() {
        let snapshot: StateSnapshot =
            serde_json::from_str(r#"{"hasError": true, "isOpen": true}"#).unwrap();

        assert_eq!(
            snapshot,
            StateSnapshot::new().with_error(true).with_open(true)
        );
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(StateSnapshot::new().with_disabled(true)).unwrap();
        assert_eq!(json["isDisabled"], serde_json::Value::Bool(true));
        assert_eq!(json["isFocused"], serde_json::Value::Bool(false));
    }
}
