//! Conditions selectable by the resolver.

use std::fmt;

use super::snapshot::StateSnapshot;

/// A visual treatment layered on top of the base fragment.
///
/// Each condition maps to one named fragment in a
/// [`FragmentTable`](crate::FragmentTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// The control cannot be interacted with.
    Disabled,
    /// A validation error is attached to the value.
    Error,
    /// A validation warning is attached to the value.
    Warning,
    /// The control is focused or its popup is open.
    FocusedOrOpen,
}

impl Condition {
    /// All conditions, highest priority first.
    ///
    /// A disabled control suppresses every other treatment. Error and warning
    /// come before focus so validation state stays visible on read-only fields.
    pub const PRECEDENCE: [Condition; 4] = [
        Condition::Disabled,
        Condition::Error,
        Condition::Warning,
        Condition::FocusedOrOpen,
    ];

    /// The fragment name this condition selects.
    pub fn fragment_name(self) -> &'static str {
        match self {
            Condition::Disabled => "disabled",
            Condition::Error => "error",
            Condition::Warning => "warning",
            Condition::FocusedOrOpen => "focusedOrOpen",
        }
    }

    /// Whether the snapshot triggers this condition.
    pub fn is_active(self, snapshot: &StateSnapshot) -> bool {
        match self {
            Condition::Disabled => snapshot.is_disabled,
            Condition::Error => snapshot.has_error,
            Condition::Warning => snapshot.has_warning,
            Condition::FocusedOrOpen => snapshot.is_open || snapshot.is_focused,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment_name())
    }
}
