//! Resolution errors.

/// Error returned when a fragment table cannot serve a resolution.
///
/// This is a caller bug, not a data problem. It is never papered over by
/// dropping the affected treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A fragment the precedence table refers to is absent
    MissingFragment { name: String },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::MissingFragment { name } => {
                write!(f, "fragment table has no '{}' fragment", name)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fragment_error_display() {
        let err = ConfigurationError::MissingFragment {
            name: "error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'error'"));
        assert!(msg.contains("fragment table"));
    }
}
