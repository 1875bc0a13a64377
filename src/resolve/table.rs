//! The caller-supplied table of named fragments.

use std::collections::HashMap;

use super::error::ConfigurationError;
use crate::fragment::Fragment;
use crate::state::Condition;

/// Name of the fragment every descriptor starts with.
pub const BASE_FRAGMENT: &str = "base";

/// Every name a complete table must provide.
pub const REQUIRED_FRAGMENTS: [&str; 5] =
    [BASE_FRAGMENT, "disabled", "error", "warning", "focusedOrOpen"];

/// Named style fragments prepared by the caller, one per condition.
///
/// # Example
///
/// ```rust
/// use statestyle::FragmentTable;
///
/// let table = FragmentTable::new()
///     .add("base", "border: 1px solid gray;")
///     .add("disabled", "cursor: not-allowed;")
///     .add("error", "border-color: red;")
///     .add("warning", "border-color: orange;")
///     .add("focusedOrOpen", "border-color: blue;");
///
/// assert!(table.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentTable {
    fragments: HashMap<String, Fragment>,
}

impl FragmentTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named fragment, returning the updated table for chaining.
    ///
    /// The value can be a [`Fragment`] or CSS text.
    pub fn add<V: Into<Fragment>>(mut self, name: &str, fragment: V) -> Self {
        self.insert(name, fragment);
        self
    }

    /// Adds or replaces a named fragment.
    pub fn insert<V: Into<Fragment>>(&mut self, name: &str, fragment: V) {
        self.fragments.insert(name.to_string(), fragment.into());
    }

    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns the fragment for `name` or a [`ConfigurationError`].
    pub fn require(&self, name: &str) -> Result<&Fragment, ConfigurationError> {
        self.get(name).ok_or_else(|| ConfigurationError::MissingFragment {
            name: name.to_string(),
        })
    }

    /// Returns the fragment a condition selects.
    pub fn for_condition(&self, condition: Condition) -> Result<&Fragment, ConfigurationError> {
        self.require(condition.fragment_name())
    }

    /// Layers `other` over this table; entries in `other` replace same-named ones.
    pub fn extend(mut self, other: FragmentTable) -> Self {
        self.fragments.extend(other.fragments);
        self
    }

    /// Checks that every required fragment is present.
    ///
    /// Resolution only checks the fragments it needs for the current state,
    /// so call this once up front to catch gaps before they show up at
    /// render time.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for name in REQUIRED_FRAGMENTS {
            self.require(name)?;
        }
        Ok(())
    }

    /// Returns a copy with every fragment value passed through `f`.
    pub fn map_values(&self, f: &dyn Fn(&str) -> String) -> FragmentTable {
        FragmentTable {
            fragments: self
                .fragments
                .iter()
                .map(|(name, fragment)| (name.clone(), fragment.map_values(f)))
                .collect(),
        }
    }
}
