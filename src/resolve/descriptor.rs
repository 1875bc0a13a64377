//! Resolution output.

use crate::fragment::Fragment;
use crate::state::Condition;

/// An ordered list of fragments to compose.
///
/// Holds the base fragment and at most one override. Later fragments win on
/// conflicting properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescriptor {
    fragments: Vec<Fragment>,
    selected: Option<Condition>,
}

impl StyleDescriptor {
    pub(crate) fn base(base: Fragment) -> Self {
        Self {
            fragments: vec![base],
            selected: None,
        }
    }

    pub(crate) fn with_override(base: Fragment, condition: Condition, fragment: Fragment) -> Self {
        Self {
            fragments: vec![base, fragment],
            selected: Some(condition),
        }
    }

    /// The fragments in application order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The condition whose fragment was appended, if any.
    pub fn selected(&self) -> Option<Condition> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Pairs with [`len`](Self::len). Resolution never builds an empty descriptor.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Flattens the fragments into one, applying them in order.
    pub fn compose(&self) -> Fragment {
        self.fragments
            .iter()
            .fold(Fragment::new(), |acc, fragment| acc.merge(fragment))
    }

    /// Renders the composed fragment as CSS text.
    pub fn to_css(&self) -> String {
        self.compose().to_css()
    }
}

impl IntoIterator for StyleDescriptor {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}
