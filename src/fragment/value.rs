//! Fragment data types and composition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single `property: value` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Lower-cased property name.
    pub property: String,
    /// Value text, verbatim apart from surrounding whitespace.
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into().to_ascii_lowercase(),
            value: value.into().trim().to_string(),
        }
    }
}

/// Declarations scoped to a nested selector, e.g. `&:hover`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedRule {
    /// Selector text with whitespace collapsed.
    pub selector: String,
    pub body: Fragment,
}

/// An opaque bag of visual declarations.
///
/// Property order is preserved. Setting a property that is already present
/// replaces its value in place, so a fragment never holds two declarations
/// for the same property.
///
/// # Example
///
/// ```rust
/// use statestyle::Fragment;
///
/// let base = Fragment::parse("color: black; border-color: gray;");
/// let error = Fragment::parse("border-color: red;");
///
/// let composed = base.merge(&error);
/// assert_eq!(composed.get("color"), Some("black"));
/// assert_eq!(composed.get("border-color"), Some("red"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Fragment {
    declarations: Vec<Declaration>,
    rules: Vec<NestedRule>,
}

impl Fragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a declaration block body.
    ///
    /// Invalid declarations are skipped with a warning; this never fails.
    pub fn parse(css: &str) -> Self {
        super::parser::parse_fragment(css)
    }

    /// Adds a declaration, returning the updated fragment for chaining.
    pub fn declare(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Adds a nested rule, returning the updated fragment for chaining.
    pub fn nest(mut self, selector: &str, body: Fragment) -> Self {
        self.push_rule(NestedRule {
            selector: normalize_selector(selector),
            body,
        });
        self
    }

    /// Sets a property, replacing any previous value in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let declaration = Declaration::new(property, value);
        match self
            .declarations
            .iter_mut()
            .find(|d| d.property == declaration.property)
        {
            Some(existing) => existing.value = declaration.value,
            None => self.declarations.push(declaration),
        }
    }

    /// Adds a nested rule, merging into an existing rule with the same selector.
    pub fn push_rule(&mut self, rule: NestedRule) {
        match self
            .rules
            .iter_mut()
            .find(|existing| existing.selector == rule.selector)
        {
            Some(existing) => existing.body = existing.body.merge(&rule.body),
            None => self.rules.push(rule),
        }
    }

    /// Returns the value of a top-level property.
    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Returns the body of a nested rule by selector.
    pub fn rule(&self, selector: &str) -> Option<&Fragment> {
        let selector = normalize_selector(selector);
        self.rules
            .iter()
            .find(|r| r.selector == selector)
            .map(|r| &r.body)
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn rules(&self) -> &[NestedRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.rules.is_empty()
    }

    /// Applies `other` on top of this fragment.
    ///
    /// Properties present in both take the value from `other`. Nested rules
    /// merge by selector with the same rule.
    pub fn merge(&self, other: &Fragment) -> Fragment {
        let mut merged = self.clone();
        for declaration in &other.declarations {
            merged.set(declaration.property.clone(), declaration.value.clone());
        }
        for rule in &other.rules {
            merged.push_rule(rule.clone());
        }
        merged
    }

    /// Returns a copy with every value passed through `f`.
    pub fn map_values(&self, f: &dyn Fn(&str) -> String) -> Fragment {
        Fragment {
            declarations: self
                .declarations
                .iter()
                .map(|d| Declaration {
                    property: d.property.clone(),
                    value: f(&d.value),
                })
                .collect(),
            rules: self
                .rules
                .iter()
                .map(|r| NestedRule {
                    selector: r.selector.clone(),
                    body: r.body.map_values(f),
                })
                .collect(),
        }
    }

    /// Renders the fragment as CSS text.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out, 0);
        out
    }

    fn write_css(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        for d in &self.declarations {
            out.push_str(&format!("{}{}: {};\n", indent, d.property, d.value));
        }
        for rule in &self.rules {
            out.push_str(&format!("{}{} {{\n", indent, rule.selector));
            rule.body.write_css(out, depth + 1);
            out.push_str(&format!("{}}}\n", indent));
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<String> for Fragment {
    fn from(css: String) -> Self {
        Fragment::parse(&css)
    }
}

impl From<&str> for Fragment {
    fn from(css: &str) -> Self {
        Fragment::parse(css)
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.to_css()
    }
}

pub(crate) fn normalize_selector(selector: &str) -> String {
    selector.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut fragment = Fragment::new().declare("color", "red").declare("cursor", "pointer");
        fragment.set("color", "blue");

        let properties: Vec<&str> = fragment
            .declarations()
            .iter()
            .map(|d| d.property.as_str())
            .collect();
        assert_eq!(properties, vec!["color", "cursor"]);
        assert_eq!(fragment.get("color"), Some("blue"));
    }

    #[test]
    fn test_property_names_are_case_insensitive() {
        let fragment = Fragment::new().declare("Border-Color", "red");
        assert_eq!(fragment.get("border-color"), Some("red"));
        assert_eq!(fragment.get("BORDER-COLOR"), Some("red"));
    }

    #[test]
    fn test_merge_later_wins() {
        let base = Fragment::new()
            .declare("color", "black")
            .declare("border-color", "gray");
        let over = Fragment::new()
            .declare("border-color", "red")
            .declare("cursor", "not-allowed");

        let merged = base.merge(&over);
        assert_eq!(merged.get("color"), Some("black"));
        assert_eq!(merged.get("border-color"), Some("red"));
        assert_eq!(merged.get("cursor"), Some("not-allowed"));
        assert_eq!(merged.declarations().len(), 3);
    }

    #[test]
    fn test_merge_nested_rules_by_selector() {
        let base = Fragment::new().nest("&:hover", Fragment::new().declare("color", "blue"));
        let over = Fragment::new().nest(
            "&:hover",
            Fragment::new().declare("color", "navy").declare("opacity", "1"),
        );

        let merged = base.merge(&over);
        assert_eq!(merged.rules().len(), 1);
        let hover = merged.rule("&:hover").unwrap();
        assert_eq!(hover.get("color"), Some("navy"));
        assert_eq!(hover.get("opacity"), Some("1"));
    }

    #[test]
    fn test_to_css_renders_nested_rules() {
        let fragment = Fragment::new()
            .declare("color", "black")
            .nest("&:focus", Fragment::new().declare("color", "blue"));

        assert_eq!(
            fragment.to_css(),
            "color: black;\n&:focus {\n  color: blue;\n}\n"
        );
    }

    #[test]
    fn test_map_values_reaches_nested_rules() {
        let fragment = Fragment::new()
            .declare("color", "x")
            .nest("&:focus", Fragment::new().declare("color", "x"));

        let mapped = fragment.map_values(&|v| v.replace('x', "y"));
        assert_eq!(mapped.get("color"), Some("y"));
        assert_eq!(mapped.rule("&:focus").unwrap().get("color"), Some("y"));
    }

    #[test]
    fn test_selector_whitespace_is_collapsed() {
        let fragment = Fragment::new().nest("&,\n    & + *", Fragment::new().declare("color", "red"));
        assert!(fragment.rule("&, & + *").is_some());
    }
}
