//! Design tokens shared by the component styles.
//!
//! Tokens are named custom properties (`color-primary`, `spacing-xs`, ...).
//! Fragment text refers to them as `var(--name)`; [`Tokens::expand`]
//! substitutes known names and leaves everything else alone.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const DEFAULT_TOKENS: &[(&str, &str)] = &[
    ("background-color-for-input", "#fff"),
    ("background-color-for-input-when-disabled", "#f2f2f2"),
    ("border-color-for-input", "#ccc"),
    ("border-color-for-input-when-disabled", "#ccc"),
    ("border-color-for-input-when-error", "#e60050"),
    ("border-color-for-input-when-warning", "#f16d0e"),
    ("border-color-for-input-when-focused", "#00b39e"),
    ("border-radius-for-input", "6px"),
    ("border-radius-6", "6px"),
    ("color-gray", "#ccc"),
    ("color-navy-95", "#f6f6f8"),
    ("color-neutral", "#ccc"),
    ("color-neutral-60", "#999"),
    ("color-neutral-95", "#f2f2f2"),
    ("color-primary", "#00b39e"),
    ("color-primary-25", "#00806f"),
    ("color-surface", "#fff"),
    ("font-color-for-input", "#1a1a1a"),
    ("font-color-for-input-when-disabled", "#999"),
    ("font-color-for-input-when-error", "#e60050"),
    ("font-color-for-input-when-warning", "#f16d0e"),
    ("font-size-default", "1rem"),
    ("shadow-1", "0 1px 2px 0 rgba(0, 0, 0, 0.24)"),
    ("shadow-7", "0 1px 1px 0 rgba(0, 0, 0, 0.24)"),
    ("shadow-9", "inset 0 1px 2px 0 rgba(0, 0, 0, 0.24)"),
    ("shadow-16", "0 0 0 4px rgba(0, 179, 158, 0.24)"),
    ("size-height-input", "32px"),
    ("spacing-m", "16px"),
    ("spacing-xs", "4px"),
    ("standard-input-height", "32px"),
    ("transition-standard", "200ms ease"),
];

/// A set of named design tokens.
///
/// # Example
///
/// ```rust
/// use statestyle::Tokens;
///
/// let tokens = Tokens::default().merge(Tokens::new().set("color-primary", "hotpink"));
/// assert_eq!(tokens.expand("color: var(--color-primary);"), "color: hotpink;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tokens {
    values: BTreeMap<String, String>,
}

impl Tokens {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Sets a token, returning the updated set for chaining.
    pub fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the token value, or the `var(--name)` reference when unknown.
    pub fn var(&self, name: &str) -> String {
        self.get(name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("var(--{})", name))
    }

    /// Overlays `overrides` on this set. Override values win.
    pub fn merge(mut self, overrides: Tokens) -> Self {
        self.values.extend(overrides.values);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Replaces every `var(--name)` whose name is known.
    pub fn expand(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find("var(--") {
            out.push_str(&rest[..start]);
            let after = &rest[start + "var(--".len()..];
            match after.find(')') {
                Some(end) => match self.get(after[..end].trim()) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[end + 1..];
                    }
                    None => {
                        out.push_str("var(--");
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[start..]);
                    return out;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl Default for Tokens {
    /// The library's stock token values.
    fn default() -> Self {
        Self {
            values: DEFAULT_TOKENS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}
