//! YAML stylesheets.
//!
//! A stylesheet overrides tokens and fragments of the stock input chrome
//! table. An optional `dark` section does the same for dark mode:
//!
//! ```yaml
//! tokens:
//!   color-primary: "#00b39e"
//! fragments:
//!   error: "color: var(--font-color-for-input-when-error); font-weight: bold;"
//! dark:
//!   tokens:
//!     background-color-for-input: "#1a1a1a"
//! ```
//!
//! Fragment names left out keep the stock definition, so a stylesheet only
//! lists what it changes.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::components::input::input_table;
use crate::resolve::{ConfigurationError, FragmentTable, REQUIRED_FRAGMENTS};
use crate::theme::{AdaptiveTable, ColorMode};
use crate::tokens::Tokens;

/// Error returned when a stylesheet cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetError {
    /// The document is not valid YAML or has the wrong shape
    Yaml(String),
    /// The resulting fragment table is incomplete
    Configuration(ConfigurationError),
}

impl std::fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylesheetError::Yaml(msg) => write!(f, "invalid stylesheet: {}", msg),
            StylesheetError::Configuration(err) => write!(f, "invalid stylesheet: {}", err),
        }
    }
}

impl std::error::Error for StylesheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StylesheetError::Yaml(_) => None,
            StylesheetError::Configuration(err) => Some(err),
        }
    }
}

impl From<ConfigurationError> for StylesheetError {
    fn from(err: ConfigurationError) -> Self {
        StylesheetError::Configuration(err)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Layer {
    tokens: BTreeMap<String, String>,
    fragments: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Document {
    tokens: BTreeMap<String, String>,
    fragments: BTreeMap<String, String>,
    dark: Option<Layer>,
}

/// A parsed stylesheet.
///
/// # Example
///
/// ```rust
/// use statestyle::Stylesheet;
///
/// let sheet = Stylesheet::from_yaml(r#"
/// tokens:
///   border-color-for-input-when-error: crimson
/// "#).unwrap();
///
/// let table = sheet.fragment_table().unwrap();
/// assert_eq!(table.get("error").unwrap().get("border-color"), Some("crimson"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    tokens: Tokens,
    fragments: BTreeMap<String, String>,
    dark: Option<Layer>,
}

impl Stylesheet {
    /// Parses a YAML stylesheet.
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        let doc: Document = if yaml.trim().is_empty() {
            Document::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Yaml(e.to_string()))?
        };

        tracing::debug!(
            tokens = doc.tokens.len(),
            fragments = doc.fragments.len(),
            dark = doc.dark.is_some(),
            "loaded stylesheet"
        );

        let tokens = doc
            .tokens
            .into_iter()
            .fold(Tokens::default(), |tokens, (name, value)| {
                tokens.set(&name, value)
            });

        Ok(Self {
            tokens,
            fragments: doc.fragments,
            dark: doc.dark,
        })
    }

    /// The stock tokens with this stylesheet's overrides applied.
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// Whether the stylesheet defines a dark variant.
    pub fn has_dark(&self) -> bool {
        self.dark.is_some()
    }

    /// Builds the light (or only) fragment table.
    ///
    /// # Errors
    ///
    /// Returns [`StylesheetError::Configuration`] if the table is incomplete.
    pub fn fragment_table(&self) -> Result<FragmentTable, StylesheetError> {
        build_table(&self.tokens, &self.fragments)
    }

    /// Builds a light/dark pair.
    ///
    /// The dark table starts from this stylesheet's tokens and fragments and
    /// applies the `dark` section on top. Without a `dark` section both
    /// variants are identical.
    pub fn adaptive_table(&self) -> Result<AdaptiveTable, StylesheetError> {
        let light = self.fragment_table()?;
        let dark = match &self.dark {
            Some(layer) => {
                let tokens = layer
                    .tokens
                    .iter()
                    .fold(self.tokens.clone(), |tokens, (name, value)| {
                        tokens.set(name, value.clone())
                    });
                let mut fragments = self.fragments.clone();
                fragments.extend(layer.fragments.clone());
                build_table(&tokens, &fragments)?
            }
            None => light.clone(),
        };
        Ok(AdaptiveTable::new(light, dark))
    }
}

/// Picks the fragment table to resolve against.
///
/// Without a stylesheet this is the stock input table. A stylesheet without
/// a `dark` section always yields its single table and ignores `mode`. With
/// a `dark` section, `mode` selects the variant, or the detected color mode
/// when `mode` is `None`.
pub fn select_table(
    sheet: Option<&Stylesheet>,
    mode: Option<ColorMode>,
) -> Result<FragmentTable, StylesheetError> {
    let Some(sheet) = sheet else {
        return Ok(input_table(&Tokens::default()));
    };
    if !sheet.has_dark() {
        return sheet.fragment_table();
    }
    let adaptive = sheet.adaptive_table()?;
    let table = match mode {
        Some(mode) => adaptive.for_mode(mode),
        None => adaptive.resolve(),
    };
    Ok(table.clone())
}

fn build_table(
    tokens: &Tokens,
    fragments: &BTreeMap<String, String>,
) -> Result<FragmentTable, StylesheetError> {
    let mut table = input_table(tokens);
    for (name, css) in fragments {
        if !REQUIRED_FRAGMENTS.contains(&name.as_str()) {
            tracing::warn!(fragment = %name, "stylesheet defines a fragment no condition selects");
        }
        table.insert(name, tokens.expand(css).as_str());
    }
    table.validate()?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stylesheet_uses_stock_table() {
        let sheet = Stylesheet::from_yaml("").unwrap();
        assert_eq!(
            sheet.fragment_table().unwrap(),
            input_table(&Tokens::default())
        );
    }

    #[test]
    fn test_fragment_override_expands_tokens() {
        let sheet = Stylesheet::from_yaml(
            r#"
tokens:
  accent: purple
fragments:
  focusedOrOpen: "border-color: var(--accent); box-shadow: 0 0 2px var(--accent);"
"#,
        )
        .unwrap();

        let table = sheet.fragment_table().unwrap();
        let focused = table.get("focusedOrOpen").unwrap();
        assert_eq!(focused.get("border-color"), Some("purple"));
        assert_eq!(focused.get("box-shadow"), Some("0 0 2px purple"));
        // untouched fragments keep the stock definition
        assert_eq!(
            table.get("error").unwrap().get("border-color"),
            Some("#e60050")
        );
    }

    #[test]
    fn test_null_sections_are_empty() {
        let sheet = Stylesheet::from_yaml("tokens:\nfragments:\n").unwrap();
        assert_eq!(sheet.tokens(), &Tokens::default());
        assert!(!sheet.has_dark());
    }

    const DARK_SHEET: &str = r#"
tokens:
  border-color-for-input-when-focused: teal
dark:
  tokens:
    border-color-for-input-when-focused: cyan
"#;

    fn focused_border(table: &FragmentTable) -> Option<String> {
        table
            .get("focusedOrOpen")
            .and_then(|f| f.get("border-color"))
            .map(str::to_string)
    }

    #[test]
    fn test_select_table_dark_section_with_dark_mode() {
        let sheet = Stylesheet::from_yaml(DARK_SHEET).unwrap();
        let dark = select_table(Some(&sheet), Some(ColorMode::Dark)).unwrap();
        let light = select_table(Some(&sheet), Some(ColorMode::Light)).unwrap();
        assert_eq!(focused_border(&dark).as_deref(), Some("cyan"));
        assert_eq!(focused_border(&light).as_deref(), Some("teal"));
    }

    #[test]
    fn test_select_table_ignores_mode_without_dark_section() {
        let sheet =
            Stylesheet::from_yaml("tokens:\n  border-color-for-input-when-focused: teal\n")
                .unwrap();
        let dark = select_table(Some(&sheet), Some(ColorMode::Dark)).unwrap();
        let light = select_table(Some(&sheet), Some(ColorMode::Light)).unwrap();
        assert_eq!(dark, light);
        assert_eq!(dark, sheet.fragment_table().unwrap());
        assert_eq!(focused_border(&dark).as_deref(), Some("teal"));
    }

    #[test]
    fn test_select_table_without_stylesheet() {
        let table = select_table(None, Some(ColorMode::Dark)).unwrap();
        assert_eq!(table, input_table(&Tokens::default()));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Stylesheet::from_yaml("tokens: [1, 2").unwrap_err();
        assert!(matches!(err, StylesheetError::Yaml(_)));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = Stylesheet::from_yaml("colors:\n  a: b\n").unwrap_err();
        assert!(err.to_string().contains("invalid stylesheet"));
    }

    #[test]
    fn test_dark_layer() {
        let sheet = Stylesheet::from_yaml(
            r#"
tokens:
  background-color-for-input: white
dark:
  tokens:
    background-color-for-input: black
  fragments:
    warning: "color: yellow;"
"#,
        )
        .unwrap();
        assert!(sheet.has_dark());

        let adaptive = sheet.adaptive_table().unwrap();
        let light = adaptive.for_mode(ColorMode::Light);
        let dark = adaptive.for_mode(ColorMode::Dark);

        assert_eq!(
            light.get("base").unwrap().get("background-color"),
            Some("white")
        );
        assert_eq!(
            dark.get("base").unwrap().get("background-color"),
            Some("black")
        );
        assert_eq!(dark.get("warning").unwrap().get("color"), Some("yellow"));
        assert_eq!(light.get("warning").unwrap().get("color"), Some("#f16d0e"));
    }
}
