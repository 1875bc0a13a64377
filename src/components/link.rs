//! Hyperlink styles.

use serde::{Deserialize, Serialize};

use super::styled;
use crate::fragment::Fragment;
use crate::tokens::Tokens;

/// Link props. Links are underlined unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkProps {
    pub has_underline: bool,
}

impl Default for LinkProps {
    fn default() -> Self {
        Self {
            has_underline: true,
        }
    }
}

/// Builds the link fragment.
///
/// `theme` overrides individual tokens for this link only, e.g. a different
/// `color-primary` on a dark banner.
pub fn link_styles(props: &LinkProps, tokens: &Tokens, theme: Option<&Tokens>) -> Fragment {
    let tokens = match theme {
        Some(theme) => tokens.clone().merge(theme.clone()),
        None => tokens.clone(),
    };
    let decoration = if props.has_underline {
        "underline"
    } else {
        "none"
    };

    styled(
        &tokens,
        "font-family: inherit;
         color: var(--color-primary);
         font-size: var(--font-size-default);
         &:hover, &:focus, &:active {
           color: var(--color-primary-25);
         }",
    )
    .declare("text-decoration", decoration)
}
