//! Card container styles.

use serde::{Deserialize, Serialize};

use super::styled;
use crate::fragment::Fragment;
use crate::tokens::Tokens;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    #[default]
    Raised,
    Flat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTheme {
    #[default]
    Light,
    Dark,
}

/// Card props. Defaults to a raised, light card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardProps {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub theme: CardTheme,
}

/// Fragments for the card's outer box and its padded content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyles {
    pub container: Fragment,
    pub content: Fragment,
}

pub fn card_styles(props: &CardProps, tokens: &Tokens) -> CardStyles {
    let shadow = match props.kind {
        CardKind::Raised => tokens.var("shadow-1"),
        CardKind::Flat => "none".to_string(),
    };
    let background = match props.theme {
        CardTheme::Light => tokens.var("color-surface"),
        CardTheme::Dark => tokens.var("color-neutral-95"),
    };

    let container = styled(
        tokens,
        "display: flex;
         font-size: 1rem;
         flex-direction: column;
         width: 100%;
         border-radius: var(--border-radius-6);",
    )
    .declare("box-shadow", shadow)
    .declare("background", background);

    CardStyles {
        container,
        content: styled(tokens, "padding: var(--spacing-m);"),
    }
}
