//! Toggle switch styles and prop normalization.
//!
//! The toggle once took `isChecked` and `isDisabled`. They still work but are
//! folded into `checked` and `disabled` by [`ToggleProps::normalize`], which
//! logs a deprecation warning for each one it sees.

use serde::{Deserialize, Serialize};

use super::styled;
use crate::fragment::Fragment;
use crate::tokens::Tokens;

const THUMB_SMALL: &str = "13px";
const THUMB_BIG: &str = "calc(13px * 2)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleSize {
    Small,
    #[default]
    Big,
}

/// Toggle props as callers pass them, deprecated names included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToggleProps {
    pub size: ToggleSize,
    pub checked: bool,
    pub disabled: bool,
    /// Deprecated, use `checked`.
    pub is_checked: Option<bool>,
    /// Deprecated, use `disabled`.
    pub is_disabled: Option<bool>,
}

/// Canonical toggle state after alias folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub size: ToggleSize,
    pub checked: bool,
    pub disabled: bool,
}

impl ToggleProps {
    pub fn normalize(&self) -> ToggleState {
        if self.is_checked.is_some() {
            tracing::warn!(prop = "isChecked", replacement = "checked", "deprecated toggle prop");
        }
        if self.is_disabled.is_some() {
            tracing::warn!(prop = "isDisabled", replacement = "disabled", "deprecated toggle prop");
        }
        ToggleState {
            size: self.size,
            checked: self.checked || self.is_checked.unwrap_or(false),
            disabled: self.disabled || self.is_disabled.unwrap_or(false),
        }
    }
}

/// Fragments for the label box, the track and the sliding thumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleStyles {
    pub label: Fragment,
    pub track: Fragment,
    pub thumb: Fragment,
}

pub fn toggle_styles(state: &ToggleState, tokens: &Tokens) -> ToggleStyles {
    let small = state.size == ToggleSize::Small;
    let height = tokens.var("standard-input-height");

    let label = Fragment::new()
        .declare("position", "relative")
        .declare("display", "inline-block")
        .declare(
            "cursor",
            if state.disabled { "not-allowed" } else { "pointer" },
        )
        .declare(
            "height",
            if small {
                format!("calc({} / 2)", height)
            } else {
                format!("calc({})", height)
            },
        )
        .declare(
            "width",
            if small {
                format!("calc({})", height)
            } else {
                format!("calc({} * 2)", height)
            },
        );

    let track_background = match (state.disabled, state.checked) {
        (true, true) => "color-primary-25",
        (true, false) => "color-neutral",
        (false, true) => "color-primary",
        (false, false) => "color-neutral-60",
    };
    let mut track = styled(
        tokens,
        "border-radius: 16px;
         box-shadow: var(--shadow-9);
         left: 0;
         top: 50%;
         transition: background 0.2s ease-in-out;
         content: '';
         position: absolute;
         transform: translateY(-50%);
         height: 100%;
         width: 100%;",
    )
    .declare("background", tokens.var(track_background));
    if state.disabled {
        track.set("box-shadow", "none");
    }

    let thumb_size = if small { THUMB_SMALL } else { THUMB_BIG };
    let thumb_background = match (state.disabled, state.checked) {
        (true, true) => "color-gray",
        (true, false) => "color-navy-95",
        (false, _) => "color-surface",
    };
    let transform = match (state.checked, small) {
        (true, true) => "translate(117%, -50%)",
        (true, false) => "translate(127%, -50%)",
        (false, _) => "translateY(-50%)",
    };
    let mut thumb = styled(
        tokens,
        "content: '';
         position: absolute;
         top: 50%;
         box-shadow: var(--shadow-7);
         border-radius: 50%;
         z-index: 1;
         transition: transform 0.2s ease, background 0.2s ease;",
    )
    .declare("left", if small { "2px" } else { "3px" })
    .declare("height", thumb_size)
    .declare("width", thumb_size)
    .declare("background-color", tokens.var(thumb_background))
    .declare("transform", transform);
    if state.disabled {
        thumb.set("box-shadow", "none");
    } else {
        thumb = thumb.nest(
            "&:hover, &:focus",
            Fragment::new().declare("box-shadow", tokens.var("shadow-16")),
        );
    }

    ToggleStyles {
        label,
        track,
        thumb,
    }
}
