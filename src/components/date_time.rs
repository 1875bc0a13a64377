//! Date/time input chrome.
//!
//! The picker is made of a text input, an optional clear button section and
//! a calendar icon container. The icon and clear sections share the input's
//! state, so they resolve against the same [`StateSnapshot`].

use super::input::input_base;
use super::styled;
use crate::fragment::Fragment;
use crate::resolve::{resolve_style, ConfigurationError, FragmentTable, StyleDescriptor};
use crate::state::StateSnapshot;
use crate::tokens::Tokens;

const SECTION_BASE: &str = "align-items: center;
    box-sizing: border-box;
    background-color: var(--background-color-for-input);
    height: var(--size-height-input);
    display: flex;
    padding: var(--spacing-xs);
    outline: 0;";

fn section_table(tokens: &Tokens, base: Fragment) -> FragmentTable {
    FragmentTable::new()
        .add("base", base)
        .add(
            "disabled",
            styled(
                tokens,
                "cursor: not-allowed;
                 background-color: var(--background-color-for-input-when-disabled);
                 color: var(--font-color-for-input-when-disabled);
                 border-color: var(--border-color-for-input-when-disabled);",
            ),
        )
        .add(
            "error",
            styled(
                tokens,
                "color: var(--font-color-for-input-when-error);
                 border-color: var(--border-color-for-input-when-error);",
            ),
        )
        .add(
            "warning",
            styled(
                tokens,
                "color: var(--font-color-for-input-when-warning);
                 border-color: var(--border-color-for-input-when-warning);",
            ),
        )
        .add(
            "focusedOrOpen",
            styled(
                tokens,
                "border-color: var(--border-color-for-input-when-focused);",
            ),
        )
}

/// Fragment table for the clear button section.
pub fn clear_section_table(tokens: &Tokens) -> FragmentTable {
    let base = styled(tokens, SECTION_BASE).merge(&styled(
        tokens,
        "border-bottom: 1px solid var(--border-color-for-input);
         border-top: 1px solid var(--border-color-for-input);
         cursor: pointer;",
    ));
    section_table(tokens, base)
}

/// Fragment table for the calendar icon container.
pub fn calendar_icon_table(tokens: &Tokens) -> FragmentTable {
    let base = styled(tokens, SECTION_BASE).merge(&styled(
        tokens,
        "border: 1px solid var(--border-color-for-input);
         border-top-right-radius: var(--border-radius-for-input);
         border-bottom-right-radius: var(--border-radius-for-input);",
    ));
    section_table(tokens, base)
}

/// Styles for the clear button section.
pub fn clear_section(
    snapshot: &StateSnapshot,
    tokens: &Tokens,
) -> Result<StyleDescriptor, ConfigurationError> {
    resolve_style(snapshot, &clear_section_table(tokens))
}

/// Styles for the calendar icon container.
pub fn calendar_icon_container(
    snapshot: &StateSnapshot,
    tokens: &Tokens,
) -> Result<StyleDescriptor, ConfigurationError> {
    resolve_style(snapshot, &calendar_icon_table(tokens))
}

/// Styles for the row wrapping the input and its sections. Stateless.
pub fn input_container(tokens: &Tokens) -> Fragment {
    styled(
        tokens,
        "width: 100%;
         align-items: center;
         display: flex;
         font-size: var(--font-size-default);
         font-family: inherit;",
    )
}

/// Styles for the date/time text input itself.
///
/// Disabled and read-only visuals come from pseudo-class rules in the base
/// fragment; only the open/focused treatment depends on the snapshot. It
/// also recolors the adjacent section so both borders match.
pub fn date_time_input(snapshot: &StateSnapshot, tokens: &Tokens) -> Vec<Fragment> {
    let mut fragments = vec![
        input_base(tokens),
        styled(
            tokens,
            "border-radius: var(--border-radius-for-input) 0 0 var(--border-radius-for-input);
             border-right: none;
             transition: color var(--transition-standard), border-color var(--transition-standard);
             &:focus, &:active, &:focus + *, &:active + * {
               border-color: var(--border-color-for-input-when-focused);
               color: var(--font-color-for-input);
             }
             &:disabled {
               cursor: not-allowed;
             }
             &:disabled, &:read-only {
               background-color: var(--background-color-for-input-when-disabled);
               color: var(--font-color-for-input-when-disabled);
               border-color: var(--border-color-for-input-when-disabled);
               opacity: 1;
             }",
        ),
    ];
    if snapshot.is_open || snapshot.is_focused {
        fragments.push(styled(
            tokens,
            "&, & + * {
               border-color: var(--border-color-for-input-when-focused);
               color: var(--font-color-for-input);
             }",
        ));
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Condition;

    #[test]
    fn test_clear_section_idle() {
        let descriptor = clear_section(&StateSnapshot::new(), &Tokens::default()).unwrap();
        assert_eq!(descriptor.len(), 1);
        assert_eq!(descriptor.compose().get("cursor"), Some("pointer"));
    }

    #[test]
    fn test_clear_section_disabled_overrides_cursor() {
        let snapshot = StateSnapshot::new().with_disabled(true).with_error(true);
        let descriptor = clear_section(&snapshot, &Tokens::default()).unwrap();
        assert_eq!(descriptor.selected(), Some(Condition::Disabled));
        assert_eq!(descriptor.compose().get("cursor"), Some("not-allowed"));
    }

    #[test]
    fn test_calendar_icon_warning() {
        let snapshot = StateSnapshot::new().with_warning(true).with_open(true);
        let descriptor = calendar_icon_container(&snapshot, &Tokens::default()).unwrap();
        assert_eq!(descriptor.selected(), Some(Condition::Warning));
        assert_eq!(descriptor.compose().get("border-color"), Some("#f16d0e"));
    }

    #[test]
    fn test_calendar_icon_keeps_rounded_corners() {
        let descriptor =
            calendar_icon_container(&StateSnapshot::new().with_focused(true), &Tokens::default())
                .unwrap();
        let composed = descriptor.compose();
        assert_eq!(composed.get("border-top-right-radius"), Some("6px"));
        assert_eq!(composed.get("border-color"), Some("#00b39e"));
    }

    #[test]
    fn test_input_container_is_stateless_flex_row() {
        let fragment = input_container(&Tokens::default());
        assert_eq!(fragment.get("display"), Some("flex"));
        assert_eq!(fragment.get("font-size"), Some("1rem"));
    }

    #[test]
    fn test_date_time_input_focus_override() {
        let tokens = Tokens::default();
        assert_eq!(date_time_input(&StateSnapshot::new(), &tokens).len(), 2);

        let focused = date_time_input(&StateSnapshot::new().with_focused(true), &tokens);
        let opened = date_time_input(&StateSnapshot::new().with_open(true), &tokens);
        assert_eq!(focused.len(), 3);
        assert_eq!(focused, opened);
        assert!(focused[2].rule("&, & + *").is_some());
    }

    #[test]
    fn test_date_time_input_pseudo_class_rules() {
        let fragments = date_time_input(&StateSnapshot::new(), &Tokens::default());
        let own = &fragments[1];
        assert_eq!(own.get("border-right"), Some("none"));
        assert_eq!(
            own.rule("&:disabled").unwrap().get("cursor"),
            Some("not-allowed")
        );
        assert_eq!(
            own.rule("&:disabled, &:read-only").unwrap().get("opacity"),
            Some("1")
        );
    }
}
