//! The shared input chrome fragment table.

use super::styled;
use crate::fragment::Fragment;
use crate::resolve::FragmentTable;
use crate::tokens::Tokens;

/// The idle look of a text-like input.
pub fn input_base(tokens: &Tokens) -> Fragment {
    styled(
        tokens,
        "appearance: none;
         background-color: var(--background-color-for-input);
         border: 1px solid var(--border-color-for-input);
         border-radius: var(--border-radius-for-input);
         box-sizing: border-box;
         color: var(--font-color-for-input);
         font-family: inherit;
         font-size: var(--font-size-default);
         height: var(--size-height-input);
         outline: none;
         padding: 0 var(--spacing-xs);
         width: 100%;",
    )
}

/// Builds the stock fragment table for text-like inputs.
///
/// This is the table stylesheets layer their own fragments over.
pub fn input_table(tokens: &Tokens) -> FragmentTable {
    FragmentTable::new()
        .add("base", input_base(tokens))
        .add(
            "disabled",
            styled(
                tokens,
                "cursor: not-allowed;
                 background-color: var(--background-color-for-input-when-disabled);
                 color: var(--font-color-for-input-when-disabled);
                 border-color: var(--border-color-for-input-when-disabled);
                 opacity: 1;",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_table_is_complete() {
        assert!(input_table(&Tokens::default()).validate().is_ok());
    }

    #[test]
    fn test_input_table_expands_tokens() {
        let tokens = Tokens::default().merge(Tokens::new().set("border-color-for-input-when-error", "crimson"));
        let table = input_table(&tokens);
        assert_eq!(
            table.get("error").unwrap().get("border-color"),
            Some("crimson")
        );
        assert_eq!(
            table.get("base").unwrap().get("padding"),
            Some("0 4px")
        );
    }
}
