//! Style builders for the library's components.
//!
//! Each builder takes the component's props and the [`Tokens`](crate::Tokens)
//! in effect and returns fragments. Only the input chrome goes through
//! [`resolve_style`](crate::resolve_style); the rest apply fixed rules.

pub mod card;
pub mod date_time;
pub mod input;
pub mod link;
pub mod toggle;

use crate::fragment::Fragment;
use crate::tokens::Tokens;

/// Parses CSS text after expanding token references.
pub(crate) fn styled(tokens: &Tokens, css: &str) -> Fragment {
    Fragment::parse(&tokens.expand(css))
}
