//! Widget state flags and the conditions they trigger.
//!
//! - [`StateSnapshot`]: An immutable read of a widget's boolean flags
//! - [`Condition`]: A visual treatment that an active flag can select
//!
//! The flags are not mutually exclusive. [`Condition::PRECEDENCE`] fixes the
//! order in which they are arbitrated.

mod condition;
mod snapshot;

pub use condition::Condition;
pub use snapshot::StateSnapshot;
