//! Transition catalogs and target-status resolution.
//!
//! A catalog is the snapshot of transitions available from an issue's current
//! status at fetch time. It is built per fetch, resolved once and dropped.

mod resolver;
mod types;

pub use resolver::{resolve, ResolveError};
pub use types::*;
