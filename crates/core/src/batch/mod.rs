//! Batch transition of many issues to one target status.
//!
//! Each unique issue key gets its own workflow (fetch, resolve, apply) running
//! concurrently with the others. Failures stay inside the workflow that hit
//! them; the runner itself never fails.

mod keys;
mod runner;
mod types;
mod workflow;

pub use keys::{dedup_keys, parse_issue_keys, ISSUE_KEY_SEPARATOR};
pub use runner::BatchRunner;
pub use types::*;
pub use workflow::update_issue;
