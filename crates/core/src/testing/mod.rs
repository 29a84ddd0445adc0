//! Testing utilities and an in-memory issue tracker.
//!
//! # Example
//!
//! ```rust,ignore
//! use transitioner_core::testing::{fixtures, MockIssueTracker};
//!
//! let tracker = MockIssueTracker::new();
//! tracker.add_transitions("PROJ-1", fixtures::catalog(&[("21", "31")])).await;
//! tracker.disallow("PROJ-2", fixtures::transition("21", "31")).await;
//! ```

mod mock_issue_tracker;

pub use mock_issue_tracker::{MockIssueTracker, RecordedTransition};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{StatusRef, Transition, Transitions};

    /// Create a transition `id` leading to status `to_id`.
    pub fn transition(id: &str, to_id: &str) -> Transition {
        Transition::new(
            id,
            format!("Transition {}", id),
            StatusRef::new(to_id, format!("Status {}", to_id)),
        )
    }

    /// Create a catalog from `(transition id, destination status id)` pairs.
    pub fn catalog(edges: &[(&str, &str)]) -> Transitions {
        edges
            .iter()
            .map(|(id, to_id)| transition(id, to_id))
            .collect::<Vec<_>>()
            .into()
    }
}
