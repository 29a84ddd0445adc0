//! Issue tracker abstraction.
//!
//! This module provides an `IssueTracker` trait with a network-backed Jira
//! implementation. Tests use `testing::MockIssueTracker`.

mod jira;

pub use jira::{JiraClient, JiraConfig};

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::{Transition, Transitions};

/// Errors that can occur when talking to the issue tracker.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// Could not reach the tracker.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The per-request timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// Credentials were rejected (401/403).
    #[error("Authentication failed: HTTP {0}")]
    Unauthorized(u16),

    /// The issue does not exist or is not visible to the user.
    #[error("Issue not found: {0}")]
    NotFound(String),

    /// The tracker refused the transition for this issue.
    #[error("Transition {transition_id} is not allowed for issue {issue_key}")]
    Rejected {
        issue_key: String,
        transition_id: String,
    },

    /// Tracker returned an unexpected status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Any other transport failure.
    #[error("HTTP request failed: {0}")]
    Http(String),
}

/// Trait for issue tracker clients.
///
/// Implementations are shared across concurrently running workflows.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch the transitions available from the issue's current status.
    async fn get_available_transitions(&self, issue_key: &str)
        -> Result<Transitions, TrackerError>;

    /// Apply `transition` to the issue.
    async fn make_transition(
        &self,
        issue_key: &str,
        transition: &Transition,
    ) -> Result<(), TrackerError>;
}
