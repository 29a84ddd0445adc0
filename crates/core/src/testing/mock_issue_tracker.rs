//! Mock issue tracker for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{Transition, TransitionIntent, Transitions};
use crate::tracker::{IssueTracker, TrackerError};

/// A recorded make_transition call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedTransition {
    pub issue_key: String,
    pub transition: Transition,
    /// Whether the transition was accepted.
    pub success: bool,
}

/// Mock implementation of the IssueTracker trait.
///
/// Provides controllable behavior for testing:
/// - Serve a fixed catalog per issue key (unknown keys fail with `NotFound`)
/// - Reject specific `(issue key, transition)` pairs
/// - Fail the next fetch for a key once
/// - Record every call for assertions
#[derive(Debug, Clone, Default)]
pub struct MockIssueTracker {
    /// Catalogs served by issue key.
    available: Arc<RwLock<HashMap<String, Transitions>>>,
    /// Transition attempts that are rejected.
    disallowed: Arc<RwLock<Vec<TransitionIntent>>>,
    /// One-shot fetch failures by issue key.
    fetch_failures: Arc<RwLock<HashMap<String, TrackerError>>>,
    /// Issue keys passed to get_available_transitions, in call order.
    fetch_calls: Arc<RwLock<Vec<String>>>,
    /// Recorded make_transition calls.
    transitions: Arc<RwLock<Vec<RecordedTransition>>>,
}

impl MockIssueTracker {
    /// Create a new mock tracker with no issues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `transitions` as the catalog for `issue_key`.
    pub async fn add_transitions(&self, issue_key: &str, transitions: Transitions) {
        self.available
            .write()
            .await
            .insert(issue_key.to_string(), transitions);
    }

    /// Reject `transition` when applied to `issue_key`.
    pub async fn disallow(&self, issue_key: &str, transition: Transition) {
        self.disallowed
            .write()
            .await
            .push(TransitionIntent::new(issue_key, transition));
    }

    /// Fail the next fetch for `issue_key` with `error`; later fetches succeed.
    pub async fn fail_next_fetch(&self, issue_key: &str, error: TrackerError) {
        self.fetch_failures
            .write()
            .await
            .insert(issue_key.to_string(), error);
    }

    /// Get all issue keys fetched so far.
    pub async fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().await.clone()
    }

    /// Get the number of fetches for `issue_key`.
    pub async fn fetch_count(&self, issue_key: &str) -> usize {
        self.fetch_calls
            .read()
            .await
            .iter()
            .filter(|key| key.as_str() == issue_key)
            .count()
    }

    /// Get all recorded make_transition calls, accepted or not.
    pub async fn recorded_transitions(&self) -> Vec<RecordedTransition> {
        self.transitions.read().await.clone()
    }

    /// Get the accepted make_transition calls.
    pub async fn applied_transitions(&self) -> Vec<RecordedTransition> {
        self.transitions
            .read()
            .await
            .iter()
            .filter(|t| t.success)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    async fn get_available_transitions(
        &self,
        issue_key: &str,
    ) -> Result<Transitions, TrackerError> {
        self.fetch_calls.write().await.push(issue_key.to_string());

        if let Some(error) = self.fetch_failures.write().await.remove(issue_key) {
            return Err(error);
        }

        self.available
            .read()
            .await
            .get(issue_key)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(issue_key.to_string()))
    }

    async fn make_transition(
        &self,
        issue_key: &str,
        transition: &Transition,
    ) -> Result<(), TrackerError> {
        let intent = TransitionIntent::new(issue_key, transition.clone());
        let allowed = !self.disallowed.read().await.contains(&intent);

        self.transitions.write().await.push(RecordedTransition {
            issue_key: issue_key.to_string(),
            transition: transition.clone(),
            success: allowed,
        });

        if allowed {
            Ok(())
        } else {
            Err(TrackerError::Rejected {
                issue_key: issue_key.to_string(),
                transition_id: transition.id.clone(),
            })
        }
    }
}
