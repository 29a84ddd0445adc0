use std::fmt;

use thiserror::Error;

use crate::catalog::{ResolveError, Transition};
use crate::tracker::TrackerError;

/// Stage of the per-issue workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Fetching,
    Resolving,
    Applying,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Fetching => "fetching",
            Self::Resolving => "resolving",
            Self::Applying => "applying",
        };
        f.write_str(s)
    }
}

/// Why a single issue could not be transitioned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// The transition catalog could not be retrieved.
    #[error("failed to get available transitions: {0}")]
    Fetch(TrackerError),

    /// No single transition leads to the target status.
    #[error(transparent)]
    Resolve(ResolveError),

    /// The tracker rejected or failed the transition call.
    #[error("failed to apply transition: {0}")]
    Apply(TrackerError),

    /// The workflow task ended without producing an outcome.
    #[error("workflow aborted: {0}")]
    Aborted(String),
}

impl WorkflowError {
    /// Stage the workflow was in when it failed.
    pub fn stage(&self) -> Option<WorkflowStage> {
        match self {
            Self::Fetch(_) => Some(WorkflowStage::Fetching),
            Self::Resolve(_) => Some(WorkflowStage::Resolving),
            Self::Apply(_) => Some(WorkflowStage::Applying),
            Self::Aborted(_) => None,
        }
    }
}

/// Terminal result of one issue's workflow.
#[derive(Debug, Clone)]
pub struct IssueOutcome {
    pub issue_key: String,
    /// The applied transition, or the failure that ended the workflow.
    pub result: Result<Transition, WorkflowError>,
}

impl IssueOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a batch run, in first-seen key order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<IssueOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &IssueOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &IssueOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn outcome(&self, issue_key: &str) -> Option<&IssueOutcome> {
        self.outcomes.iter().find(|o| o.issue_key == issue_key)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
