use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::tracker::IssueTracker;

use super::{dedup_keys, update_issue, BatchReport, IssueOutcome, WorkflowError};

/// Runs one workflow per unique issue key and waits for all of them.
pub struct BatchRunner {
    tracker: Arc<dyn IssueTracker>,
}

impl BatchRunner {
    pub fn new(tracker: Arc<dyn IssueTracker>) -> Self {
        Self { tracker }
    }

    /// Transition every issue in `issue_keys` to `to_status_id`.
    ///
    /// Duplicate keys run once. Returns after every workflow has finished;
    /// there is no early exit on failure and no cancellation.
    pub async fn run<I, S>(&self, issue_keys: I, to_status_id: &str) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = dedup_keys(issue_keys);
        let mut tasks = JoinSet::new();

        for (index, issue_key) in keys.iter().cloned().enumerate() {
            let tracker = Arc::clone(&self.tracker);
            let to_status_id = to_status_id.to_string();
            tasks.spawn(async move {
                let outcome = update_issue(tracker.as_ref(), &issue_key, &to_status_id).await;
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<IssueOutcome>> = keys.iter().map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => debug!("Issue workflow task failed: {}", e),
            }
        }

        // A panicked task leaves its slot empty.
        let outcomes: Vec<IssueOutcome> = keys
            .into_iter()
            .zip(slots)
            .map(|(issue_key, slot)| {
                slot.unwrap_or_else(|| {
                    let error = WorkflowError::Aborted(format!(
                        "workflow for {} did not complete",
                        issue_key
                    ));
                    warn!(
                        issue_key = %issue_key,
                        error = %error,
                        "Failed to update status to {} for issue {}",
                        to_status_id,
                        issue_key
                    );
                    IssueOutcome {
                        issue_key,
                        result: Err(error),
                    }
                })
            })
            .collect();

        let report = BatchReport { outcomes };
        info!(
            "Processed all issues ({} succeeded, {} failed)",
            report.succeeded().count(),
            report.failed().count()
        );
        report
    }
}
