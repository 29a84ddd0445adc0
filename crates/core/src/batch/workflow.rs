use tracing::{info, warn};

use crate::catalog::Transition;
use crate::tracker::IssueTracker;

use super::{IssueOutcome, WorkflowError};

/// Move one issue to `to_status_id`: fetch its catalog, resolve the single
/// matching transition, apply it.
///
/// Every failure is logged and returned in the outcome; nothing is retried.
pub async fn update_issue(
    tracker: &dyn IssueTracker,
    issue_key: &str,
    to_status_id: &str,
) -> IssueOutcome {
    info!("Checking issue {} status", issue_key);

    let result = transition_issue(tracker, issue_key, to_status_id).await;
    match &result {
        Ok(transition) => info!(
            transition_id = %transition.id,
            "Successfully updated issue {} to status {}",
            issue_key,
            to_status_id
        ),
        Err(e) => {
            let stage = e.stage().map(|s| s.to_string()).unwrap_or_default();
            warn!(
                issue_key = %issue_key,
                stage = %stage,
                error = %e,
                "Failed to update status to {} for issue {}",
                to_status_id,
                issue_key
            );
        }
    }

    IssueOutcome {
        issue_key: issue_key.to_string(),
        result,
    }
}

async fn transition_issue(
    tracker: &dyn IssueTracker,
    issue_key: &str,
    to_status_id: &str,
) -> Result<Transition, WorkflowError> {
    let catalog = tracker
        .get_available_transitions(issue_key)
        .await
        .map_err(WorkflowError::Fetch)?;

    let transition = catalog
        .resolve(to_status_id)
        .map_err(WorkflowError::Resolve)?;

    tracker
        .make_transition(issue_key, &transition)
        .await
        .map_err(WorkflowError::Apply)?;

    Ok(transition)
}
