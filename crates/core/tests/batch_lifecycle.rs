//! Batch lifecycle integration tests.
//!
//! These tests drive the full per-issue workflow through the batch runner:
//! fetching -> resolving -> applying -> done, with failures at each stage.

use std::sync::Arc;

use transitioner_core::{
    parse_issue_keys,
    testing::{fixtures, MockIssueTracker},
    BatchRunner, IssueTracker, ResolveError, TrackerError, WorkflowError, WorkflowStage,
};

const DONE: &str = "31";

/// Test helper wiring a mock tracker into a runner.
struct TestHarness {
    tracker: Arc<MockIssueTracker>,
    runner: BatchRunner,
}

impl TestHarness {
    fn new() -> Self {
        let tracker = Arc::new(MockIssueTracker::new());
        let runner = BatchRunner::new(Arc::clone(&tracker) as Arc<dyn IssueTracker>);
        Self { tracker, runner }
    }

    async fn with_done_transition(self, issue_key: &str, transition_id: &str) -> Self {
        self.tracker
            .add_transitions(
                issue_key,
                fixtures::catalog(&[("11", "3"), (transition_id, DONE)]),
            )
            .await;
        self
    }
}

#[tokio::test]
async fn test_fetch_failure_does_not_affect_other_issues() {
    let harness = TestHarness::new().with_done_transition("B", "21").await;

    let report = harness.runner.run(["A", "B"], DONE).await;

    assert_eq!(report.len(), 2);
    let a = report.outcome("A").unwrap();
    assert_eq!(
        a.result.as_ref().unwrap_err().stage(),
        Some(WorkflowStage::Fetching)
    );
    assert_eq!(report.outcome("B").unwrap().result.as_ref().unwrap().id, "21");

    let applied = harness.tracker.applied_transitions().await;
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].issue_key, "B");
}

#[tokio::test]
async fn test_apply_rejection_fails_only_that_issue() {
    let harness = TestHarness::new()
        .with_done_transition("A", "1")
        .await
        .with_done_transition("B", "1")
        .await;
    harness
        .tracker
        .disallow("A", fixtures::transition("1", DONE))
        .await;

    let report = harness.runner.run(["A", "B"], DONE).await;

    assert!(matches!(
        report.outcome("A").unwrap().result,
        Err(WorkflowError::Apply(TrackerError::Rejected { .. }))
    ));
    assert!(report.outcome("B").unwrap().is_success());
    assert_eq!(harness.tracker.fetch_count("A").await, 1);
}

#[tokio::test]
async fn test_every_failure_kind_in_one_batch() {
    let harness = TestHarness::new()
        .with_done_transition("OK-1", "21")
        .await
        .with_done_transition("OK-2", "22")
        .await;
    harness
        .tracker
        .add_transitions("PAST-1", fixtures::catalog(&[("11", "3")]))
        .await;
    harness
        .tracker
        .add_transitions("DUP-1", fixtures::catalog(&[("1", DONE), ("2", DONE)]))
        .await;

    let keys = parse_issue_keys("OK-1|PAST-1|DUP-1|GONE-1|OK-2|OK-1");
    let report = harness.runner.run(&keys, DONE).await;

    let order: Vec<_> = report.outcomes.iter().map(|o| o.issue_key.as_str()).collect();
    assert_eq!(order, vec!["OK-1", "PAST-1", "DUP-1", "GONE-1", "OK-2"]);
    assert_eq!(report.succeeded().count(), 2);
    assert_eq!(report.failed().count(), 3);

    assert!(matches!(
        report.outcome("PAST-1").unwrap().result,
        Err(WorkflowError::Resolve(ResolveError::NoMatchingTransition { .. }))
    ));
    assert!(matches!(
        report.outcome("DUP-1").unwrap().result,
        Err(WorkflowError::Resolve(ResolveError::AmbiguousTransition { .. }))
    ));
    assert!(matches!(
        report.outcome("GONE-1").unwrap().result,
        Err(WorkflowError::Fetch(TrackerError::NotFound(_)))
    ));

    let mut fetched = harness.tracker.fetch_calls().await;
    fetched.sort();
    assert_eq!(fetched, vec!["DUP-1", "GONE-1", "OK-1", "OK-2", "PAST-1"]);
}

#[tokio::test]
async fn test_transient_failure_is_not_retried() {
    let harness = TestHarness::new().with_done_transition("A", "21").await;
    harness
        .tracker
        .fail_next_fetch("A", TrackerError::ConnectionFailed("reset".to_string()))
        .await;

    let report = harness.runner.run(["A"], DONE).await;

    assert!(!report.outcome("A").unwrap().is_success());
    assert_eq!(harness.tracker.fetch_count("A").await, 1);
    assert!(harness.tracker.recorded_transitions().await.is_empty());
}

#[tokio::test]
async fn test_many_issues_each_processed_once() {
    let harness = TestHarness::new();
    let keys: Vec<String> = (1..=50).map(|i| format!("PROJ-{}", i)).collect();
    for key in &keys {
        harness
            .tracker
            .add_transitions(key, fixtures::catalog(&[("21", DONE)]))
            .await;
    }

    let doubled: Vec<&String> = keys.iter().chain(keys.iter()).collect();
    let report = harness.runner.run(doubled, DONE).await;

    assert_eq!(report.len(), 50);
    assert_eq!(report.succeeded().count(), 50);
    for key in &keys {
        assert_eq!(harness.tracker.fetch_count(key).await, 1);
    }
    assert_eq!(harness.tracker.applied_transitions().await.len(), 50);
}
