pub mod batch;
pub mod catalog;
pub mod config;
pub mod testing;
pub mod tracker;

pub use batch::{
    dedup_keys, parse_issue_keys, update_issue, BatchReport, BatchRunner, IssueOutcome,
    WorkflowError, WorkflowStage,
};
pub use catalog::{resolve, ResolveError, StatusRef, Transition, TransitionIntent, Transitions};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    CONFIG_PATH_ENV,
};
pub use tracker::{IssueTracker, JiraClient, JiraConfig, TrackerError};
