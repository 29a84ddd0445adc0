use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use transitioner_core::{
    load_config, validate_config, BatchRunner, IssueTracker, JiraClient, JiraConfig,
    SanitizedConfig, CONFIG_PATH_ENV,
};

/// Set to "json" for one JSON object per log line.
const LOG_FORMAT_ENV: &str = "TRANSITIONER_LOG_FORMAT";

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        error!("Issue with input: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn run() -> Result<()> {
    let config_path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
    if let Some(path) = &config_path {
        info!("Loading configuration from {:?}", path);
    }

    // Nothing is scheduled until the whole configuration is known to be valid.
    let config = load_config(config_path.as_deref()).context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    let sanitized = SanitizedConfig::from(&config);
    info!(
        "Configuration:\n{}",
        serde_json::to_string_pretty(&sanitized).unwrap_or_default()
    );

    let tracker: Arc<dyn IssueTracker> = Arc::new(
        JiraClient::new(JiraConfig::from(&config)).context("Failed to create Jira client")?,
    );

    // Per-issue failures are logged by the runner and do not change the exit code.
    BatchRunner::new(tracker)
        .run(sanitized.issue_keys, &config.to_status_id)
        .await;

    Ok(())
}
