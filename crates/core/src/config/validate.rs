use super::{types::Config, ConfigError};

/// Validate configuration before any work is scheduled.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let base_url = config.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "base_url cannot be empty".to_string(),
        ));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "base_url must start with http:// or https://, got '{}'",
            base_url
        )));
    }

    for (name, value) in [
        ("user_name", &config.user_name),
        ("api_token", &config.api_token),
        ("to_status_id", &config.to_status_id),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                name
            )));
        }
    }

    if config.issue_keys().is_empty() {
        return Err(ConfigError::ValidationError(
            "issue_keys must contain at least one issue key".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
