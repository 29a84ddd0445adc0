use figment::{
    providers::{Format, Serialized, Toml},
    value::{Dict, Value},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Environment variable holding an optional TOML config file path.
pub const CONFIG_PATH_ENV: &str = "TRANSITIONER_CONFIG";

/// Step inputs read verbatim from the environment, lower-case name first.
const INPUT_KEYS: &[&str] = &[
    "base_url",
    "user_name",
    "api_token",
    "issue_keys",
    "to_status_id",
    LEGACY_STATUS_KEY,
];

const TIMEOUT_KEY: &str = "timeout_secs";

const LEGACY_STATUS_KEY: &str = "to_status";

/// Load configuration from an optional file with environment variable overrides
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::new();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    extract(figment.merge(Serialized::defaults(env_inputs()?)))
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .or_else(|_| std::env::var(key.to_uppercase()))
        .ok()
}

// Inputs stay strings: tokens and status ids must not be reinterpreted as numbers.
fn env_inputs() -> Result<Dict, ConfigError> {
    let mut inputs: Dict = INPUT_KEYS
        .iter()
        .filter_map(|key| env_var(key).map(|value| (key.to_string(), Value::from(value))))
        .collect();

    if let Some(raw) = env_var(TIMEOUT_KEY) {
        let secs: u64 = raw.trim().parse().map_err(|_| {
            ConfigError::ParseError(format!(
                "timeout_secs must be a whole number of seconds, got '{}'",
                raw
            ))
        })?;
        inputs.insert(TIMEOUT_KEY.to_string(), Value::from(secs));
    }

    Ok(inputs)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    extract(Figment::from(Toml::string(toml_str)))
}

fn extract(figment: Figment) -> Result<Config, ConfigError> {
    // Only status ids are resolved; a display-name target would match differently.
    if figment.contains(LEGACY_STATUS_KEY) {
        let message = if figment.contains("to_status_id") {
            "to_status and to_status_id are both set, remove to_status"
        } else {
            "to_status is not supported, provide the target status id as to_status_id"
        };
        return Err(ConfigError::ValidationError(message.to_string()));
    }

    figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}
