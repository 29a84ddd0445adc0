use serde::{Deserialize, Deserializer, Serialize};

use crate::batch::parse_issue_keys;

/// Root configuration of a batch run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Tracker API root (e.g., "https://example.atlassian.net").
    pub base_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub user_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub api_token: String,
    /// `|`-separated issue keys.
    #[serde(deserialize_with = "lenient_string")]
    pub issue_keys: String,
    /// Status the issues should be moved to, matched against `to.id`.
    #[serde(deserialize_with = "lenient_string")]
    pub to_status_id: String,
    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Config {
    /// Unique, trimmed issue keys in first-seen order.
    pub fn issue_keys(&self) -> Vec<String> {
        parse_issue_keys(&self.issue_keys)
    }
}

fn default_timeout() -> u64 {
    10
}

// TOML files may write status ids as integers; environment inputs are always strings.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
    })
}

/// Sanitized config for printing at startup (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub base_url: String,
    pub user_name: String,
    pub api_token_configured: bool,
    pub issue_keys: Vec<String>,
    pub to_status_id: String,
    pub timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_name: config.user_name.clone(),
            api_token_configured: !config.api_token.is_empty(),
            issue_keys: config.issue_keys(),
            to_status_id: config.to_status_id.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}
