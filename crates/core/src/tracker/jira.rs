//! Jira Cloud REST client (`/rest/api/3`).
//!
//! Each call performs exactly one authenticated request. The underlying
//! `reqwest::Client` pools connections and is safe to share between tasks.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use tracing::debug;

use crate::catalog::{Transition, Transitions};
use crate::config::Config;

use super::{IssueTracker, TrackerError};

/// Jira client configuration.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Tracker API root (e.g., "https://example.atlassian.net").
    pub base_url: String,
    pub user_name: String,
    pub api_token: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl From<&Config> for JiraConfig {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_name: config.user_name.clone(),
            api_token: config.api_token.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

#[derive(Serialize)]
struct TransitionRequest<'a> {
    transition: &'a Transition,
}

/// Jira API client.
pub struct JiraClient {
    client: Client,
    base_url: String,
    user_name: String,
    api_token: String,
}

impl JiraClient {
    /// Create a new Jira client.
    pub fn new(config: JiraConfig) -> Result<Self, TrackerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TrackerError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            user_name: config.user_name,
            api_token: config.api_token,
        })
    }

    fn transitions_url(&self, issue_key: &str) -> String {
        format!(
            "{}/rest/api/3/issue/{}/transitions",
            self.base_url,
            urlencoding::encode(issue_key.trim())
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("Jira request: {} {}", method, url);
        self.client
            .request(method, url)
            .basic_auth(&self.user_name, Some(&self.api_token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
    }
}

fn send_error(e: reqwest::Error) -> TrackerError {
    if e.is_timeout() {
        TrackerError::Timeout
    } else if e.is_connect() {
        TrackerError::ConnectionFailed(e.to_string())
    } else {
        TrackerError::Http(e.to_string())
    }
}

async fn check_status(issue_key: &str, response: Response) -> Result<Response, TrackerError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        401 | 403 => Err(TrackerError::Unauthorized(status.as_u16())),
        404 => Err(TrackerError::NotFound(issue_key.to_string())),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(TrackerError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            })
        }
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn get_available_transitions(
        &self,
        issue_key: &str,
    ) -> Result<Transitions, TrackerError> {
        let url = self.transitions_url(issue_key);
        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(send_error)?;

        let response = check_status(issue_key, response).await?;
        let body = response.text().await.map_err(send_error)?;

        serde_json::from_str(&body).map_err(|e| {
            TrackerError::Parse(format!("Failed to parse transitions for {}: {}", issue_key, e))
        })
    }

    async fn make_transition(
        &self,
        issue_key: &str,
        transition: &Transition,
    ) -> Result<(), TrackerError> {
        let url = self.transitions_url(issue_key);
        let response = self
            .request(Method::POST, &url)
            .json(&TransitionRequest { transition })
            .send()
            .await
            .map_err(send_error)?;

        check_status(issue_key, response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StatusRef;

    fn client(base_url: &str) -> JiraClient {
        JiraClient::new(JiraConfig {
            base_url: base_url.to_string(),
            user_name: "ci-bot".to_string(),
            api_token: "token".to_string(),
            timeout_secs: 10,
        })
        .unwrap()
    }

    #[test]
    fn test_transitions_url() {
        let jira = client("https://tracker.example.com");
        assert_eq!(
            jira.transitions_url("PROJ-1"),
            "https://tracker.example.com/rest/api/3/issue/PROJ-1/transitions"
        );
    }

    #[test]
    fn test_transitions_url_trims_slash_and_key() {
        let jira = client("https://tracker.example.com/");
        assert_eq!(
            jira.transitions_url(" PROJ-1 "),
            "https://tracker.example.com/rest/api/3/issue/PROJ-1/transitions"
        );
    }

    #[test]
    fn test_transitions_url_encodes_key() {
        let jira = client("https://tracker.example.com");
        assert_eq!(
            jira.transitions_url("a/b c"),
            "https://tracker.example.com/rest/api/3/issue/a%2Fb%20c/transitions"
        );
    }

    #[test]
    fn test_transition_request_body_echoes_transition() {
        let transition = Transition::new("41", "Done", StatusRef::new("31", "Done"));
        let body = serde_json::to_value(TransitionRequest {
            transition: &transition,
        })
        .unwrap();
        assert_eq!(body["transition"]["id"], "41");
        assert_eq!(body["transition"]["to"]["id"], "31");
    }
}
