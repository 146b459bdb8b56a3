//! Upstream HTTP client.

use serde_json::Value;

use crate::config::UpstreamConfig;

/// Classification of one failed upstream fetch.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Completed response with a non-success status.
    #[error("upstream responded with status {0}")]
    Status(reqwest::StatusCode),

    /// Connection or protocol failure before a response arrived.
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("upstream response was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    /// True for a completed response with a non-success status — the only
    /// failure class that gets retried against the fallback provider.
    pub fn is_status(&self) -> bool {
        matches!(self, UpstreamError::Status(_))
    }
}

/// Shared client for the two JSON providers.
///
/// No timeout is set on the underlying client.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    primary_base: String,
    fallback_base: String,
}

impl UpstreamClient {
    /// Build a client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            primary_base: config.primary_base_url.trim_end_matches('/').to_string(),
            fallback_base: config.fallback_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL for a path on the primary provider.
    pub fn primary_url(&self, path: &str) -> String {
        format!("{}{}", self.primary_base, path)
    }

    /// URL for a path on the fallback provider.
    pub fn fallback_url(&self, path: &str) -> String {
        format!("{}{}", self.fallback_base, path)
    }

    /// Fetch a URL and parse the body as JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        response.json().await.map_err(UpstreamError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> UpstreamClient {
        UpstreamClient::new(&UpstreamConfig {
            primary_base_url: "https://primary.example/simpsons/".to_string(),
            fallback_base_url: "https://fallback.example".to_string(),
        })
    }

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let client = client();
        assert_eq!(
            client.primary_url(crate::upstream::CHARACTERS_PATH),
            "https://primary.example/simpsons/characters"
        );
        assert_eq!(
            client.fallback_url(crate::upstream::EPISODES_PATH),
            "https://fallback.example/episodes"
        );
    }
}
