//! Client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the run client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Versioned API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static access token sent with every request.
    #[serde(default)]
    pub token: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://app.rainforestqa.com/api/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Create a config with the given token and default everything else.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `RAINFOREST_API_URL` | API base URL |
    /// | `RAINFOREST_CLIENT_TOKEN` | Access token |
    /// | `RAINFOREST_TIMEOUT` | Request timeout in seconds |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("RAINFOREST_API_URL").unwrap_or_else(|_| default_base_url()),
            token: std::env::var("RAINFOREST_CLIENT_TOKEN").unwrap_or_default(),
            timeout_secs: std::env::var("RAINFOREST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://app.rainforestqa.com/api/1");
        assert!(config.token.is_empty());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::default()
            .with_url("https://staging.rainforestqa.com/api/1")
            .with_token("my-token")
            .with_timeout(5);

        assert_eq!(config.base_url, "https://staging.rainforestqa.com/api/1");
        assert_eq!(config.token, "my-token");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear env vars
        std::env::remove_var("RAINFOREST_API_URL");
        std::env::remove_var("RAINFOREST_CLIENT_TOKEN");
        std::env::remove_var("RAINFOREST_TIMEOUT");

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "https://app.rainforestqa.com/api/1");
        assert!(config.token.is_empty());
        assert_eq!(config.timeout_secs, 30);
    }
}
