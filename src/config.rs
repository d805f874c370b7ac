//! Configuration types.

use std::time::Duration;

/// Default backend base URL (matches the service's local dev port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8040/api/v1/ai";

/// Default per-request timeout. The backend can otherwise hang a request
/// indefinitely, which is not an acceptable contract for a client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the recommendation service, without a trailing slash.
    pub base_url: String,
    /// Bound applied to every request.
    pub request_timeout: Duration,
    /// Opaque user identifier for path operations. Free text, caller-trusted,
    /// never validated — absence only blocks path views, not recommendations.
    pub user_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_id: None,
        }
    }
}

impl ClientConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// - `SKILLPATH_BASE_URL` — backend base URL
    /// - `SKILLPATH_TIMEOUT_SECS` — per-request timeout in seconds
    /// - `SKILLPATH_USER_ID` — initial user identifier
    pub fn from_env() -> Self {
        let base_url = std::env::var("SKILLPATH_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = std::env::var("SKILLPATH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let user_id = std::env::var("SKILLPATH_USER_ID")
            .ok()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        Self {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.user_id.is_none());
    }
}
