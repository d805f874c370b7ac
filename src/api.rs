//! HTTP client for the recommendation service.
//!
//! `Backend` is the seam the core path logic runs against; `ApiClient` is the
//! reqwest implementation speaking the service's JSON wire format.

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError};
use crate::model::{
    ActivePath, ErrorBody, JobRecommendation, PathTemplate, RecommendationSet, StepStatus,
    StepTemplate, UserProfile,
};

/// The backend operations the client consumes.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /health` — any 2xx means the service is up.
    async fn health(&self) -> Result<(), ApiError>;

    /// `POST /recommendations` — ranked best-first by the server; the client
    /// must not re-sort.
    async fn recommendations(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<JobRecommendation>, ApiError>;

    /// `GET /users/{user_id}/paths` — the user's current active path, if any.
    async fn active_path(&self, user_id: &str) -> Result<Option<ActivePath>, ApiError>;

    /// `GET /jobs/{job_id}/learning-path` — the read-only path template.
    async fn path_template(&self, job_id: &str) -> Result<Vec<StepTemplate>, ApiError>;

    /// `POST /users/{user_id}/paths?job_id=…` — start a path for the job.
    async fn start_path(&self, user_id: &str, job_id: &str) -> Result<ActivePath, ApiError>;

    /// `PATCH /paths/{path_id}/steps/{n}?status=…` — set one step's status.
    /// The response is the full updated path with the server's aggregate
    /// progress percentage.
    async fn update_step(
        &self,
        path_id: &str,
        step_number: u32,
        status: StepStatus,
    ) -> Result<ActivePath, ApiError>;
}

/// Reqwest-backed client. Cheap to clone; every request carries the
/// configured timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a reqwest send error, keeping timeouts distinct.
    fn send_error(endpoint: &str, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            ApiError::Transport {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
        }
    }

    /// Turn a non-2xx response into a `Status` error, preferring the
    /// server's `detail` string over the operation's fallback message.
    async fn status_error(resp: reqwest::Response, fallback: &str) -> ApiError {
        let status = resp.status().as_u16();
        let detail = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .filter(|d| !d.trim().is_empty());
        ApiError::Status {
            status,
            message: detail.unwrap_or_else(|| fallback.to_string()),
        }
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::InvalidResponse {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn health(&self) -> Result<(), ApiError> {
        let endpoint = "/health";
        let resp = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| Self::send_error(endpoint, e))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: resp.status().as_u16(),
                message: format!("Health check returned {}", resp.status()),
            })
        }
    }

    async fn recommendations(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<JobRecommendation>, ApiError> {
        let endpoint = "/recommendations";
        tracing::debug!(
            skills = profile.skills.len(),
            interests = profile.interests.len(),
            "Requesting recommendations"
        );

        let resp = self
            .http
            .post(self.url(endpoint))
            .json(profile)
            .send()
            .await
            .map_err(|e| Self::send_error(endpoint, e))?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp, "Failed to get recommendations.").await);
        }

        let set: RecommendationSet = Self::parse(resp, endpoint).await?;
        Ok(set.recommendations)
    }

    async fn active_path(&self, user_id: &str) -> Result<Option<ActivePath>, ApiError> {
        let endpoint = format!("/users/{user_id}/paths");
        let resp = self
            .http
            .get(self.url(&endpoint))
            .send()
            .await
            .map_err(|e| Self::send_error(&endpoint, e))?;

        // No active path comes back as 404 or an empty/null 2xx body.
        if resp.status().as_u16() == 404 {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(Self::status_error(resp, "Failed to look up your active path.").await);
        }

        let text = resp.text().await.map_err(|e| ApiError::InvalidResponse {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        })?;
        if text.trim().is_empty() || text.trim() == "null" {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ApiError::InvalidResponse {
                endpoint,
                reason: e.to_string(),
            })
    }

    async fn path_template(&self, job_id: &str) -> Result<Vec<StepTemplate>, ApiError> {
        let endpoint = format!("/jobs/{job_id}/learning-path");
        let resp = self
            .http
            .get(self.url(&endpoint))
            .send()
            .await
            .map_err(|e| Self::send_error(&endpoint, e))?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp, "Could not fetch path template.").await);
        }

        let template: PathTemplate = Self::parse(resp, &endpoint).await?;
        Ok(template.path)
    }

    async fn start_path(&self, user_id: &str, job_id: &str) -> Result<ActivePath, ApiError> {
        let endpoint = format!("/users/{user_id}/paths");
        tracing::info!(user_id, job_id, "Starting learning path");

        let resp = self
            .http
            .post(self.url(&endpoint))
            .query(&[("job_id", job_id)])
            .send()
            .await
            .map_err(|e| Self::send_error(&endpoint, e))?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp, "Failed to start path.").await);
        }

        Self::parse(resp, &endpoint).await
    }

    async fn update_step(
        &self,
        path_id: &str,
        step_number: u32,
        status: StepStatus,
    ) -> Result<ActivePath, ApiError> {
        let endpoint = format!("/paths/{path_id}/steps/{step_number}");
        tracing::debug!(path_id, step_number, %status, "Updating step status");

        let resp = self
            .http
            .patch(self.url(&endpoint))
            .query(&[("status", status.to_string())])
            .send()
            .await
            .map_err(|e| Self::send_error(&endpoint, e))?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp, "Failed to update step.").await);
        }

        Self::parse(resp, &endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ClientConfig {
            base_url: base.to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn url_joins_without_double_slash() {
        let api = client("http://localhost:8040/api/v1/ai/");
        assert_eq!(
            api.url("/health"),
            "http://localhost:8040/api/v1/ai/health"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Reserved TEST-NET-1 address; nothing listens there.
        let api = client("http://192.0.2.1:1");
        let err = api.health().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Transport { .. } | ApiError::Timeout { .. }
        ));
    }
}
