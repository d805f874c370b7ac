//! Path resolver — decides which of the three path states applies before
//! anything is rendered.
//!
//! Evaluated fresh on every "view path" action. The outcome is never cached:
//! another path may have been started or completed since the last check.

use crate::api::Backend;
use crate::error::{Error, Result};
use crate::model::ActivePath;

/// Outcome of resolving a selected job against the user's current path.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The user has no active path; a proposal may be fetched and a start
    /// action offered.
    NoActivePath,
    /// The user is already on a path for a different job. Blocking: no
    /// template fetch, no start action, regardless of the selected job.
    ActiveOnOtherJob(ActivePath),
    /// The user's active path is for the selected job; it is rendered
    /// verbatim and the template endpoint is never touched.
    ActiveOnSelectedJob(ActivePath),
}

/// Resolve the path state for `job_id`.
///
/// A missing or blank user id is a precondition failure caught before any
/// network call. A transport failure on the active-path query is terminal
/// for this view; the caller surfaces it and offers no further action.
pub async fn resolve(
    backend: &dyn Backend,
    user_id: Option<&str>,
    job_id: &str,
) -> Result<Resolution> {
    let user_id = user_id.map(str::trim).filter(|id| !id.is_empty());
    let Some(user_id) = user_id else {
        return Err(Error::MissingUserId);
    };

    let resolution = match backend.active_path(user_id).await? {
        None => Resolution::NoActivePath,
        Some(path) if path.job_id == job_id => Resolution::ActiveOnSelectedJob(path),
        Some(path) => Resolution::ActiveOnOtherJob(path),
    };

    let state = match &resolution {
        Resolution::NoActivePath => "no_active_path",
        Resolution::ActiveOnOtherJob(_) => "active_on_other_job",
        Resolution::ActiveOnSelectedJob(_) => "active_on_selected_job",
    };
    tracing::debug!(user_id, job_id, state, "Resolved path state");
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::ApiError;
    use crate::model::{JobRecommendation, StepStatus, StepTemplate, UserProfile};

    /// Stub backend with a canned active-path answer and call counters.
    struct StubBackend {
        active_path: std::result::Result<Option<ActivePath>, String>,
        path_queries: AtomicUsize,
        template_queries: AtomicUsize,
    }

    impl StubBackend {
        fn with_path(path: Option<ActivePath>) -> Self {
            Self {
                active_path: Ok(path),
                path_queries: AtomicUsize::new(0),
                template_queries: AtomicUsize::new(0),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                active_path: Err(reason.to_string()),
                path_queries: AtomicUsize::new(0),
                template_queries: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Backend for StubBackend {
        async fn health(&self) -> std::result::Result<(), ApiError> {
            unimplemented!("not used in resolver tests")
        }

        async fn recommendations(
            &self,
            _profile: &UserProfile,
        ) -> std::result::Result<Vec<JobRecommendation>, ApiError> {
            unimplemented!("not used in resolver tests")
        }

        async fn active_path(
            &self,
            _user_id: &str,
        ) -> std::result::Result<Option<ActivePath>, ApiError> {
            self.path_queries.fetch_add(1, Ordering::SeqCst);
            match &self.active_path {
                Ok(path) => Ok(path.clone()),
                Err(reason) => Err(ApiError::Transport {
                    endpoint: "/users/u1/paths".into(),
                    reason: reason.clone(),
                }),
            }
        }

        async fn path_template(
            &self,
            _job_id: &str,
        ) -> std::result::Result<Vec<StepTemplate>, ApiError> {
            self.template_queries.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn start_path(
            &self,
            _user_id: &str,
            _job_id: &str,
        ) -> std::result::Result<ActivePath, ApiError> {
            unimplemented!("not used in resolver tests")
        }

        async fn update_step(
            &self,
            _path_id: &str,
            _step_number: u32,
            _status: StepStatus,
        ) -> std::result::Result<ActivePath, ApiError> {
            unimplemented!("not used in resolver tests")
        }
    }

    fn sample_path(job_id: &str) -> ActivePath {
        ActivePath {
            id: "path-1".into(),
            job_id: job_id.into(),
            job_title: "Data Engineer".into(),
            progress_percentage: 40,
            steps: vec![],
        }
    }

    #[tokio::test]
    async fn missing_user_id_fails_before_any_network_call() {
        let backend = StubBackend::with_path(None);

        let err = resolve(&backend, None, "j1").await.unwrap_err();
        assert!(matches!(err, Error::MissingUserId));

        let err = resolve(&backend, Some("   "), "j1").await.unwrap_err();
        assert!(matches!(err, Error::MissingUserId));

        assert_eq!(backend.path_queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn no_active_path_yields_proposal_state() {
        let backend = StubBackend::with_path(None);
        let resolution = resolve(&backend, Some("u1"), "j1").await.unwrap();
        assert_eq!(resolution, Resolution::NoActivePath);
    }

    #[tokio::test]
    async fn matching_job_yields_stateful_path_verbatim() {
        let path = sample_path("j1");
        let backend = StubBackend::with_path(Some(path.clone()));

        let resolution = resolve(&backend, Some("u1"), "j1").await.unwrap();
        assert_eq!(resolution, Resolution::ActiveOnSelectedJob(path));
        // Template endpoint is never touched for an active match.
        assert_eq!(backend.template_queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn other_job_blocks_without_template_fetch() {
        let other = sample_path("j2");
        let backend = StubBackend::with_path(Some(other.clone()));

        let resolution = resolve(&backend, Some("u1"), "j1").await.unwrap();
        assert_eq!(resolution, Resolution::ActiveOnOtherJob(other));
        assert_eq!(backend.template_queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn query_failure_is_terminal_for_the_view() {
        let backend = StubBackend::failing("connection refused");
        let err = resolve(&backend, Some("u1"), "j1").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Transport { .. })));
    }

    #[tokio::test]
    async fn resolution_is_not_cached_across_invocations() {
        // Same inputs, fresh query each time.
        let backend = StubBackend::with_path(None);
        resolve(&backend, Some("u1"), "j1").await.unwrap();
        resolve(&backend, Some("u1"), "j1").await.unwrap();
        assert_eq!(backend.path_queries.load(Ordering::SeqCst), 2);
    }
}
