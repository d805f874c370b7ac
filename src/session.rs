//! Session store — the single owner of displayed state.
//!
//! Holds the current recommendation list (so a later selection can reference
//! an earlier list by position), the currently displayed path view, and a
//! monotonically increasing request token per logical view. A response is
//! applied only when it carries the latest token, so an older in-flight
//! response can never overwrite a newer one.

use std::sync::Arc;

use crate::api::Backend;
use crate::error::{Error, Result};
use crate::health::{self, ServiceStatus};
use crate::model::{ActivePath, JobRecommendation, StepTemplate, UserProfile};
use crate::path::{lifecycle, progress, resolver, Resolution};

/// What the path surface currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PathView {
    /// A fetched template offering a start action.
    Proposal {
        job_id: String,
        job_title: String,
        steps: Vec<StepTemplate>,
    },
    /// The user's own path, rendered stateful.
    Active(ActivePath),
    /// Another job's path is active; nothing can be started from here.
    Blocked { other_job_title: String },
}

/// Session-scoped state, owned by the controller layer and mutated only from
/// the single control thread.
pub struct Session {
    backend: Arc<dyn Backend>,
    user_id: Option<String>,
    recommendations: Vec<JobRecommendation>,
    view: Option<PathView>,
    rec_seq: u64,
    view_seq: u64,
}

impl Session {
    pub fn new(backend: Arc<dyn Backend>, user_id: Option<String>) -> Self {
        Self {
            backend,
            user_id: user_id.map(|id| id.trim().to_string()).filter(|id| !id.is_empty()),
            recommendations: Vec::new(),
            view: None,
            rec_seq: 0,
            view_seq: 0,
        }
    }

    /// Set or clear the caller-trusted user identifier.
    pub fn set_user_id(&mut self, id: &str) {
        let id = id.trim();
        self.user_id = (!id.is_empty()).then(|| id.to_string());
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn recommendations(&self) -> &[JobRecommendation] {
        &self.recommendations
    }

    pub fn view(&self) -> Option<&PathView> {
        self.view.as_ref()
    }

    /// One-shot startup availability probe.
    pub async fn check_health(&self) -> ServiceStatus {
        health::probe(self.backend.as_ref()).await
    }

    // ── Recommendations ─────────────────────────────────────────────

    /// Open a recommendation load: clears displayed results for the duration
    /// of the attempt and returns the token the response must carry.
    fn begin_recommendation_load(&mut self) -> u64 {
        self.rec_seq += 1;
        self.recommendations.clear();
        self.rec_seq
    }

    /// Apply a settled response. Returns false when a newer load has
    /// superseded this token; the stale result is dropped.
    fn apply_recommendations(&mut self, token: u64, recs: Vec<JobRecommendation>) -> bool {
        if token != self.rec_seq {
            tracing::debug!(token, current = self.rec_seq, "Dropping stale recommendation response");
            return false;
        }
        self.recommendations = recs;
        true
    }

    /// Request recommendations for a profile snapshot. Server order is kept
    /// as-is. Returns the number of cards to render.
    pub async fn load_recommendations(&mut self, profile: &UserProfile) -> Result<usize> {
        let token = self.begin_recommendation_load();
        let backend = Arc::clone(&self.backend);
        let recs = backend.recommendations(profile).await?;
        self.apply_recommendations(token, recs);
        Ok(self.recommendations.len())
    }

    // ── Path view ───────────────────────────────────────────────────

    fn begin_view_load(&mut self) -> u64 {
        self.view_seq += 1;
        self.view = None;
        self.view_seq
    }

    fn apply_view(&mut self, token: u64, view: PathView) -> bool {
        if token != self.view_seq {
            tracing::debug!(token, current = self.view_seq, "Dropping stale path view");
            return false;
        }
        self.view = Some(view);
        true
    }

    /// Open the path view for the card at 1-based `position`.
    ///
    /// Resolves the path state fresh, then either renders the active path,
    /// blocks on the other job, or fetches a proposal.
    pub async fn open_path(&mut self, position: usize) -> Result<&PathView> {
        let job = position
            .checked_sub(1)
            .and_then(|i| self.recommendations.get(i))
            .cloned()
            .ok_or(Error::UnknownSelection(position))?;

        let backend = Arc::clone(&self.backend);
        let user_id = self.user_id.clone();
        // Opening a view replaces whatever was shown; any failure below
        // leaves an error message, not a stale path.
        let token = self.begin_view_load();
        let resolution =
            resolver::resolve(backend.as_ref(), user_id.as_deref(), &job.job_id).await?;
        let view = match resolution {
            Resolution::ActiveOnSelectedJob(path) => PathView::Active(path),
            Resolution::ActiveOnOtherJob(path) => PathView::Blocked {
                other_job_title: path.job_title,
            },
            Resolution::NoActivePath => {
                let steps = lifecycle::propose(backend.as_ref(), &job.job_id).await?;
                PathView::Proposal {
                    job_id: job.job_id.clone(),
                    job_title: job.title.clone(),
                    steps,
                }
            }
        };

        self.apply_view(token, view);
        self.view.as_ref().ok_or(Error::NoPathOpen)
    }

    /// Start the currently proposed path. On success the proposal is
    /// discarded and replaced wholesale by the returned active path; on
    /// failure the proposal is not restored (the user may retry via a fresh
    /// `open_path`).
    pub async fn start_path(&mut self) -> Result<&ActivePath> {
        let user_id = self.user_id.clone().ok_or(Error::MissingUserId)?;
        let job_id = match &self.view {
            Some(PathView::Proposal { job_id, .. }) => job_id.clone(),
            _ => return Err(Error::NoProposal),
        };

        let backend = Arc::clone(&self.backend);
        let token = self.begin_view_load();
        let path = lifecycle::start(backend.as_ref(), &user_id, &job_id).await?;
        self.apply_view(token, PathView::Active(path));

        match &self.view {
            Some(PathView::Active(path)) => Ok(path),
            _ => Err(Error::NoPathOpen),
        }
    }

    /// Toggle one step of the open active path. Returns the server's new
    /// progress percentage.
    pub async fn toggle_step(&mut self, step_number: u32, completed: bool) -> Result<u8> {
        let backend = Arc::clone(&self.backend);
        let Some(PathView::Active(path)) = self.view.as_mut() else {
            return Err(Error::NoPathOpen);
        };
        progress::toggle(backend.as_ref(), path, step_number, completed).await
    }
}
