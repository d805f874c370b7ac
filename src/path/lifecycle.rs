//! Path lifecycle — proposal fetch and path start.
//!
//! `start` is only reachable after the resolver reports no active path. The
//! client performs no duplicate prevention of its own; "at most one active
//! path per user" is the backend's invariant, and whatever path the backend
//! returns is accepted as-is.

use crate::api::Backend;
use crate::error::Result;
use crate::model::{ActivePath, StepTemplate};

/// Fetch the read-only path template for a job.
///
/// Failure surfaces the underlying message as a path-error; the caller
/// renders the steps non-interactive, numbered, with recommended courses.
pub async fn propose(backend: &dyn Backend, job_id: &str) -> Result<Vec<StepTemplate>> {
    let steps = backend.path_template(job_id).await?;
    tracing::debug!(job_id, steps = steps.len(), "Fetched path proposal");
    Ok(steps)
}

/// Start a path for the job and hand back the server's new active path.
///
/// On success the caller discards the proposal entirely and renders the
/// returned path in stateful mode. On failure the proposal is not restored
/// automatically; the user may retry.
pub async fn start(backend: &dyn Backend, user_id: &str, job_id: &str) -> Result<ActivePath> {
    let path = backend.start_path(user_id, job_id).await?;
    tracing::info!(
        user_id,
        job_id,
        path_id = %path.id,
        progress = path.progress_percentage,
        "Learning path started"
    );
    Ok(path)
}
