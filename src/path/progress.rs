//! Step progress tracking and reconciliation.
//!
//! The displayed percentage is always the server's last-returned aggregate;
//! the client never recomputes it from step statuses. On a failed update the
//! step's local status rolls back to the last server-confirmed value and the
//! error is surfaced — the observed web client instead left the toggle
//! unsynchronized until the next reload (see DESIGN.md).

use crate::api::Backend;
use crate::error::{Error, Result};
use crate::model::{ActivePath, StepStatus};

/// Set one step's completion state and reconcile the whole path from the
/// server's response.
///
/// Returns the server's new progress percentage on success.
pub async fn toggle(
    backend: &dyn Backend,
    path: &mut ActivePath,
    step_number: u32,
    completed: bool,
) -> Result<u8> {
    let target = if completed {
        StepStatus::Completed
    } else {
        StepStatus::Pending
    };

    let step = path
        .steps
        .iter_mut()
        .find(|s| s.step_number == step_number)
        .ok_or(Error::UnknownStep(step_number))?;
    let prior = step.status;
    // Optimistic: flip locally while the request is in flight.
    step.status = target;

    match backend.update_step(&path.id, step_number, target).await {
        Ok(updated) => {
            // The response replaces the client copy wholesale: statuses and
            // aggregate percentage come from the server, never from local
            // arithmetic.
            *path = updated;
            Ok(path.progress_percentage)
        }
        Err(e) => {
            if let Some(step) = path.steps.iter_mut().find(|s| s.step_number == step_number) {
                step.status = prior;
            }
            Err(e.into())
        }
    }
}
