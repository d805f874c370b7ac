//! One-shot service health probe.

use crate::api::Backend;

/// Binary availability indicator shown at startup.
///
/// Purely informational: other components always attempt their own requests
/// regardless of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Online,
    Offline,
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Online => "Service Online",
            Self::Offline => "Service Offline",
        };
        write!(f, "{s}")
    }
}

/// Probe the health endpoint once. Any failure, transport or non-2xx alike,
/// reads as offline; there are no retries.
pub async fn probe(backend: &dyn Backend) -> ServiceStatus {
    match backend.health().await {
        Ok(()) => ServiceStatus::Online,
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            ServiceStatus::Offline
        }
    }
}
