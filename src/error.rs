//! Error types for skillpath.

/// Top-level error type for the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Please enter a user ID to manage learning paths")]
    MissingUserId,

    #[error("No recommendation at position {0}")]
    UnknownSelection(usize),

    #[error("No proposed path to start — open a recommendation first")]
    NoProposal,

    #[error("No active path is open")]
    NoPathOpen,

    #[error("Step {0} is not part of the current path")]
    UnknownStep(u32),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Backend request errors.
///
/// Non-2xx responses carry the server's `detail` string when it sent one,
/// otherwise a per-operation fallback message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: String },

    #[error("Request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

impl ApiError {
    /// HTTP status code for `Status` errors, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for the client.
pub type Result<T> = std::result::Result<T, Error>;
