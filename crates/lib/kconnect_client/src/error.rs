//! Client error types.

use thiserror::Error;

use kconnect_core::auth::AuthError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, TLS, body read, JSON decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication required: {0}")]
    Unauthorized(String),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status.
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credential could not be decoded.
    #[error("Token error: {0}")]
    Token(#[from] AuthError),

    /// Cookie jar could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// One department's reports failed; the whole dashboard aggregation fails.
    #[error("Aggregation failed for department {department_id}: {source}")]
    Aggregation {
        department_id: i64,
        #[source]
        source: Box<ClientError>,
    },

    /// A spawned fetch panicked or was aborted.
    #[error("Task failed: {0}")]
    Task(String),

    /// The owning view was torn down before the call finished.
    #[error("Cancelled")]
    Cancelled,
}

impl ClientError {
    /// Cancellation is benign and must not be reported as a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }

    /// The backend rejected the credential (missing, tampered or expired).
    pub fn is_unauthorized(&self) -> bool {
        match self {
            ClientError::Unauthorized(_) => true,
            ClientError::Aggregation { source, .. } => source.is_unauthorized(),
            _ => false,
        }
    }
}
