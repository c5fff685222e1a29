//! Reconciler error types

use shared::SharedError;
use thiserror::Error;

/// Result type for reconciler operations
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Reconciler error types
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Transport failure calling {url}: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP {status} from {url}: {body}")]
    HttpStatus { url: String, status: u16, body: String },

    #[error("Unexpected response shape: {message}")]
    DataShape { message: String },

    #[error("Invalid invocation event: {field} {reason}")]
    InvalidEvent { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] SharedError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReconcileError {
    pub fn transport(url: &str, error: impl std::fmt::Display) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: error.to_string(),
        }
    }

    pub fn data_shape(message: impl Into<String>) -> Self {
        Self::DataShape {
            message: message.into(),
        }
    }

    pub fn invalid_event(field: &str, reason: &str) -> Self {
        Self::InvalidEvent {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for network failures and non-success HTTP statuses
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. })
    }
}
