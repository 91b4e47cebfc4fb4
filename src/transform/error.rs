//! Error taxonomy for a quote submission.
//!
//! All variants are terminal at the form: nothing is retried, and each one
//! maps to exactly one string shown to the user.

use thiserror::Error;

/// Shown when the quote is empty after trimming.
pub const VALIDATION_MESSAGE: &str = "Please enter a quote.";

/// Shown when the service failed without providing a message.
pub const SERVICE_FALLBACK_MESSAGE: &str = "Something went wrong.";

/// Shown when no usable response could be obtained.
pub const TRANSPORT_MESSAGE: &str = "Server connection failed.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Quote was empty after trimming. Never leaves the form.
    #[error("Quote is empty")]
    Validation,

    /// Service answered with a non-success status.
    #[error("Service error: {status} - {}", .message.as_deref().unwrap_or("no message"))]
    Service {
        status: u16,
        message: Option<String>,
    },

    /// Request could not be completed or the response was unusable.
    #[error("Transport error: {reason}")]
    Transport { reason: String },
}

impl TransformError {
    pub fn transport(reason: impl Into<String>) -> Self {
        TransformError::Transport {
            reason: reason.into(),
        }
    }

    /// The string displayed in the form's error slot.
    pub fn user_message(&self) -> &str {
        match self {
            TransformError::Validation => VALIDATION_MESSAGE,
            TransformError::Service {
                message: Some(message),
                ..
            } => message.as_str(),
            TransformError::Service { message: None, .. } => SERVICE_FALLBACK_MESSAGE,
            TransformError::Transport { .. } => TRANSPORT_MESSAGE,
        }
    }

    /// Short tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TransformError::Validation => "validation",
            TransformError::Service { .. } => "service",
            TransformError::Transport { .. } => "transport",
        }
    }
}

impl From<reqwest::Error> for TransformError {
    fn from(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else if err.is_body() || err.is_decode() {
            format!("failed to read response: {err}")
        } else {
            err.to_string()
        };
        TransformError::Transport { reason }
    }
}
