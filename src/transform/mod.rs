//! Typed boundary to the remote quote transformation service.
//!
//! The service accepts `{quote, style}` and answers either
//! `{transformed_quote}` or `{error}`. Everything the rest of the crate
//! knows about that contract lives here:
//!
//! - [`Style`]: the tone tag sent with every request
//! - [`TransformRequest`]: the outbound JSON body
//! - [`ServiceReply`]: the tagged reply built at the parse boundary
//! - [`TransformError`]: validation, service and transport failures
//! - [`strip_emphasis`]: markdown clean-up applied before display

mod client;
mod error;
mod markdown;
mod reply;
mod style;

pub use client::TransformClient;
pub use error::{
    TransformError, SERVICE_FALLBACK_MESSAGE, TRANSPORT_MESSAGE, VALIDATION_MESSAGE,
};
pub use markdown::strip_emphasis;
pub use reply::ServiceReply;
pub use style::{Style, StyleParseError};

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Outbound request body.
///
/// The quote is sent exactly as typed; trimming only decides whether a
/// request is issued at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformRequest {
    pub quote: String,
    pub style: Style,
}

impl TransformRequest {
    /// Build a request, rejecting quotes that are empty after trimming.
    ///
    /// A byte-order mark counts as blank, alongside Unicode whitespace.
    pub fn new(quote: impl Into<String>, style: Style) -> Result<Self, TransformError> {
        let quote = quote.into();
        if quote.trim_matches(is_blank).is_empty() {
            return Err(TransformError::Validation);
        }
        Ok(Self { quote, style })
    }
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Identifies one submission so its completion can be matched and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
