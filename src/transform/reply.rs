use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::transform::error::TransformError;

/// Reply from the transform service, decided once at the parse boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceReply {
    Success { transformed_quote: String },
    /// Non-success status. `message` is the payload's `error` field, if it
    /// carried a non-empty string.
    Failure { message: Option<String> },
}

#[derive(Deserialize)]
struct SuccessBody {
    transformed_quote: String,
}

impl ServiceReply {
    /// Classify a raw HTTP response.
    ///
    /// A body that is not JSON, or a success body without a string
    /// `transformed_quote`, is a transport error: the response is unusable.
    pub fn parse(status: StatusCode, body: &[u8]) -> Result<Self, TransformError> {
        if status.is_success() {
            let parsed: SuccessBody = serde_json::from_slice(body).map_err(|err| {
                TransformError::transport(format!("malformed success response: {err}"))
            })?;
            return Ok(ServiceReply::Success {
                transformed_quote: parsed.transformed_quote,
            });
        }

        let value: Value = serde_json::from_slice(body).map_err(|err| {
            TransformError::transport(format!(
                "malformed error response (status {}): {err}",
                status.as_u16()
            ))
        })?;
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string);
        Ok(ServiceReply::Failure { message })
    }

    /// Collapse into the text to display or the error to surface.
    pub fn into_result(self, status: StatusCode) -> Result<String, TransformError> {
        match self {
            ServiceReply::Success { transformed_quote } => Ok(transformed_quote),
            ServiceReply::Failure { message } => Err(TransformError::Service {
                status: status.as_u16(),
                message,
            }),
        }
    }
}
