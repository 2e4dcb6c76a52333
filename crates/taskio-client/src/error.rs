//! Error taxonomy for task service calls.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced by [`TaskClient`](crate::TaskClient) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a failure status.
    #[error("{message}")]
    Api {
        /// HTTP status code reported by the server.
        status: u16,
        /// Server-supplied message, or a status-derived fallback.
        message: String,
    },
    /// The request never completed (network unreachable, timed out, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The status was successful but the body was not the expected JSON.
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Status code of a server-reported failure, if that is what this is.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Json(_) => None,
        }
    }
}

/// Failure payload the service attaches to error responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Convert a non-success response into [`ClientError::Api`], preferring the
/// server-supplied message over the status-derived fallback.
pub(crate) async fn from_response(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| fallback_message(status)),
        Err(_) => fallback_message(status),
    };
    warn!(status, %message, "task service reported an error");
    ClientError::Api { status, message }
}

fn fallback_message(status: u16) -> String {
    format!("task service returned status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_expose_their_status() {
        let err = ClientError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn decode_errors_have_no_status() {
        let Err(source) = serde_json::from_str::<ErrorBody>("not json") else {
            panic!("expected a decode failure");
        };
        let err = ClientError::from(source);
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("malformed response body"));
    }
}
