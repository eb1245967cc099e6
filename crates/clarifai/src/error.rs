//! Error types for the Clarifai client
//!
//! Local failures (a full batch, a bad base URL) and remote failures (HTTP
//! error statuses, transport problems) share one `thiserror` enum.

use std::time::Duration;

use clarifai_protocol::{ProtocolError, ServiceStatus};
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Clarifai client.
#[derive(Debug, Error)]
pub enum Error {
    /// API rejected the request (400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Description from the API
        message: String,
        /// Clarifai status code, if the body carried one
        code: Option<u32>,
    },

    /// API key missing or invalid (401).
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// API key lacks the required scope (403).
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Too many requests (429).
    #[error("Rate limit exceeded")]
    RateLimit {
        /// Time to wait before trying again, if the API said so
        retry_after: Option<Duration>,
    },

    /// Server-side failure (500+).
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    /// Any other non-success status.
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Description from the API or the raw body
        message: String,
        /// Clarifai status code, if the body carried one
        code: Option<u32>,
    },

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// A path segment that would not address a single resource.
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// A payload could not be assembled.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl Error {
    /// Create an API error from an HTTP response status and body.
    ///
    /// Clarifai wraps failures in `{"status": {"code", "description", "details"}}`;
    /// when the body is not in that shape the raw text is used as the message.
    pub fn from_response(status: u16, body: &str, headers: &http::HeaderMap) -> Self {
        let (message, code) = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => (describe(&envelope.status), Some(envelope.status.code)),
            Err(_) => (body.to_string(), None),
        };

        match status {
            400 => Error::BadRequest { message, code },
            401 => Error::Authentication(message),
            403 => Error::PermissionDenied(message),
            404 => Error::NotFound(message),
            429 => Error::RateLimit {
                retry_after: headers
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs),
            },
            s if s >= 500 => Error::InternalServerError(message),
            _ => Error::ApiError {
                status,
                message,
                code,
            },
        }
    }

    /// Clarifai status code carried by the error, if any.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            Error::BadRequest { code, .. } | Error::ApiError { code, .. } => *code,
            _ => None,
        }
    }

    /// Whether this is the local batch-capacity error.
    pub fn is_input_limit(&self) -> bool {
        matches!(self, Error::Protocol(ProtocolError::InputLimitReached { .. }))
    }
}

#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    status: ServiceStatus,
}

fn describe(status: &ServiceStatus) -> String {
    match &status.details {
        Some(details) if !details.is_empty() => format!("{}: {}", status.description, details),
        _ => status.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_error_400_with_status_envelope() {
        let body = r#"{"status":{"code":11102,"description":"Invalid request","details":"Empty or malformed JSON"}}"#;
        let error = Error::from_response(400, body, &http::HeaderMap::new());

        assert_matches!(error, Error::BadRequest { ref message, code: Some(11102) } => {
            assert_eq!(message, "Invalid request: Empty or malformed JSON");
        });
        assert_eq!(error.status_code(), Some(11102));
    }

    #[test]
    fn test_error_401_authentication() {
        let body = r#"{"status":{"code":11009,"description":"API key not found"}}"#;
        let error = Error::from_response(401, body, &http::HeaderMap::new());
        assert_matches!(error, Error::Authentication(msg) if msg == "API key not found");
    }

    #[test]
    fn test_error_404_not_found() {
        let body = r#"{"status":{"code":40002,"description":"Input does not exist"}}"#;
        let error = Error::from_response(404, body, &http::HeaderMap::new());
        assert_matches!(error, Error::NotFound(msg) if msg == "Input does not exist");
    }

    #[test]
    fn test_error_429_retry_after() {
        let mut headers = http::HeaderMap::new();
        headers.insert("retry-after", "30".parse().unwrap());

        let error = Error::from_response(429, "", &headers);
        assert_matches!(error, Error::RateLimit { retry_after: Some(d) } if d == Duration::from_secs(30));
    }

    #[test]
    fn test_error_plain_text_fallback() {
        let error = Error::from_response(502, "Bad Gateway", &http::HeaderMap::new());
        assert_matches!(error, Error::InternalServerError(msg) if msg == "Bad Gateway");
    }

    #[test]
    fn test_error_other_status() {
        let body = r#"{"status":{"code":10020,"description":"Conflict"}}"#;
        let error = Error::from_response(409, body, &http::HeaderMap::new());
        assert_matches!(
            error,
            Error::ApiError { status: 409, code: Some(10020), .. }
        );
    }

    #[test]
    fn test_protocol_error_conversion() {
        let error: Error = ProtocolError::InputLimitReached { limit: 128 }.into();
        assert!(error.is_input_limit());
        assert!(error.to_string().contains("128"));
    }
}
