//! Structured logging for outgoing requests
//!
//! Every request sent through [`Request::send`](crate::http::Request::send)
//! is logged here, so the field names stay consistent.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Path relative to the API base
    pub path: String,
    /// Request body size in bytes, if a body is sent
    pub body_size: Option<usize>,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body_size: None,
        }
    }

    /// Set the request body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            method = %self.method,
            path = %self.path,
            body_size = self.body_size,
            "Sending Clarifai request"
        );
    }
}

/// Response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes
    pub body_size: usize,
    /// Time elapsed for the request
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, body_size: usize, elapsed: Duration) -> Self {
        Self {
            status,
            body_size,
            elapsed,
        }
    }

    /// Log at `info` for success statuses and `warn` otherwise.
    pub fn log(&self, request: &RequestMetadata) {
        if (200..300).contains(&self.status) {
            info!(
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "Clarifai request succeeded"
            );
        } else {
            warn!(
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "Clarifai request failed"
            );
        }
    }
}

/// Log a transport-level failure (no HTTP status received).
pub fn log_transport_error(request: &RequestMetadata, elapsed: Duration, error: &str) {
    warn!(
        method = %request.method,
        path = %request.path,
        elapsed_ms = elapsed.as_millis(),
        error = %error,
        "Clarifai request could not be sent"
    );
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Install a `tracing` subscriber that honors `RUST_LOG`.
///
/// Falls back to `clarifai=info` when `RUST_LOG` is unset. Calling it more
/// than once is harmless; later calls are ignored.
#[cfg(feature = "trace")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clarifai=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
