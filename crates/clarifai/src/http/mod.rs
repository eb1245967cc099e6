//! HTTP request/response layer
//!
//! Resources build [`Request`]s; nothing touches the network until
//! [`Request::send`] is awaited.

pub use request::Request;
pub use response::Response;

mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
