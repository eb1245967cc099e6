//! API resource endpoints
//!
//! Each resource turns domain verbs into [`Request`](crate::http::Request)s.
//! Nothing is sent until the caller awaits `send`/`send_json`.

pub mod inputs;
pub mod models;

pub use inputs::InputsApi;
pub use models::ModelsApi;
