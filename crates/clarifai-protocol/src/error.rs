//! Error types for building protocol payloads

use thiserror::Error;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors raised while assembling a payload, before anything touches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The batch already holds the maximum number of inputs.
    #[error("Input limit reached: a batch holds at most {limit} inputs")]
    InputLimitReached {
        /// The capacity that was hit.
        limit: usize,
    },
}
