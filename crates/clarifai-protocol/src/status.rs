//! Service status and the reply envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::input::Input;

/// Status block attached to replies and to individual inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Numeric status code (see [`codes`])
    pub code: u32,

    /// Short human-readable description
    #[serde(default)]
    pub description: String,

    /// Extra detail, mostly present on failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ServiceStatus {
    /// Whether the code reports full success.
    pub fn is_success(&self) -> bool {
        self.code == codes::SUCCESS
    }
}

/// Status codes the inputs endpoints report.
pub mod codes {
    /// Request fully succeeded
    pub const SUCCESS: u32 = 10000;
    /// Some items of a batch failed
    pub const MIXED_STATUS: u32 = 10010;
    /// Image downloaded
    pub const INPUT_DOWNLOAD_SUCCESS: u32 = 30000;
    /// Image download queued
    pub const INPUT_DOWNLOAD_PENDING: u32 = 30001;
    /// Image download failed
    pub const INPUT_DOWNLOAD_FAILED: u32 = 30002;
    /// Image download running
    pub const INPUT_DOWNLOAD_IN_PROGRESS: u32 = 30003;
}

/// Generic reply envelope.
///
/// Every field besides `status` is optional; endpoints fill in the ones
/// relevant to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Outcome of the request
    pub status: ServiceStatus,

    /// Inputs returned by list/add/patch calls
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<Input>,

    /// Single input returned by a get call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Input>,

    /// Aggregate processing counts returned by the status call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<Value>,

    /// Prediction outputs, left untyped
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_reply() {
        let reply: ApiResponse = serde_json::from_value(json!({
            "status": {"code": 10000, "description": "Ok"},
            "inputs": [
                {"id": "a", "data": {"image": {"url": "https://example.com/a.jpg"}}},
                {"id": "b", "data": {"image": {"url": "https://example.com/b.jpg"}}}
            ]
        }))
        .unwrap();

        assert!(reply.status.is_success());
        assert_eq!(reply.inputs.len(), 2);
        assert!(reply.input.is_none());
    }

    #[test]
    fn test_status_counts_reply() {
        let reply: ApiResponse = serde_json::from_value(json!({
            "status": {"code": 10000, "description": "Ok"},
            "counts": {"processed": 12, "to_process": 0, "errors": 1}
        }))
        .unwrap();

        assert_eq!(reply.counts.unwrap()["processed"], 12);
    }

    #[test]
    fn test_failure_status() {
        let status: ServiceStatus = serde_json::from_value(json!({
            "code": 30002,
            "description": "Download failed",
            "details": "404 fetching image"
        }))
        .unwrap();

        assert!(!status.is_success());
        assert_eq!(status.code, codes::INPUT_DOWNLOAD_FAILED);
        assert_eq!(status.details.as_deref(), Some("404 fetching image"));
    }
}
