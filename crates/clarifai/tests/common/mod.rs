//! Common test utilities and helpers

use std::path::Path;

use clarifai::Session;
use wiremock::MockServer;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Create a test API key
#[allow(dead_code)]
pub fn test_api_key() -> String {
    "test-key-0123456789abcdef".to_string()
}

/// Expected `Authorization` header for [`test_api_key`]
#[allow(dead_code)]
pub fn auth_header() -> String {
    format!("Key {}", test_api_key())
}

/// Session pointed at a mock server
#[allow(dead_code)]
pub fn session_for(server: &MockServer) -> Session {
    Session::builder()
        .api_key(test_api_key())
        .base_url(server.uri())
        .build()
        .expect("Failed to build session")
}
