//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the HRM client against a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every request carries the `orangehrm=test-session` cookie unless a test
//!   builds its own session

// Re-export test utilities from hrm-client
#[allow(unused_imports)]
pub use hrm_client::testing::{load_fixture, load_text_fixture};

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use hrm_client::{HrmClient, SessionCookie, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// API v2 prefix as mounted on the mock server.
#[allow(dead_code)]
pub const API: &str = "/web/index.php/api/v2";

/// Cookie header every authenticated request is expected to send.
#[allow(dead_code)]
pub const SESSION_HEADER: &str = "orangehrm=test-session";

/// A client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> HrmClient {
    HrmClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build against the mock server")
}

/// The session cookie used by authenticated tests.
#[allow(dead_code)]
pub fn session() -> SessionCookie {
    SessionCookie::new(secrecy::SecretString::new(
        "test-session".to_string().into(),
    ))
}

/// `API` joined with a resource path.
#[allow(dead_code)]
pub fn api(resource: &str) -> String {
    format!("{}{}", API, resource)
}
