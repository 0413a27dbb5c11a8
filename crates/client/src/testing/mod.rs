//! Testing utilities for HRM client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use hrm_client::testing::{load_fixture, raw_fixture};
//!
//! let body = load_fixture("leave/holidays.json");
//! let raw = raw_fixture("pim/employee_count.json");
//! ```

use std::path::Path;

use crate::response::RawResponse;

fn fixture_path(fixture_path: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let content = load_text_fixture(fixture_path);
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture file verbatim, for non-JSON bodies such as HTML pages.
///
/// # Panics
/// If the fixture file cannot be read.
pub fn load_text_fixture(fixture_path: &str) -> String {
    let full_path = self::fixture_path(fixture_path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// Wrap a JSON fixture in a `200` [`RawResponse`].
pub fn raw_fixture(fixture_path: &str) -> RawResponse {
    RawResponse::from_json(200, &load_fixture(fixture_path))
}
