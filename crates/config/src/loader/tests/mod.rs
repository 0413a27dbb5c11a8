//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test environment variable handling and precedence.
//! - Test config file loading.
//! - Test dotenv gating.
//! - Test validation performed by `build()`.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Every variable the loader reads, for hermetic `temp_env` scopes.
pub const HRM_VARS: [&str; 8] = [
    "HRM_BASE_URL",
    "HRM_USERNAME",
    "HRM_PASSWORD",
    "HRM_SESSION_COOKIE",
    "HRM_SKIP_VERIFY",
    "HRM_TIMEOUT",
    "HRM_EXPECTED_STATUS_LINE",
    "HRM_CONFIG_PATH",
];

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build a `temp_env` variable list that clears every `HRM_*` variable
/// except the ones given.
pub fn hermetic_vars<'a>(set: &[(&'a str, &'a str)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut vars: Vec<(&str, Option<&str>)> = HRM_VARS
        .iter()
        .filter(|name| !set.iter().any(|(key, _)| key == *name))
        .map(|name| (*name, None))
        .collect();
    vars.extend(set.iter().map(|(key, value)| (*key, Some(*value))));
    vars
}
