//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `HRM_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading the JSON config file (see file.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid boolean or numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
///
/// Environment values replace whatever the loader already holds, so builder
/// setters that must win are applied after this call.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none("HRM_CONFIG_PATH")
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    if let Some(url) = env_var_or_none("HRM_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("HRM_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("HRM_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(cookie) = env_var_or_none("HRM_SESSION_COOKIE") {
        loader.set_session_cookie(Some(SecretString::new(cookie.into())));
    }
    if let Some(skip) = env_var_or_none("HRM_SKIP_VERIFY") {
        loader.set_skip_verify(Some(parse_bool("HRM_SKIP_VERIFY", &skip)?));
    }
    if let Some(timeout) = env_var_or_none("HRM_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "HRM_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(line) = env_var_or_none("HRM_EXPECTED_STATUS_LINE") {
        loader.set_expected_status_line(Some(line));
    }
    Ok(())
}
