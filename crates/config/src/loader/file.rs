//! JSON config file loading.
//!
//! Responsibilities:
//! - Read and parse the JSON config file named by the loader.
//! - Apply file values to a ConfigLoader instance.
//!
//! Invariants:
//! - File values never override values already present on the loader.
//! - A config file that was explicitly requested but is missing is an error.

use secrecy::SecretString;
use std::path::Path;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::FileConfig;

/// Read and parse a config file from disk.
pub(crate) fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply file configuration to the loader, filling only unset fields.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let Some(path) = loader.config_path().cloned() else {
        return Ok(());
    };

    tracing::debug!(path = %path.display(), "Loading config file");
    let file = read_config_file(&path)?;

    if loader.base_url().is_none() {
        loader.set_base_url(file.base_url);
    }
    if loader.username().is_none() {
        loader.set_username(file.username);
    }
    if !loader.has_password() {
        loader.set_password(file.password.map(|p| SecretString::new(p.into())));
    }
    if !loader.has_session_cookie() {
        loader.set_session_cookie(file.session_cookie.map(|c| SecretString::new(c.into())));
    }
    if loader.skip_verify().is_none() {
        loader.set_skip_verify(file.skip_verify);
    }
    if loader.timeout().is_none() {
        loader.set_timeout(file.timeout.map(Duration::from_secs));
    }
    if loader.expected_status_line().is_none() {
        loader.set_expected_status_line(file.expected_status_line);
    }
    if loader.holiday_from().is_none() {
        loader.set_holiday_from(file.holiday_from);
    }
    if loader.holiday_to().is_none() {
        loader.set_holiday_to(file.holiday_to);
    }
    if loader.usage_report_name().is_none() {
        loader.set_usage_report_name(file.usage_report_name);
    }
    Ok(())
}
