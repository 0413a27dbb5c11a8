//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, a JSON config file, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - Builder methods applied after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig, SuiteConfig};

/// Configuration loader that builds config from environment variables and a config file.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    session_cookie: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    expected_status_line: Option<String>,
    holiday_from: Option<String>,
    holiday_to: Option<String>,
    usage_report_name: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the JSON config file to read in `from_file()`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Fill unset values from the config file, if one was named.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set a pre-issued session cookie value.
    pub fn with_session_cookie(mut self, cookie: String) -> Self {
        self.session_cookie = Some(SecretString::new(cookie.into()));
        self
    }

    /// Set whether to accept invalid TLS certificates.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the status line successful requests are expected to carry.
    pub fn with_expected_status_line(mut self, line: String) -> Self {
        self.expected_status_line = Some(line);
        self
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn base_url(&self) -> Option<&String> {
        self.base_url.as_ref()
    }

    pub(crate) fn username(&self) -> Option<&String> {
        self.username.as_ref()
    }

    pub(crate) fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub(crate) fn has_session_cookie(&self) -> bool {
        self.session_cookie.is_some()
    }

    pub(crate) fn skip_verify(&self) -> Option<bool> {
        self.skip_verify
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn expected_status_line(&self) -> Option<&String> {
        self.expected_status_line.as_ref()
    }

    pub(crate) fn holiday_from(&self) -> Option<&String> {
        self.holiday_from.as_ref()
    }

    pub(crate) fn holiday_to(&self) -> Option<&String> {
        self.holiday_to.as_ref()
    }

    pub(crate) fn usage_report_name(&self) -> Option<&String> {
        self.usage_report_name.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_session_cookie(&mut self, cookie: Option<SecretString>) {
        self.session_cookie = cookie;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_expected_status_line(&mut self, line: Option<String>) {
        self.expected_status_line = line;
    }

    pub(crate) fn set_holiday_from(&mut self, day: Option<String>) {
        self.holiday_from = day;
    }

    pub(crate) fn set_holiday_to(&mut self, day: Option<String>) {
        self.holiday_to = day;
    }

    pub(crate) fn set_usage_report_name(&mut self, name: Option<String>) {
        self.usage_report_name = name;
    }

    /// Validate a base URL and strip trailing slashes.
    fn normalize_base_url(raw: String) -> Result<String, ConfigError> {
        let parsed = url::Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw,
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(raw.trim().trim_end_matches('/').to_string())
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingBaseUrl` when no base URL was supplied by any source.
    /// - `ConfigError::InvalidBaseUrl` when the base URL is not an absolute http(s) URL.
    /// - `ConfigError::InvalidTimeout` when the timeout is zero or above `MAX_TIMEOUT_SECS`.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;
        let base_url = Self::normalize_base_url(base_url)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "must be between 1 and {} seconds (got {})",
                    MAX_TIMEOUT_SECS,
                    timeout.as_secs()
                ),
            });
        }

        let defaults = SuiteConfig::default();
        let suite = SuiteConfig {
            expected_status_line: self
                .expected_status_line
                .unwrap_or(defaults.expected_status_line),
            holiday_from: self.holiday_from.unwrap_or(defaults.holiday_from),
            holiday_to: self.holiday_to.unwrap_or(defaults.holiday_to),
            usage_report_name: self.usage_report_name.unwrap_or(defaults.usage_report_name),
        };

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig {
                username: self.username,
                password: self.password,
                session_cookie: self.session_cookie,
            },
            suite,
        })
    }
}
