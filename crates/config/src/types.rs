//! Configuration types for the HRM API suite.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS relaxation, timeout).
//! - Define credentials and the optional pre-issued session cookie.
//! - Define suite-level expectations shared by every scenario.
//! - Define the on-disk JSON representation of a config file.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Duration fields are serialized as seconds (integers).
//! - Default values come from `crate::constants`, not magic numbers.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_EXPECTED_STATUS_LINE, DEFAULT_HOLIDAY_FROM, DEFAULT_HOLIDAY_TO, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USAGE_REPORT_NAME,
};

/// Connection configuration for the HRM server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the HRM deployment (e.g., https://hrm.example.com/orangehrm-5.7)
    pub base_url: String,
    /// Accept self-signed or otherwise invalid TLS certificates
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Credentials and session material.
///
/// A configured `session_cookie` is used as-is; otherwise the runner logs in
/// with `username`/`password`.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub session_cookie: Option<SecretString>,
}

impl AuthConfig {
    /// Returns true when credential login is possible.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

/// Expectations shared by the scenario suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Status line a successful request is expected to carry.
    pub expected_status_line: String,
    /// First day (inclusive) of the holiday window queried by leave scenarios.
    pub holiday_from: String,
    /// Last day (inclusive) of the holiday window queried by leave scenarios.
    pub holiday_to: String,
    /// Name of the leave report fetched by the usage report scenario.
    pub usage_report_name: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            expected_status_line: DEFAULT_EXPECTED_STATUS_LINE.to_string(),
            holiday_from: DEFAULT_HOLIDAY_FROM.to_string(),
            holiday_to: DEFAULT_HOLIDAY_TO.to_string(),
            usage_report_name: DEFAULT_USAGE_REPORT_NAME.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Credentials and session cookie
    pub auth: AuthConfig,
    /// Scenario expectations
    pub suite: SuiteConfig,
}

impl Config {
    /// Convenience constructor for a config that reuses an existing session cookie.
    pub fn with_session_cookie(base_url: String, cookie: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..Default::default()
            },
            auth: AuthConfig {
                session_cookie: Some(cookie),
                ..Default::default()
            },
            suite: SuiteConfig::default(),
        }
    }

    /// Convenience constructor for a config that logs in with credentials.
    pub fn with_credentials(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..Default::default()
            },
            auth: AuthConfig {
                username: Some(username),
                password: Some(password),
                session_cookie: None,
            },
            suite: SuiteConfig::default(),
        }
    }
}

/// On-disk JSON layout of a config file. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub session_cookie: Option<String>,
    pub skip_verify: Option<bool>,
    /// Timeout in seconds
    pub timeout: Option<u64>,
    pub expected_status_line: Option<String>,
    pub holiday_from: Option<String>,
    pub holiday_to: Option<String>,
    pub usage_report_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_suite_defaults() {
        let suite = SuiteConfig::default();
        assert_eq!(suite.expected_status_line, "HTTP/1.0 200 OK");
        assert_eq!(suite.holiday_from, "2025-01-01");
        assert_eq!(suite.holiday_to, "2025-12-31");
    }

    #[test]
    fn test_with_credentials() {
        let config = Config::with_credentials(
            "https://hrm.example.com".to_string(),
            "Admin".to_string(),
            SecretString::new("admin123".to_string().into()),
        );
        assert!(config.auth.has_credentials());
        assert!(config.auth.session_cookie.is_none());
        assert_eq!(
            config.auth.password.as_ref().map(|p| p.expose_secret()),
            Some("admin123")
        );
    }

    #[test]
    fn test_debug_does_not_leak_secrets() {
        let config = Config::with_session_cookie(
            "https://hrm.example.com".to_string(),
            SecretString::new("super-secret-cookie".to_string().into()),
        );
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-cookie"));
    }

    #[test]
    fn test_file_config_partial_json() {
        let file: FileConfig =
            serde_json::from_str(r#"{"base_url": "https://hrm.example.com", "timeout": 10}"#)
                .unwrap();
        assert_eq!(file.base_url.as_deref(), Some("https://hrm.example.com"));
        assert_eq!(file.timeout, Some(10));
        assert!(file.username.is_none());
    }
}
