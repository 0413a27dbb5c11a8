//! Client builder for constructing [`HrmClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL and normalizing trailing slashes
//! - Configuring the underlying HTTP client (timeout, TLS verification, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`crate::endpoints`])
//! - Obtaining a session (handled by [`crate::auth::resolve_session`])
//!
//! # Invariants
//! - `base_url` is required and must parse as an absolute URL
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use hrm_config::{Config, constants::DEFAULT_TIMEOUT_SECS};

use crate::client::HrmClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`HrmClient`].
pub struct HrmClientBuilder {
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for HrmClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HrmClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the HRM deployment, including any sub-path.
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against test deployments with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`HrmClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or does not parse.
    /// Returns [`ClientError::Transport`] if the HTTP client fails to build.
    pub fn build(self) -> Result<HrmClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::none());

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(HrmClient { http, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_session_cookie(
            "https://hrm.example.com".to_string(),
            SecretString::new("cookie".to_string().into()),
        );
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);

        let builder = HrmClient::builder().from_config(&config);

        assert_eq!(builder.base_url.as_deref(), Some("https://hrm.example.com"));
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_unparseable_base_url_is_rejected() {
        let result = HrmClient::builder()
            .base_url("not a url".to_string())
            .build();
        assert!(matches!(result.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        assert_eq!(
            HrmClientBuilder::normalize_base_url("https://hrm.example.com//".to_string()),
            "https://hrm.example.com"
        );
    }
}
