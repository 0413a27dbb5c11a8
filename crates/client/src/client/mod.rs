//! reqwest-backed [`Transport`] for the HRM API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `request`: The [`ApiRequest`] builder handed to endpoint adapters
//! - `session`: Login and session resolution helpers
//! - `leave`, `pim`, `recruitment`, `admin`: Per-area convenience methods
//!
//! # What this module does NOT handle:
//! - Endpoint paths and payloads (delegated to [`crate::endpoints`])
//! - Holding a session; the cookie is passed explicitly on every call
//!
//! # Invariants
//! - Redirects are never followed, so a login redirect is observable
//! - Every request URL is `base_url` followed by the adapter's path

pub mod builder;
mod request;
mod session;

// API method submodules
mod admin;
mod leave;
mod pim;
mod recruitment;

pub use request::ApiRequest;

use crate::request::Transport;

/// HRM API client.
///
/// A thin owner of a configured `reqwest::Client` and the deployment base URL.
/// Use [`HrmClient::builder()`] to create one:
///
/// ```rust,ignore
/// use hrm_client::HrmClient;
///
/// let client = HrmClient::builder()
///     .base_url("https://hrm.example.com/orangehrm-5.7".to_string())
///     .build()?;
/// let session = client.login("Admin", "admin123").await?;
/// let count = hrm_client::endpoints::get_employee_count(&client, &session).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HrmClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl HrmClient {
    /// Create a new client builder.
    pub fn builder() -> builder::HrmClientBuilder {
        builder::HrmClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Transport for HrmClient {
    type Request = ApiRequest;

    fn request(&self, path: &str) -> ApiRequest {
        ApiRequest::new(self.http.clone(), self.url_for(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_client_builder_with_base_url() {
        let client = HrmClient::builder()
            .base_url("https://hrm.example.com".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://hrm.example.com");
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = HrmClient::builder().build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_normalizes_base_url() {
        let client = HrmClient::builder()
            .base_url("https://hrm.example.com/orangehrm-5.7/".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://hrm.example.com/orangehrm-5.7");
    }

    #[test]
    fn test_url_for_joins_with_single_slash() {
        let client = HrmClient::builder()
            .base_url("https://hrm.example.com/app".to_string())
            .build()
            .unwrap();
        assert_eq!(
            client.url_for("/web/index.php/api/v2/pim/employees"),
            "https://hrm.example.com/app/web/index.php/api/v2/pim/employees"
        );
        assert_eq!(
            client.url_for("web/index.php"),
            "https://hrm.example.com/app/web/index.php"
        );
    }

    #[test]
    fn test_skip_verify_with_https_url() {
        let client = HrmClient::builder()
            .base_url("https://hrm.example.com".to_string())
            .skip_verify(true)
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_skip_verify_with_http_url() {
        // Succeeds but logs that skip_verify has no effect
        let client = HrmClient::builder()
            .base_url("http://localhost:8080".to_string())
            .skip_verify(true)
            .build();
        assert!(client.is_ok());
    }
}
