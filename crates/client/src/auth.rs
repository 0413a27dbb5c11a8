//! Session context for authenticated calls.
//!
//! The HRM web application authenticates API calls with the same session
//! cookie its browser UI uses. A [`SessionCookie`] is obtained once (either
//! configured up front or produced by [`crate::endpoints::login`]) and then
//! passed explicitly to every adapter call.

use secrecy::{ExposeSecret, SecretString};

use hrm_config::Config;
use hrm_config::constants::SESSION_COOKIE_NAME;

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::request::Transport;

/// An authenticated session: cookie name plus its secret value.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    value: SecretString,
}

impl SessionCookie {
    /// Create a session using the HRM cookie name (`orangehrm`).
    pub fn new(value: SecretString) -> Self {
        Self {
            name: SESSION_COOKIE_NAME.to_string(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expose the cookie value. Callers must not log the result.
    pub fn expose_value(&self) -> &str {
        self.value.expose_secret()
    }

    /// Render as a `Cookie` request header value: `name=value`.
    pub fn header_value(&self) -> String {
        format!("{}={}", self.name, self.value.expose_secret())
    }
}

/// Where a resolved session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// A pre-issued cookie from configuration.
    Configured,
    /// A cookie obtained by posting the login form.
    Login,
}

/// Resolve the session for a run.
///
/// A configured cookie is used as-is. Otherwise, when both username and
/// password are present, a credential login is performed.
///
/// # Errors
///
/// - [`ClientError::MissingSession`] when neither route is available.
/// - Any error from [`endpoints::login`].
pub async fn resolve_session<T: Transport>(
    transport: &T,
    config: &Config,
) -> Result<(SessionCookie, SessionSource)> {
    if let Some(cookie) = &config.auth.session_cookie {
        tracing::debug!("Using configured session cookie");
        return Ok((SessionCookie::new(cookie.clone()), SessionSource::Configured));
    }

    match (&config.auth.username, &config.auth.password) {
        (Some(username), Some(password)) => {
            let session = endpoints::login(transport, username, password.expose_secret()).await?;
            Ok((session, SessionSource::Login))
        }
        _ => Err(ClientError::MissingSession),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_uses_hrm_cookie_name() {
        let session = SessionCookie::new(SecretString::new("abc123".to_string().into()));
        assert_eq!(session.name(), "orangehrm");
        assert_eq!(session.header_value(), "orangehrm=abc123");
    }

    #[test]
    fn test_debug_hides_value() {
        let session = SessionCookie::new(SecretString::new("very-secret".to_string().into()));
        let debug = format!("{:?}", session);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("orangehrm"));
    }
}
