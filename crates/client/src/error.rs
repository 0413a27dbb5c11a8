//! Error types for the HRM client.
//!
//! HTTP status codes are never errors here: a 404 or 500 is an ordinary
//! [`crate::RawResponse`] for the caller to assert on.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during HRM client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused, TLS failure, timeout, or a body that could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value could not be encoded.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Credential login did not yield a session cookie.
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// No session cookie was configured and no credentials were available.
    #[error("No session available: configure a session cookie or username/password")]
    MissingSession,
}

impl ClientError {
    /// Check if this error is a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Check if this error happened while connecting.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::LoginFailed(_) | Self::MissingSession)
    }
}
