//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failure types.
//! - Map client and suite errors to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Codes 1-9 are error categories; 10 means the suite ran and at least one
//!   scenario failed.

use hrm_client::ClientError;
use thiserror::Error;

/// Structured exit codes for hrm-api.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - login rejected or no session available.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, TLS, or unusable URL.
    ///
    /// Scripts may retry.
    ConnectionError = 3,

    /// Validation error - a response did not have the expected shape.
    ValidationError = 5,

    /// The suite ran and one or more scenarios failed.
    ScenariosFailed = 10,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failures that end a command after the server was reached.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("{failed} of {total} scenarios failed")]
    ScenariosFailed { failed: usize, total: usize },

    #[error("Response failed shape validation for {endpoint}")]
    ValidationFailed { endpoint: String },
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::LoginFailed(_) | ClientError::MissingSession => {
                ExitCode::AuthenticationFailed
            }
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::Transport(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::Transport(_) | ClientError::InvalidHeader(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&SuiteError> for ExitCode {
    fn from(err: &SuiteError) -> Self {
        match err {
            SuiteError::ScenariosFailed { .. } => ExitCode::ScenariosFailed,
            SuiteError::ValidationFailed { .. } => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(suite_err) = cause.downcast_ref::<SuiteError>() {
                return ExitCode::from(suite_err);
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 3);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
        assert_eq!(ExitCode::ScenariosFailed.as_i32(), 10);
    }

    #[test]
    fn test_auth_errors_map_to_2() {
        assert_eq!(
            ExitCode::from(&ClientError::LoginFailed("rejected".to_string())),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(
            ExitCode::from(&ClientError::MissingSession),
            ExitCode::AuthenticationFailed
        );
    }

    #[test]
    fn test_invalid_url_maps_to_connection_error() {
        assert_eq!(
            ExitCode::from(&ClientError::InvalidUrl("x".to_string())),
            ExitCode::ConnectionError
        );
    }

    #[test]
    fn test_context_wrapped_errors_are_found() {
        let err = anyhow::Error::new(ClientError::MissingSession).context("Failed to log in");
        assert_eq!(err.exit_code(), ExitCode::AuthenticationFailed);

        let err: anyhow::Result<()> = Err(SuiteError::ScenariosFailed {
            failed: 1,
            total: 3,
        })
        .context("suite");
        assert_eq!(err.unwrap_err().exit_code(), ExitCode::ScenariosFailed);
    }

    #[test]
    fn test_unknown_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
