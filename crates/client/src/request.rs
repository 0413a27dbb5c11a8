//! The request-builder contract every endpoint adapter is written against.
//!
//! Responsibilities:
//! - Define [`HttpMethod`], the verbs the suite issues.
//! - Define [`RequestBuilder`]: cookie attachment, headers, body, query, and
//!   verb dispatch producing a [`RawResponse`].
//! - Define [`Transport`]: something that can start a request for a path.
//!
//! Does NOT handle:
//! - The reqwest-backed implementation (see [`crate::client`]).
//! - Interpreting responses (see [`crate::extract`] and [`crate::validate`]).
//!
//! Invariants:
//! - `dispatch` resolves to `Err` only for transport failures; every HTTP
//!   status, including 4xx/5xx, is an `Ok(RawResponse)`.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde_json::Value;

use crate::auth::SessionCookie;
use crate::error::Result;
use crate::response::RawResponse;

/// HTTP verbs used against the HRM API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other => Err(format!("unsupported HTTP method '{}'", other)),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request under construction.
///
/// Builder methods never fail eagerly; an invalid header or body is reported
/// by `dispatch`.
pub trait RequestBuilder: Sized + Send {
    /// Attach the session cookie.
    fn cookie(self, session: &SessionCookie) -> Self;

    /// Add a request header.
    fn header(self, name: &str, value: &str) -> Self;

    /// Attach a JSON body. Sets `Content-Type: application/json`.
    fn json_body(self, body: &Value) -> Self;

    /// Attach a URL-encoded form body.
    fn form_body(self, fields: &[(&str, &str)]) -> Self;

    /// Append query parameters.
    fn query(self, params: &[(&str, &str)]) -> Self;

    /// Send the request with the given verb.
    fn dispatch(self, method: HttpMethod) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// Starts requests against a base URL.
pub trait Transport: Sync {
    type Request: RequestBuilder;

    /// Begin a request for `path`, which is relative to the base URL and may
    /// carry its own query string.
    fn request(&self, path: &str) -> Self::Request;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>(), Ok(HttpMethod::Get));
        assert_eq!("Delete".parse::<HttpMethod>(), Ok(HttpMethod::Delete));
        assert!("PATCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_method_into_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
