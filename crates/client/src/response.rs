//! Raw HTTP responses and typed adapter results.
//!
//! Responsibilities:
//! - Capture status code, status line, headers, and body text of a response.
//! - Parse the body as JSON lazily, at most once.
//! - Offer path-style access into the JSON body.
//!
//! Invariants:
//! - A `RawResponse` is immutable once built.
//! - An empty or unparseable body reads as JSON `null`, never as an error.
//! - The status line has the form `HTTP/<version> <code> <reason>`.

use std::sync::OnceLock;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, SET_COOKIE};
use serde_json::Value;

use crate::error::Result;
use crate::json_path;

/// A response as received, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status_code: u16,
    status_line: String,
    headers: HeaderMap,
    body: String,
    json: OnceLock<Value>,
}

impl RawResponse {
    /// Build a response from its parts.
    pub fn new(
        status_code: u16,
        status_line: impl Into<String>,
        headers: HeaderMap,
        body: impl Into<String>,
    ) -> Self {
        Self {
            status_code,
            status_line: status_line.into(),
            headers,
            body: body.into(),
            json: OnceLock::new(),
        }
    }

    /// Build an HTTP/1.1 response carrying a JSON document.
    pub fn from_json(status_code: u16, body: &Value) -> Self {
        Self::new(
            status_code,
            Self::format_status_line("HTTP/1.1", status_code),
            HeaderMap::new(),
            body.to_string(),
        )
    }

    /// Read a reqwest response to completion.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status_code = response.status().as_u16();
        let version = format!("{:?}", response.version());
        let status_line = Self::format_status_line(&version, status_code);
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self::new(status_code, status_line, headers, body))
    }

    fn format_status_line(version: &str, status_code: u16) -> String {
        let reason = StatusCode::from_u16(status_code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("");
        format!("{} {} {}", version, status_code, reason)
            .trim_end()
            .to_string()
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// First value of a header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Value of a cookie set by this response via `Set-Cookie`.
    ///
    /// When the cookie is set more than once, the last value wins.
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|raw| {
                let pair = raw.split(';').next()?.trim();
                let (key, value) = pair.split_once('=')?;
                (key.trim() == name).then(|| value.trim().to_string())
            })
            .filter(|value| !value.is_empty())
            .last()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// The parsed JSON body, or `Value::Null`.
    pub fn json(&self) -> &Value {
        self.json
            .get_or_init(|| serde_json::from_str(&self.body).unwrap_or(Value::Null))
    }

    /// Path-style access into the JSON body, e.g. `data.headers[0].name`.
    pub fn path(&self, expr: &str) -> Option<&Value> {
        json_path::lookup(self.json(), expr)
    }

    /// True if the raw body text contains `text`.
    pub fn contains_text(&self, text: &str) -> bool {
        self.body.contains(text)
    }

    /// Pretty-printed JSON body, or the raw text when the body is not JSON.
    pub fn pretty_body(&self) -> String {
        match self.json() {
            Value::Null => self.body.clone(),
            value => serde_json::to_string_pretty(value).unwrap_or_else(|_| self.body.clone()),
        }
    }
}

/// What every typed adapter call returns: the raw response plus the shaped data.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub raw: RawResponse,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(raw: RawResponse, data: T) -> Self {
        Self { raw, data }
    }

    pub fn status_code(&self) -> u16 {
        self.raw.status_code()
    }

    pub fn status_line(&self) -> &str {
        self.raw.status_line()
    }
}
