//! Assertion helpers shared by the scenarios.
//!
//! Each helper returns an `anyhow` error naming what was expected and what
//! came back, so a failed scenario row reads on its own.

use std::fmt::Debug;

use anyhow::{Result, ensure};
use hrm_client::validate::validate_endpoint;
use hrm_client::{Columnar, RawResponse, ValidatedEndpoint};
use serde_json::Value;

/// Exact status code.
pub(crate) fn status(raw: &RawResponse, expected: u16) -> Result<()> {
    ensure!(
        raw.status_code() == expected,
        "expected status {}, got {} ({})",
        expected,
        raw.status_code(),
        raw.status_line()
    );
    Ok(())
}

/// Exact status line, e.g. `HTTP/1.0 200 OK`.
pub(crate) fn status_line(raw: &RawResponse, expected: &str) -> Result<()> {
    ensure!(
        raw.status_line() == expected,
        "expected status line '{}', got '{}'",
        expected,
        raw.status_line()
    );
    Ok(())
}

/// Status 200 plus the configured status line.
pub(crate) fn ok_with_line(raw: &RawResponse, expected_line: &str) -> Result<()> {
    status(raw, 200)?;
    status_line(raw, expected_line)
}

/// Shape validation must pass; diagnostics become the error message.
pub(crate) fn valid(endpoint: ValidatedEndpoint, raw: &RawResponse) -> Result<()> {
    let outcome = validate_endpoint(endpoint, raw);
    ensure!(
        outcome.passed,
        "{} validation failed: {}",
        endpoint.name(),
        outcome.diagnostics.join("; ")
    );
    Ok(())
}

/// A column must have entries and none of them may be absent.
pub(crate) fn column<T: Debug>(label: &str, values: &[T], is_null: impl Fn(&T) -> bool) -> Result<()> {
    ensure!(!values.is_empty(), "{} list is empty", label);
    if let Some(index) = values.iter().position(is_null) {
        anyhow::bail!("{} list has a null at index {}", label, index);
    }
    Ok(())
}

pub(crate) fn value_column(label: &str, values: &[Value]) -> Result<()> {
    column(label, values, Value::is_null)
}

pub(crate) fn id_column(label: &str, values: &[Option<i32>]) -> Result<()> {
    column(label, values, Option::is_none)
}

/// A column must have entries; nulls are allowed.
pub(crate) fn non_empty<T>(label: &str, values: &[T]) -> Result<()> {
    ensure!(!values.is_empty(), "{} list is empty", label);
    Ok(())
}

pub(crate) fn aligned<C: Columnar + ?Sized>(label: &str, model: &C) -> Result<()> {
    ensure!(
        model.is_aligned(),
        "{} columns differ in length: {:?}",
        label,
        model.column_lengths()
    );
    Ok(())
}

pub(crate) fn body_not_empty(raw: &RawResponse) -> Result<()> {
    ensure!(!raw.body().trim().is_empty(), "response body is empty");
    Ok(())
}

pub(crate) fn body_contains(raw: &RawResponse, text: &str) -> Result<()> {
    ensure!(
        raw.contains_text(text),
        "response body does not contain '{}'",
        text
    );
    Ok(())
}

pub(crate) fn not_blank(label: &str, value: Option<&str>) -> Result<()> {
    ensure!(
        value.is_some_and(|v| !v.trim().is_empty()),
        "{} is missing or blank",
        label
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrm_client::HolidayList;
    use serde_json::json;

    #[test]
    fn test_status_and_line() {
        let raw = RawResponse::from_json(200, &json!({"data": []}));
        assert!(status(&raw, 200).is_ok());
        assert!(status(&raw, 201).is_err());
        let err = status_line(&raw, "HTTP/2.0 200 OK").unwrap_err();
        assert!(err.to_string().contains("HTTP/2.0 200 OK"));
    }

    #[test]
    fn test_column_reports_null_index() {
        let err = value_column("names", &[json!("a"), Value::Null]).unwrap_err();
        assert_eq!(err.to_string(), "names list has a null at index 1");
        assert!(value_column("names", &[]).is_err());
        assert!(id_column("ids", &[Some(1), Some(2)]).is_ok());
    }

    #[test]
    fn test_aligned() {
        let mut list = HolidayList::default();
        assert!(aligned("holidays", &list).is_ok());
        list.ids.push(Some(1));
        assert!(aligned("holidays", &list).is_err());
    }

    #[test]
    fn test_valid_joins_diagnostics() {
        let raw = RawResponse::from_json(200, &json!({"data": {}}));
        let err = valid(ValidatedEndpoint::GetEmpCount, &raw).unwrap_err();
        assert!(err.to_string().starts_with("GetEmpCount validation failed"));
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("first name", Some("Odis")).is_ok());
        assert!(not_blank("first name", Some("  ")).is_err());
        assert!(not_blank("first name", None).is_err());
    }
}
