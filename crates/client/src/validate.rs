//! Response Shape Validator.
//!
//! Responsibilities:
//! - Check that a response's target node holds every required field of a
//!   known endpoint, non-null and (for strings) non-blank.
//! - Collect every violation as a human-readable diagnostic.
//!
//! Does NOT handle:
//! - Extracting values (see [`crate::extract`]).
//! - Deciding what to do with a failed outcome; callers assert on it.
//!
//! Invariants:
//! - The endpoint set is closed. An unknown name fails with one diagnostic.
//! - A missing, null, wrongly typed, or empty target node fails with exactly
//!   one diagnostic.
//! - Otherwise validation never stops early: every element and every field
//!   is checked.
//! - `pin` on the usage report may be null; this exemption applies to no
//!   other field or endpoint.
//! - Validation is a pure function of its inputs.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::extract::json_kind;
use crate::response::RawResponse;

/// Endpoints with a hard-coded required-field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatedEndpoint {
    GetHolidayData,
    GetLeaveData,
    GetEmpCount,
    GetVacancies,
    GetLeaveType,
    GetJobTitles,
    GetUsageReport,
}

#[derive(Debug, Clone, Copy)]
enum Target {
    Array(&'static str),
    Object(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    target: Target,
    /// Noun used in diagnostics for one element.
    element: &'static str,
    required: &'static [&'static str],
    nullable: &'static [&'static str],
    unique: Option<&'static str>,
}

impl ValidatedEndpoint {
    pub const ALL: [ValidatedEndpoint; 7] = [
        ValidatedEndpoint::GetHolidayData,
        ValidatedEndpoint::GetLeaveData,
        ValidatedEndpoint::GetEmpCount,
        ValidatedEndpoint::GetVacancies,
        ValidatedEndpoint::GetLeaveType,
        ValidatedEndpoint::GetJobTitles,
        ValidatedEndpoint::GetUsageReport,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GetHolidayData => "GetHolidayData",
            Self::GetLeaveData => "GetLeaveData",
            Self::GetEmpCount => "GetEmpCount",
            Self::GetVacancies => "GetVacancies",
            Self::GetLeaveType => "GetLeaveType",
            Self::GetJobTitles => "GetJobTitles",
            Self::GetUsageReport => "GetUsageReport",
        }
    }

    /// Path of the node this endpoint's rule inspects.
    pub fn target_node(self) -> &'static str {
        match self.rule().target {
            Target::Array(path) | Target::Object(path) => path,
        }
    }

    fn rule(self) -> Rule {
        match self {
            Self::GetHolidayData => Rule {
                target: Target::Array("data.headers"),
                element: "holiday",
                required: &["name", "prop", "size"],
                nullable: &[],
                unique: None,
            },
            Self::GetLeaveData => Rule {
                target: Target::Array("data"),
                element: "holiday",
                required: &["id", "name", "date", "recurring", "length", "lengthName"],
                nullable: &[],
                unique: Some("date"),
            },
            Self::GetEmpCount => Rule {
                target: Target::Object("data"),
                element: "'data' object",
                required: &["count"],
                nullable: &[],
                unique: None,
            },
            Self::GetVacancies => Rule {
                target: Target::Array("data"),
                element: "vacancy",
                required: &[
                    "id",
                    "name",
                    "description",
                    "numOfPositions",
                    "status",
                    "isPublished",
                    "jobTitle",
                    "hiringManager",
                ],
                nullable: &[],
                unique: None,
            },
            Self::GetLeaveType => Rule {
                target: Target::Array("data"),
                element: "leave type",
                required: &["id", "name", "deleted", "situational"],
                nullable: &[],
                unique: None,
            },
            Self::GetJobTitles => Rule {
                target: Target::Array("data"),
                element: "job title",
                required: &["id", "title", "description", "note", "jobSpecification"],
                nullable: &[],
                unique: None,
            },
            Self::GetUsageReport => Rule {
                target: Target::Array("data.headers"),
                element: "header",
                required: &["name", "prop", "size", "pin"],
                nullable: &["pin"],
                unique: None,
            },
        }
    }
}

impl fmt::Display for ValidatedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidatedEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == s.trim())
            .ok_or_else(|| format!("Method {} is not recognized for validation.", s))
    }
}

/// Pass/fail plus one diagnostic per violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub passed: bool,
    pub diagnostics: Vec<String>,
}

impl ValidationOutcome {
    fn from_diagnostics(diagnostics: Vec<String>) -> Self {
        for diagnostic in &diagnostics {
            warn!("{}", diagnostic);
        }
        Self {
            passed: diagnostics.is_empty(),
            diagnostics,
        }
    }
}

/// Validate `raw` against the rule of the endpoint named `endpoint_name`.
///
/// Unknown names fail with a diagnostic naming them.
pub fn validate(endpoint_name: &str, raw: &RawResponse) -> ValidationOutcome {
    match endpoint_name.parse::<ValidatedEndpoint>() {
        Ok(endpoint) => validate_endpoint(endpoint, raw),
        Err(message) => ValidationOutcome::from_diagnostics(vec![message]),
    }
}

/// Validate `raw` against a known endpoint's rule.
pub fn validate_endpoint(endpoint: ValidatedEndpoint, raw: &RawResponse) -> ValidationOutcome {
    let rule = endpoint.rule();
    match collect_elements(rule.target, raw) {
        Ok(elements) => ValidationOutcome::from_diagnostics(check_elements(&rule, &elements)),
        Err(diagnostic) => ValidationOutcome::from_diagnostics(vec![diagnostic]),
    }
}

/// The elements to check, or the single diagnostic explaining why there are none.
fn collect_elements(target: Target, raw: &RawResponse) -> Result<Vec<&Value>, String> {
    let (path, value) = match target {
        Target::Array(path) | Target::Object(path) => (path, raw.path(path)),
    };

    let value = match value {
        None | Some(Value::Null) => {
            return Err(format!("'{}' section is missing in the response.", path));
        }
        Some(value) => value,
    };

    match (target, value) {
        (Target::Array(_), Value::Array(items)) if items.is_empty() => {
            Err(format!("'{}' section is empty in the response.", path))
        }
        (Target::Array(_), Value::Array(items)) => Ok(items.iter().collect()),
        (Target::Object(_), Value::Object(map)) if map.is_empty() => {
            Err(format!("'{}' object is empty in the response.", path))
        }
        (Target::Object(_), object @ Value::Object(_)) => Ok(vec![object]),
        (Target::Array(_), other) => Err(format!(
            "'{}' is not a valid list (got {}).",
            path,
            json_kind(other)
        )),
        (Target::Object(_), other) => Err(format!(
            "'{}' is not a valid object (got {}).",
            path,
            json_kind(other)
        )),
    }
}

fn check_elements(rule: &Rule, elements: &[&Value]) -> Vec<String> {
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();
    let single = matches!(rule.target, Target::Object(_));

    for (index, element) in elements.iter().enumerate() {
        let location = if single {
            format!("in {}", rule.element)
        } else {
            format!("in {} at index {}", rule.element, index)
        };

        let Some(object) = element.as_object() else {
            diagnostics.push(format!(
                "Element {} is not an object (got {}).",
                location,
                json_kind(element)
            ));
            continue;
        };

        for field in rule.required {
            match object.get(*field) {
                None => diagnostics.push(format!("Missing field '{}' {}", field, location)),
                Some(Value::Null) if rule.nullable.contains(field) => {}
                Some(Value::Null) => {
                    diagnostics.push(format!("Field '{}' is null {}", field, location))
                }
                Some(Value::String(s)) if s.trim().is_empty() => {
                    diagnostics.push(format!("Field '{}' is empty string {}", field, location))
                }
                Some(_) => {}
            }
        }

        if let Some(key) = rule.unique
            && let Some(value) = object.get(key).filter(|v| !v.is_null())
            && !seen.insert(value.to_string())
        {
            diagnostics.push(format!(
                "Duplicate {} found: {} at index {}",
                key, value, index
            ));
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn holiday(id: i32, date: &str) -> Value {
        json!({"id": id, "name": "Holiday", "date": date, "recurring": false, "length": 0, "lengthName": "Full Day"})
    }

    #[test]
    fn test_leave_data_passes() {
        let raw = RawResponse::from_json(
            200,
            &json!({"data": [holiday(1, "2025-01-01"), holiday(2, "2025-05-01")]}),
        );
        let outcome = validate("GetLeaveData", &raw);
        assert!(outcome.passed, "{:?}", outcome.diagnostics);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_leave_data_collects_every_violation() {
        let raw = RawResponse::from_json(
            200,
            &json!({"data": [
                {"id": 1, "name": "  ", "date": "2025-01-01", "recurring": false, "length": 0},
                {"id": null, "name": "B", "date": "2025-01-01", "recurring": false, "length": 0, "lengthName": "Full Day"}
            ]}),
        );
        let outcome = validate("GetLeaveData", &raw);
        assert!(!outcome.passed);
        assert_eq!(
            outcome.diagnostics,
            vec![
                "Field 'name' is empty string in holiday at index 0".to_string(),
                "Missing field 'lengthName' in holiday at index 0".to_string(),
                "Field 'id' is null in holiday at index 1".to_string(),
                "Duplicate date found: \"2025-01-01\" at index 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_node_is_single_diagnostic() {
        let raw = RawResponse::from_json(200, &json!({"meta": {}}));
        for endpoint in ValidatedEndpoint::ALL {
            let outcome = validate_endpoint(endpoint, &raw);
            assert!(!outcome.passed);
            assert_eq!(outcome.diagnostics.len(), 1, "{endpoint}");
        }
    }

    #[test]
    fn test_empty_array_fails() {
        let raw = RawResponse::from_json(200, &json!({"data": []}));
        let outcome = validate("GetLeaveType", &raw);
        assert!(!outcome.passed);
        assert_eq!(
            outcome.diagnostics,
            vec!["'data' section is empty in the response.".to_string()]
        );
    }

    #[test]
    fn test_emp_count_rejects_non_object() {
        let raw = RawResponse::from_json(200, &json!({"data": [{"count": 3}]}));
        let outcome = validate("GetEmpCount", &raw);
        assert!(!outcome.passed);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.diagnostics[0].contains("not a valid object"));
    }

    #[test]
    fn test_emp_count_passes_and_fails() {
        let ok = RawResponse::from_json(200, &json!({"data": {"count": 42}}));
        assert!(validate("GetEmpCount", &ok).passed);

        let null = RawResponse::from_json(200, &json!({"data": {"count": null}}));
        let outcome = validate("GetEmpCount", &null);
        assert_eq!(
            outcome.diagnostics,
            vec!["Field 'count' is null in 'data' object".to_string()]
        );
    }

    #[test]
    fn test_vacancies_rejects_object_data() {
        let raw = RawResponse::from_json(200, &json!({"data": {"id": 1}}));
        let outcome = validate("GetVacancies", &raw);
        assert!(!outcome.passed);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.diagnostics[0].contains("not a valid list"));
    }

    #[test]
    fn test_usage_report_pin_may_be_null() {
        let raw = RawResponse::from_json(
            200,
            &json!({"data": {"headers": [
                {"name": "Leave Type", "prop": "leaveType", "size": 200, "pin": null},
                {"name": "Days", "prop": "days", "size": 100, "pin": "left"}
            ]}}),
        );
        assert!(validate("GetUsageReport", &raw).passed);
    }

    #[test]
    fn test_usage_report_pin_must_be_present_and_not_blank() {
        let raw = RawResponse::from_json(
            200,
            &json!({"data": {"headers": [
                {"name": "Leave Type", "prop": "leaveType", "size": 200},
                {"name": "Days", "prop": "days", "size": 100, "pin": " "}
            ]}}),
        );
        let outcome = validate("GetUsageReport", &raw);
        assert_eq!(
            outcome.diagnostics,
            vec![
                "Missing field 'pin' in header at index 0".to_string(),
                "Field 'pin' is empty string in header at index 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_null_exemption_is_pin_only() {
        let raw = RawResponse::from_json(
            200,
            &json!({"data": {"headers": [
                {"name": null, "prop": "p", "size": 1, "pin": null}
            ]}}),
        );
        let outcome = validate("GetUsageReport", &raw);
        assert_eq!(
            outcome.diagnostics,
            vec!["Field 'name' is null in header at index 0".to_string()]
        );

        let raw = RawResponse::from_json(
            200,
            &json!({"data": [{"id": 1, "title": "T", "description": null, "note": "n", "jobSpecification": {}}]}),
        );
        assert!(!validate("GetJobTitles", &raw).passed);
    }

    #[test]
    fn test_non_string_values_are_never_blank() {
        let raw = RawResponse::from_json(
            200,
            &json!({"data": [{"id": 0, "name": "N", "deleted": false, "situational": false}]}),
        );
        assert!(validate("GetLeaveType", &raw).passed);
    }

    #[test]
    fn test_unknown_endpoint_fails() {
        let raw = RawResponse::from_json(200, &json!({"data": []}));
        let outcome = validate("GetPayroll", &raw);
        assert!(!outcome.passed);
        assert_eq!(
            outcome.diagnostics,
            vec!["Method GetPayroll is not recognized for validation.".to_string()]
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let raw = RawResponse::from_json(
            200,
            &json!({"data": [{"id": 1, "name": "", "deleted": null}]}),
        );
        let first = validate("GetLeaveType", &raw);
        let second = validate("GetLeaveType", &raw);
        assert_eq!(first, second);
        assert_eq!(first.diagnostics.len(), 3);
    }

    #[test]
    fn test_holiday_data_reads_headers_node() {
        let raw = RawResponse::from_json(
            200,
            &json!({"data": {"headers": [{"name": "Date", "prop": "date", "size": 120}]}}),
        );
        assert!(validate("GetHolidayData", &raw).passed);
        assert_eq!(ValidatedEndpoint::GetHolidayData.target_node(), "data.headers");
    }
}
