//! Response Extractor: shape raw JSON payloads into typed models.
//!
//! Responsibilities:
//! - Name every endpoint shape ([`Shape`]) and the JSON node it reads.
//! - Map a [`RawResponse`] to the model of its shape ([`Extraction`]).
//!
//! Does NOT handle:
//! - Sending requests (see [`crate::endpoints`]).
//! - Judging whether a payload is complete (see [`crate::validate`]).
//!
//! Invariants:
//! - Array nodes are walked in order; each element contributes exactly one
//!   entry to every column, `null` when the field is missing.
//! - An absent, null, or wrongly typed node is logged with `warn!` and yields
//!   empty columns or `None` scalars. Extraction never fails.
//! - Integers are taken only from integral JSON numbers that fit in `i32`.

mod admin;
mod leave;
mod pim;
mod recruitment;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::models::{
    CreatedRecord, DeletedIds, EmployeeCount, EmployeeList, EmployeeUpdate, HolidayList,
    JobTitleList, LeaveTypeList, PersonalDetails, UsageReport, VacancyList, Workweek,
};
use crate::response::RawResponse;

pub use admin::job_titles;
pub use leave::{holidays, leave_types, usage_report, workweek};
pub use pim::{created_record, employee_count, employee_update, employees, personal_details};
pub use recruitment::{candidates, deleted_ids, vacancies};

/// Every endpoint shape the suite knows how to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Holidays,
    EmployeeCount,
    LeaveTypes,
    UsageReport,
    Vacancies,
    JobTitles,
    PersonalDetails,
    Employees,
    Workweek,
    CreatedRecord,
    EmployeeUpdate,
    DeletedIds,
    None,
}

impl Shape {
    pub const ALL: [Shape; 13] = [
        Shape::Holidays,
        Shape::EmployeeCount,
        Shape::LeaveTypes,
        Shape::UsageReport,
        Shape::Vacancies,
        Shape::JobTitles,
        Shape::PersonalDetails,
        Shape::Employees,
        Shape::Workweek,
        Shape::CreatedRecord,
        Shape::EmployeeUpdate,
        Shape::DeletedIds,
        Shape::None,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Holidays => "holidays",
            Self::EmployeeCount => "employee-count",
            Self::LeaveTypes => "leave-types",
            Self::UsageReport => "usage-report",
            Self::Vacancies => "vacancies",
            Self::JobTitles => "job-titles",
            Self::PersonalDetails => "personal-details",
            Self::Employees => "employees",
            Self::Workweek => "workweek",
            Self::CreatedRecord => "created-record",
            Self::EmployeeUpdate => "employee-update",
            Self::DeletedIds => "deleted-ids",
            Self::None => "none",
        }
    }

    /// Path of the JSON node this shape reads, or `None` for [`Shape::None`].
    pub fn node(self) -> Option<&'static str> {
        match self {
            Self::UsageReport => Some("data.headers"),
            Self::None => None,
            _ => Some("data"),
        }
    }

    /// Extract this shape's model from a response.
    pub fn extract(self, raw: &RawResponse) -> Extraction {
        match self {
            Self::Holidays => Extraction::Holidays(holidays(raw)),
            Self::EmployeeCount => Extraction::EmployeeCount(employee_count(raw)),
            Self::LeaveTypes => Extraction::LeaveTypes(leave_types(raw)),
            Self::UsageReport => Extraction::UsageReport(usage_report(raw)),
            Self::Vacancies => Extraction::Vacancies(vacancies(raw)),
            Self::JobTitles => Extraction::JobTitles(job_titles(raw)),
            Self::PersonalDetails => Extraction::PersonalDetails(personal_details(raw)),
            Self::Employees => Extraction::Employees(employees(raw)),
            Self::Workweek => Extraction::Workweek(workweek(raw)),
            Self::CreatedRecord => Extraction::CreatedRecord(created_record(raw)),
            Self::EmployeeUpdate => Extraction::EmployeeUpdate(employee_update(raw)),
            Self::DeletedIds => Extraction::DeletedIds(deleted_ids(raw)),
            Self::None => Extraction::None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|shape| shape.name()).collect();
                format!("unknown shape '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// The extracted model of one response, tagged by shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", content = "data", rename_all = "kebab-case")]
pub enum Extraction {
    Holidays(HolidayList),
    EmployeeCount(EmployeeCount),
    LeaveTypes(LeaveTypeList),
    UsageReport(UsageReport),
    Vacancies(VacancyList),
    JobTitles(JobTitleList),
    PersonalDetails(PersonalDetails),
    Employees(EmployeeList),
    Workweek(Workweek),
    CreatedRecord(CreatedRecord),
    EmployeeUpdate(EmployeeUpdate),
    DeletedIds(DeletedIds),
    None,
}

/// Resolve a shape's node, logging when it is absent or null.
fn node<'a>(raw: &'a RawResponse, path: &str) -> Option<&'a Value> {
    match raw.path(path) {
        Some(Value::Null) | None => {
            warn!(
                node = path,
                status = raw.status_code(),
                "'{}' is missing or null in the response",
                path
            );
            None
        }
        Some(value) => Some(value),
    }
}

/// Resolve a node that must be an array.
fn array_node<'a>(raw: &'a RawResponse, path: &str) -> Option<&'a Vec<Value>> {
    let value = node(raw, path)?;
    let array = value.as_array();
    if array.is_none() {
        warn!(node = path, kind = json_kind(value), "'{}' is not an array", path);
    }
    array
}

/// Resolve a node that must be an object.
fn object_node<'a>(raw: &'a RawResponse, path: &str) -> Option<&'a Map<String, Value>> {
    let value = node(raw, path)?;
    let object = value.as_object();
    if object.is_none() {
        warn!(node = path, kind = json_kind(value), "'{}' is not an object", path);
    }
    object
}

/// A field's value, `null` when missing or when `element` is not an object.
fn field(element: &Value, key: &str) -> Value {
    element.get(key).cloned().unwrap_or(Value::Null)
}

/// An `i32` read from an integral JSON number in range.
fn int_field(element: &Value, key: &str) -> Option<i32> {
    element.get(key).and_then(as_i32)
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

/// A field's text: strings as-is, other present values in their JSON form.
/// `None` only when the field is missing or `null`.
fn string_field(element: &Value, key: &str) -> Option<String> {
    element.get(key).and_then(as_text)
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
