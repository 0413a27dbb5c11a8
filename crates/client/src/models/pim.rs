//! PIM (personnel) models.

use serde::Serialize;
use serde_json::Value;

use super::common::columnar;

/// Result of the employee count endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeCount {
    pub count: Option<i32>,
}

/// Personal details of a single employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonalDetails {
    pub emp_number: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `nationality.name`, when the employee has a nationality set.
    pub nationality_name: Option<String>,
}

/// Employees from the list endpoint, or a single employee as one-element columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeList {
    pub emp_numbers: Vec<Option<i32>>,
    pub first_names: Vec<Value>,
    pub last_names: Vec<Value>,
    pub employee_ids: Vec<Value>,
}

columnar!(EmployeeList {
    emp_numbers,
    first_names,
    last_names,
    employee_ids
});

/// Echo of a personal-details update. Null or empty values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeUpdate {
    pub emp_number: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_id: Option<String>,
}

/// `id` and `name` of a freshly created record (candidate, report definition).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatedRecord {
    pub id: Option<i32>,
    pub name: Option<String>,
}
