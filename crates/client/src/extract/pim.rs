//! Extractors for the PIM (personnel) endpoints.

use serde_json::Value;
use tracing::warn;

use super::{as_i32, as_text, field, int_field, json_kind, node, object_node, string_field};
use crate::models::{CreatedRecord, EmployeeCount, EmployeeList, EmployeeUpdate, PersonalDetails};
use crate::response::RawResponse;

/// `count` from the `data` object.
pub fn employee_count(raw: &RawResponse) -> EmployeeCount {
    EmployeeCount {
        count: object_node(raw, "data").and_then(|data| data.get("count").and_then(as_i32)),
    }
}

/// The single record behind `data`, which may be an object or an array of one.
fn single_record(raw: &RawResponse) -> Option<&Value> {
    match node(raw, "data")? {
        record @ Value::Object(_) => Some(record),
        Value::Array(items) => {
            let first = items.first().filter(|item| item.is_object());
            if first.is_none() {
                warn!("'data' array holds no employee record");
            }
            first
        }
        other => {
            warn!(kind = json_kind(other), "'data' is neither an object nor an array");
            None
        }
    }
}

/// Personal details from `data` or `data[0]`.
pub fn personal_details(raw: &RawResponse) -> PersonalDetails {
    let Some(record) = single_record(raw) else {
        return PersonalDetails::default();
    };
    PersonalDetails {
        emp_number: int_field(record, "empNumber"),
        first_name: string_field(record, "firstName"),
        last_name: string_field(record, "lastName"),
        nationality_name: record
            .get("nationality")
            .and_then(|nationality| string_field(nationality, "name")),
    }
}

/// Employees from a `data` array, or one employee from a `data` object.
pub fn employees(raw: &RawResponse) -> EmployeeList {
    let mut list = EmployeeList::default();
    let records: Vec<&Value> = match node(raw, "data") {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(record @ Value::Object(_)) => vec![record],
        Some(other) => {
            warn!(kind = json_kind(other), "'data' is neither an object nor an array");
            Vec::new()
        }
        None => Vec::new(),
    };

    for record in records {
        list.emp_numbers.push(int_field(record, "empNumber"));
        list.first_names.push(field(record, "firstName"));
        list.last_names.push(field(record, "lastName"));
        list.employee_ids.push(field(record, "employeeId"));
    }
    list
}

/// Non-null, non-empty identity fields echoed by a personal-details update.
pub fn employee_update(raw: &RawResponse) -> EmployeeUpdate {
    let Some(data) = object_node(raw, "data") else {
        return EmployeeUpdate::default();
    };
    let text = |key: &str| data.get(key).and_then(as_text).filter(|s| !s.is_empty());
    EmployeeUpdate {
        emp_number: data.get("empNumber").and_then(as_i32),
        first_name: text("firstName"),
        last_name: text("lastName"),
        employee_id: text("employeeId"),
    }
}

/// `id` and `name` of a created record from the `data` object.
pub fn created_record(raw: &RawResponse) -> CreatedRecord {
    let Some(data) = object_node(raw, "data") else {
        return CreatedRecord::default();
    };
    CreatedRecord {
        id: data.get("id").and_then(as_i32),
        name: data.get("name").and_then(as_text),
    }
}
