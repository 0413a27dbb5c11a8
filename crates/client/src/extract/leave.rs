//! Extractors for the leave module endpoints.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use super::{array_node, field, int_field, json_kind, object_node};
use crate::models::{HolidayList, LeaveTypeList, UsageReport, Workweek};
use crate::response::RawResponse;

/// Holidays (and leave data) from the `data` array.
pub fn holidays(raw: &RawResponse) -> HolidayList {
    let mut list = HolidayList::default();
    for holiday in array_node(raw, "data").into_iter().flatten() {
        list.ids.push(int_field(holiday, "id"));
        list.names.push(field(holiday, "name"));
        list.dates.push(field(holiday, "date"));
        list.recurrings.push(field(holiday, "recurring"));
        list.lengths.push(field(holiday, "length"));
        list.length_names.push(field(holiday, "lengthName"));
    }
    list
}

/// Leave types from the `data` array.
pub fn leave_types(raw: &RawResponse) -> LeaveTypeList {
    let mut list = LeaveTypeList::default();
    for leave_type in array_node(raw, "data").into_iter().flatten() {
        list.ids.push(int_field(leave_type, "id"));
        list.names.push(field(leave_type, "name"));
        list.situationals.push(field(leave_type, "situational"));
        list.deleted.push(field(leave_type, "deleted"));
    }
    list
}

/// Report column headers from the `data.headers` array.
pub fn usage_report(raw: &RawResponse) -> UsageReport {
    let mut report = UsageReport::default();
    for (index, header) in array_node(raw, "data.headers")
        .into_iter()
        .flatten()
        .enumerate()
    {
        report.names.push(field(header, "name"));
        report.props.push(field(header, "prop"));
        report.sizes.push(field(header, "size"));
        report.pins.push(field(header, "pin"));

        let cell_properties = match header.get("cellProperties") {
            Some(Value::Object(map)) => Some(map.clone()),
            Some(Value::Null) | None => None,
            Some(other) => {
                warn!(
                    index,
                    kind = json_kind(other),
                    "Unexpected type for cellProperties"
                );
                None
            }
        };
        report.cell_properties.push(cell_properties);
    }
    report
}

/// Day index to working-day status from the `data` object.
pub fn workweek(raw: &RawResponse) -> Workweek {
    let days: BTreeMap<String, Value> = object_node(raw, "data")
        .into_iter()
        .flatten()
        .map(|(day, status)| (day.clone(), status.clone()))
        .collect();
    Workweek { days }
}
