//! Leave module models: holidays, leave types, usage reports, workweek.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::common::columnar;

/// Holidays in a date window. Also the shape of the leave-data endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HolidayList {
    pub ids: Vec<Option<i32>>,
    pub names: Vec<Value>,
    pub dates: Vec<Value>,
    pub recurrings: Vec<Value>,
    pub lengths: Vec<Value>,
    pub length_names: Vec<Value>,
}

columnar!(HolidayList {
    ids,
    names,
    dates,
    recurrings,
    lengths,
    length_names
});

/// Configured leave types.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeaveTypeList {
    pub ids: Vec<Option<i32>>,
    pub names: Vec<Value>,
    pub situationals: Vec<Value>,
    pub deleted: Vec<Value>,
}

columnar!(LeaveTypeList {
    ids,
    names,
    situationals,
    deleted
});

/// Column headers of a leave report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageReport {
    pub names: Vec<Value>,
    pub props: Vec<Value>,
    pub sizes: Vec<Value>,
    pub pins: Vec<Value>,
    /// `cellProperties` objects; `None` where the header had none or held a non-object.
    pub cell_properties: Vec<Option<Map<String, Value>>>,
}

columnar!(UsageReport {
    names,
    props,
    sizes,
    pins,
    cell_properties
});

/// Working-day schedule keyed by day index (`"0"` = Sunday .. `"6"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Workweek {
    pub days: BTreeMap<String, Value>,
}

impl Workweek {
    /// True when `day` is present with a non-null status.
    pub fn has_day(&self, day: u8) -> bool {
        self.days
            .get(&day.to_string())
            .is_some_and(|status| !status.is_null())
    }

    /// True when all seven day keys `"0"`..`"6"` are present with a value.
    pub fn is_complete(&self) -> bool {
        (0..7).all(|day| self.has_day(day))
    }
}
