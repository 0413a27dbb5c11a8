//! Admin module models.

use serde::Serialize;

use super::common::columnar;

/// Job titles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobTitleList {
    pub ids: Vec<Option<i32>>,
    pub titles: Vec<Option<String>>,
}

columnar!(JobTitleList { ids, titles });
