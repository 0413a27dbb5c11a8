//! Recruitment models.

use serde::Serialize;
use serde_json::Value;

use super::common::columnar;

/// Job vacancies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VacancyList {
    pub ids: Vec<Option<i32>>,
    pub names: Vec<Value>,
    pub descriptions: Vec<Value>,
    pub num_of_positions: Vec<Value>,
    pub statuses: Vec<Value>,
    pub is_published: Vec<Value>,
    pub job_titles: Vec<Value>,
}

columnar!(VacancyList {
    ids,
    names,
    descriptions,
    num_of_positions,
    statuses,
    is_published,
    job_titles
});

/// Candidates from the candidate list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateList {
    pub ids: Vec<Option<i32>>,
    pub first_names: Vec<Value>,
    pub last_names: Vec<Value>,
    pub emails: Vec<Value>,
}

columnar!(CandidateList {
    ids,
    first_names,
    last_names,
    emails
});

/// Ids echoed back by a bulk delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletedIds {
    pub ids: Vec<i32>,
}
