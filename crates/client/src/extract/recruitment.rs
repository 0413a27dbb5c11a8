//! Extractors for the recruitment endpoints.

use tracing::warn;

use super::{array_node, as_i32, field, int_field};
use crate::models::{CandidateList, DeletedIds, VacancyList};
use crate::response::RawResponse;

/// Vacancies from the `data` array.
pub fn vacancies(raw: &RawResponse) -> VacancyList {
    let mut list = VacancyList::default();
    for vacancy in array_node(raw, "data").into_iter().flatten() {
        list.ids.push(int_field(vacancy, "id"));
        list.names.push(field(vacancy, "name"));
        list.descriptions.push(field(vacancy, "description"));
        list.num_of_positions.push(field(vacancy, "numOfPositions"));
        list.statuses.push(field(vacancy, "status"));
        list.is_published.push(field(vacancy, "isPublished"));
        list.job_titles.push(field(vacancy, "jobTitle"));
    }
    list
}

/// Candidates from the `data` array.
pub fn candidates(raw: &RawResponse) -> CandidateList {
    let mut list = CandidateList::default();
    for candidate in array_node(raw, "data").into_iter().flatten() {
        list.ids.push(int_field(candidate, "id"));
        list.first_names.push(field(candidate, "firstName"));
        list.last_names.push(field(candidate, "lastName"));
        list.emails.push(field(candidate, "email"));
    }
    list
}

/// Ids from a `data` array of integers. Non-integer entries are skipped.
pub fn deleted_ids(raw: &RawResponse) -> DeletedIds {
    let mut ids = Vec::new();
    for (index, value) in array_node(raw, "data").into_iter().flatten().enumerate() {
        match as_i32(value) {
            Some(id) => ids.push(id),
            None => warn!(index, "Deleted id is not an integer"),
        }
    }
    DeletedIds { ids }
}
