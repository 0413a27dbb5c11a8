//! Extractors for the admin module endpoints.

use super::{array_node, int_field, string_field};
use crate::models::JobTitleList;
use crate::response::RawResponse;

/// Job titles from the `data` array.
pub fn job_titles(raw: &RawResponse) -> JobTitleList {
    let mut list = JobTitleList::default();
    for job_title in array_node(raw, "data").into_iter().flatten() {
        list.ids.push(int_field(job_title, "id"));
        list.titles.push(string_field(job_title, "title"));
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Columnar;
    use serde_json::json;

    #[test]
    fn test_job_titles() {
        let raw = RawResponse::from_json(
            200,
            &json!({"data": [
                {"id": 1, "title": "Account Assistant", "description": null, "note": null, "jobSpecification": {"id": null}},
                {"id": 2, "title": 17}
            ], "meta": {"total": 2}}),
        );
        let list = job_titles(&raw);
        assert_eq!(list.ids, vec![Some(1), Some(2)]);
        assert_eq!(
            list.titles,
            vec![Some("Account Assistant".to_string()), Some("17".to_string())]
        );
        assert!(list.is_aligned());
    }
}
