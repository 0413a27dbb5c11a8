//! Recruitment endpoints.

use serde_json::{Value, json};

use super::{get, send_json};
use crate::auth::SessionCookie;
use crate::error::Result;
use crate::extract;
use crate::models::{CandidateList, CreatedRecord, DeletedIds, VacancyList};
use crate::request::{HttpMethod, Transport};
use crate::response::ApiResponse;

/// Query parameters of the vacancy list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyQuery {
    pub limit: u32,
    pub offset: u32,
    pub sort_field: String,
    pub sort_order: String,
    pub model: String,
}

impl Default for VacancyQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
            sort_field: "vacancy.name".to_string(),
            sort_order: "ASC".to_string(),
            model: "detailed".to_string(),
        }
    }
}

pub async fn get_vacancies<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    query: &VacancyQuery,
) -> Result<ApiResponse<VacancyList>> {
    let limit = query.limit.to_string();
    let offset = query.offset.to_string();
    let raw = get(
        transport,
        session,
        "/recruitment/vacancies",
        &[
            ("limit", limit.as_str()),
            ("offset", offset.as_str()),
            ("sortField", query.sort_field.as_str()),
            ("sortOrder", query.sort_order.as_str()),
            ("model", query.model.as_str()),
        ],
    )
    .await?;
    let data = extract::vacancies(&raw);
    Ok(ApiResponse::new(raw, data))
}

pub async fn create_candidate<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    body: &Value,
) -> Result<ApiResponse<CreatedRecord>> {
    let raw = send_json(
        transport,
        session,
        HttpMethod::Post,
        "/recruitment/candidates",
        body,
    )
    .await?;
    let data = extract::created_record(&raw);
    Ok(ApiResponse::new(raw, data))
}

/// First page of candidates, newest first as the server orders them.
pub async fn list_candidates<T: Transport>(
    transport: &T,
    session: &SessionCookie,
) -> Result<ApiResponse<CandidateList>> {
    let raw = get(transport, session, "/recruitment/candidates", &[]).await?;
    let data = extract::candidates(&raw);
    Ok(ApiResponse::new(raw, data))
}

/// Bulk-delete candidates by id.
pub async fn delete_candidates<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    ids: &[i32],
) -> Result<ApiResponse<DeletedIds>> {
    let raw = send_json(
        transport,
        session,
        HttpMethod::Delete,
        "/recruitment/candidates",
        &json!({ "ids": ids }),
    )
    .await?;
    let data = extract::deleted_ids(&raw);
    Ok(ApiResponse::new(raw, data))
}
