//! Per-endpoint adapters.
//!
//! Responsibilities:
//! - Build each HRM API request through the [`RequestBuilder`] contract.
//! - Pair the raw response with its extracted model in an [`ApiResponse`].
//!
//! Does NOT handle:
//! - Owning an HTTP client; every adapter is generic over [`Transport`].
//! - Interpreting status codes; non-2xx responses are returned as-is.
//!
//! Invariants:
//! - Every authenticated call attaches the session cookie.
//! - Paths are built from [`API_PREFIX`] so that the base URL may carry a
//!   deployment sub-path (e.g. `/orangehrm-5.7`).

mod admin;
mod auth;
mod generic;
mod leave;
mod pim;
mod recruitment;

use serde_json::Value;

use hrm_config::constants::API_PREFIX;

use crate::auth::SessionCookie;
use crate::error::Result;
use crate::request::{HttpMethod, RequestBuilder, Transport};
use crate::response::RawResponse;

pub use admin::get_job_titles;
pub use auth::{extract_csrf_token, login};
pub use generic::fetch;
pub use leave::{get_holidays, get_leave_data, get_leave_types, get_usage_report, get_workweek};
pub use pim::{
    create_employee, create_report_definition, get_employee, get_employee_count,
    get_personal_details, list_employees, update_personal_details,
};
pub use recruitment::{VacancyQuery, create_candidate, delete_candidates, get_vacancies, list_candidates};

const CONTENT_TYPE_JSON: &str = "application/json";

/// Full path of an API v2 resource.
pub fn api_path(resource: &str) -> String {
    format!("{}{}", API_PREFIX, resource)
}

/// Authenticated GET with a JSON content type, as the HRM UI sends it.
async fn get<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    resource: &str,
    query: &[(&str, &str)],
) -> Result<RawResponse> {
    transport
        .request(&api_path(resource))
        .cookie(session)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .query(query)
        .dispatch(HttpMethod::Get)
        .await
}

/// Authenticated request carrying a JSON body.
async fn send_json<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    method: HttpMethod,
    resource: &str,
    body: &Value,
) -> Result<RawResponse> {
    transport
        .request(&api_path(resource))
        .cookie(session)
        .json_body(body)
        .dispatch(method)
        .await
}
