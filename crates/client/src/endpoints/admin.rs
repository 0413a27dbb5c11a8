//! Admin module endpoints.

use super::get;
use crate::auth::SessionCookie;
use crate::error::Result;
use crate::extract;
use crate::models::JobTitleList;
use crate::request::Transport;
use crate::response::ApiResponse;

/// All job titles, unpaginated.
pub async fn get_job_titles<T: Transport>(
    transport: &T,
    session: &SessionCookie,
) -> Result<ApiResponse<JobTitleList>> {
    let raw = get(transport, session, "/admin/job-titles", &[("limit", "0")]).await?;
    let data = extract::job_titles(&raw);
    Ok(ApiResponse::new(raw, data))
}
