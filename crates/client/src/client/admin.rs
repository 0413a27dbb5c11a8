//! Admin API methods and the generic fetch.

use serde_json::Value;

use crate::auth::SessionCookie;
use crate::client::HrmClient;
use crate::endpoints;
use crate::error::Result;
use crate::extract::{Extraction, Shape};
use crate::models::JobTitleList;
use crate::request::HttpMethod;
use crate::response::ApiResponse;

impl HrmClient {
    pub async fn get_job_titles(&self, session: &SessionCookie) -> Result<ApiResponse<JobTitleList>> {
        endpoints::get_job_titles(self, session).await
    }

    /// Send any request and extract the response as `shape`.
    pub async fn fetch(
        &self,
        session: &SessionCookie,
        shape: Shape,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse<Extraction>> {
        endpoints::fetch(self, session, shape, method, path, body).await
    }
}
