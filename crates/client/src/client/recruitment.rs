//! Recruitment API methods.

use serde_json::Value;

use crate::auth::SessionCookie;
use crate::client::HrmClient;
use crate::endpoints::{self, VacancyQuery};
use crate::error::Result;
use crate::models::{CandidateList, CreatedRecord, DeletedIds, VacancyList};
use crate::response::ApiResponse;

impl HrmClient {
    pub async fn get_vacancies(
        &self,
        session: &SessionCookie,
        query: &VacancyQuery,
    ) -> Result<ApiResponse<VacancyList>> {
        endpoints::get_vacancies(self, session, query).await
    }

    pub async fn create_candidate(
        &self,
        session: &SessionCookie,
        body: &Value,
    ) -> Result<ApiResponse<CreatedRecord>> {
        endpoints::create_candidate(self, session, body).await
    }

    pub async fn list_candidates(&self, session: &SessionCookie) -> Result<ApiResponse<CandidateList>> {
        endpoints::list_candidates(self, session).await
    }

    pub async fn delete_candidates(
        &self,
        session: &SessionCookie,
        ids: &[i32],
    ) -> Result<ApiResponse<DeletedIds>> {
        endpoints::delete_candidates(self, session, ids).await
    }
}
