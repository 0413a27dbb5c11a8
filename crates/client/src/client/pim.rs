//! PIM (employee) API methods.

use serde_json::Value;

use crate::auth::SessionCookie;
use crate::client::HrmClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreatedRecord, EmployeeCount, EmployeeList, EmployeeUpdate, PersonalDetails};
use crate::response::{ApiResponse, RawResponse};

impl HrmClient {
    pub async fn get_employee_count(&self, session: &SessionCookie) -> Result<ApiResponse<EmployeeCount>> {
        endpoints::get_employee_count(self, session).await
    }

    pub async fn list_employees(&self, session: &SessionCookie) -> Result<ApiResponse<EmployeeList>> {
        endpoints::list_employees(self, session).await
    }

    /// One employee, shaped as a single-row [`EmployeeList`].
    pub async fn get_employee(
        &self,
        session: &SessionCookie,
        emp_number: i32,
    ) -> Result<ApiResponse<EmployeeList>> {
        endpoints::get_employee(self, session, emp_number).await
    }

    pub async fn get_personal_details(
        &self,
        session: &SessionCookie,
        emp_number: i32,
    ) -> Result<ApiResponse<PersonalDetails>> {
        endpoints::get_personal_details(self, session, emp_number).await
    }

    pub async fn update_personal_details(
        &self,
        session: &SessionCookie,
        emp_number: i32,
        body: &Value,
    ) -> Result<ApiResponse<EmployeeUpdate>> {
        endpoints::update_personal_details(self, session, emp_number, body).await
    }

    /// Create an employee; the response is returned unshaped.
    pub async fn create_employee(&self, session: &SessionCookie, body: &Value) -> Result<RawResponse> {
        endpoints::create_employee(self, session, body).await
    }

    pub async fn create_report_definition(
        &self,
        session: &SessionCookie,
        body: &Value,
    ) -> Result<ApiResponse<CreatedRecord>> {
        endpoints::create_report_definition(self, session, body).await
    }
}
