//! PIM (personnel) endpoints.

use serde_json::Value;

use super::{get, send_json};
use crate::auth::SessionCookie;
use crate::error::Result;
use crate::extract;
use crate::models::{CreatedRecord, EmployeeCount, EmployeeList, EmployeeUpdate, PersonalDetails};
use crate::request::{HttpMethod, Transport};
use crate::response::{ApiResponse, RawResponse};

pub async fn get_employee_count<T: Transport>(
    transport: &T,
    session: &SessionCookie,
) -> Result<ApiResponse<EmployeeCount>> {
    let raw = get(transport, session, "/pim/employees/count", &[]).await?;
    let data = extract::employee_count(&raw);
    Ok(ApiResponse::new(raw, data))
}

/// First page of the employee list.
pub async fn list_employees<T: Transport>(
    transport: &T,
    session: &SessionCookie,
) -> Result<ApiResponse<EmployeeList>> {
    let raw = get(transport, session, "/pim/employees", &[]).await?;
    let data = extract::employees(&raw);
    Ok(ApiResponse::new(raw, data))
}

/// A single employee, shaped as a one-element [`EmployeeList`].
pub async fn get_employee<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    emp_number: i32,
) -> Result<ApiResponse<EmployeeList>> {
    let raw = get(transport, session, &format!("/pim/employees/{}", emp_number), &[]).await?;
    let data = extract::employees(&raw);
    Ok(ApiResponse::new(raw, data))
}

pub async fn get_personal_details<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    emp_number: i32,
) -> Result<ApiResponse<PersonalDetails>> {
    let raw = get(
        transport,
        session,
        &format!("/pim/employees/{}/personal-details", emp_number),
        &[],
    )
    .await?;
    let data = extract::personal_details(&raw);
    Ok(ApiResponse::new(raw, data))
}

/// Replace an employee's personal details with `body`.
pub async fn update_personal_details<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    emp_number: i32,
    body: &Value,
) -> Result<ApiResponse<EmployeeUpdate>> {
    let raw = send_json(
        transport,
        session,
        HttpMethod::Put,
        &format!("/pim/employees/{}/personal-details", emp_number),
        body,
    )
    .await?;
    let data = extract::employee_update(&raw);
    Ok(ApiResponse::new(raw, data))
}

/// Create an employee. The response is returned unshaped; callers check that
/// it echoes the submitted names.
pub async fn create_employee<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    body: &Value,
) -> Result<RawResponse> {
    send_json(transport, session, HttpMethod::Post, "/pim/employees", body).await
}

/// Create a defined PIM report.
pub async fn create_report_definition<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    body: &Value,
) -> Result<ApiResponse<CreatedRecord>> {
    let raw = send_json(transport, session, HttpMethod::Post, "/pim/reports/defined", body).await?;
    let data = extract::created_record(&raw);
    Ok(ApiResponse::new(raw, data))
}
