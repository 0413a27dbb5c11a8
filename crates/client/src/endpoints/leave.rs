//! Leave module endpoints.

use super::get;
use crate::auth::SessionCookie;
use crate::error::Result;
use crate::extract;
use crate::models::{HolidayList, LeaveTypeList, UsageReport, Workweek};
use crate::request::Transport;
use crate::response::ApiResponse;

/// Holidays between `from_date` and `to_date` (inclusive, `YYYY-MM-DD`).
pub async fn get_holidays<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    from_date: &str,
    to_date: &str,
) -> Result<ApiResponse<HolidayList>> {
    let raw = get(
        transport,
        session,
        "/leave/holidays",
        &[("fromDate", from_date), ("toDate", to_date)],
    )
    .await?;
    let data = extract::holidays(&raw);
    Ok(ApiResponse::new(raw, data))
}

/// Leave data for a date window. Served by the holidays resource.
pub async fn get_leave_data<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    from_date: &str,
    to_date: &str,
) -> Result<ApiResponse<HolidayList>> {
    get_holidays(transport, session, from_date, to_date).await
}

/// All leave types, unpaginated.
pub async fn get_leave_types<T: Transport>(
    transport: &T,
    session: &SessionCookie,
) -> Result<ApiResponse<LeaveTypeList>> {
    let raw = get(transport, session, "/leave/leave-types", &[("limit", "0")]).await?;
    let data = extract::leave_types(&raw);
    Ok(ApiResponse::new(raw, data))
}

/// Column headers of the named leave report.
pub async fn get_usage_report<T: Transport>(
    transport: &T,
    session: &SessionCookie,
    report_name: &str,
) -> Result<ApiResponse<UsageReport>> {
    let raw = get(transport, session, "/leave/reports", &[("name", report_name)]).await?;
    let data = extract::usage_report(&raw);
    Ok(ApiResponse::new(raw, data))
}

/// Working-day schedule in indexed form.
pub async fn get_workweek<T: Transport>(
    transport: &T,
    session: &SessionCookie,
) -> Result<ApiResponse<Workweek>> {
    let raw = get(transport, session, "/leave/workweek", &[("model", "indexed")]).await?;
    let data = extract::workweek(&raw);
    Ok(ApiResponse::new(raw, data))
}
