//! Leave API methods.

use crate::auth::SessionCookie;
use crate::client::HrmClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{HolidayList, LeaveTypeList, UsageReport, Workweek};
use crate::response::ApiResponse;

impl HrmClient {
    /// Holidays between two dates (inclusive, `YYYY-MM-DD`).
    pub async fn get_holidays(
        &self,
        session: &SessionCookie,
        from_date: &str,
        to_date: &str,
    ) -> Result<ApiResponse<HolidayList>> {
        endpoints::get_holidays(self, session, from_date, to_date).await
    }

    pub async fn get_leave_data(
        &self,
        session: &SessionCookie,
        from_date: &str,
        to_date: &str,
    ) -> Result<ApiResponse<HolidayList>> {
        endpoints::get_leave_data(self, session, from_date, to_date).await
    }

    pub async fn get_leave_types(&self, session: &SessionCookie) -> Result<ApiResponse<LeaveTypeList>> {
        endpoints::get_leave_types(self, session).await
    }

    /// Column headers of a named leave report.
    pub async fn get_usage_report(
        &self,
        session: &SessionCookie,
        report_name: &str,
    ) -> Result<ApiResponse<UsageReport>> {
        endpoints::get_usage_report(self, session, report_name).await
    }

    pub async fn get_workweek(&self, session: &SessionCookie) -> Result<ApiResponse<Workweek>> {
        endpoints::get_workweek(self, session).await
    }
}
