//! Leave module scenarios.

use anyhow::{Result, ensure};
use hrm_client::{HolidayList, ValidatedEndpoint};
use tracing::info;

use super::ScenarioContext;
use super::checks;

fn holiday_columns(list: &HolidayList) -> Result<()> {
    checks::aligned("holiday", list)?;
    checks::id_column("holiday id", &list.ids)?;
    checks::value_column("holiday name", &list.names)?;
    checks::value_column("holiday date", &list.dates)
}

pub(super) async fn holidays(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx
        .client
        .get_holidays(&ctx.session, &ctx.suite.holiday_from, &ctx.suite.holiday_to)
        .await?;
    checks::ok_with_line(&response.raw, &ctx.suite.expected_status_line)?;
    holiday_columns(&response.data)
}

pub(super) async fn leave_data(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx
        .client
        .get_leave_data(&ctx.session, &ctx.suite.holiday_from, &ctx.suite.holiday_to)
        .await?;
    checks::valid(ValidatedEndpoint::GetLeaveData, &response.raw)?;
    checks::ok_with_line(&response.raw, &ctx.suite.expected_status_line)?;
    holiday_columns(&response.data)
}

pub(super) async fn leave_types(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx.client.get_leave_types(&ctx.session).await?;
    checks::valid(ValidatedEndpoint::GetLeaveType, &response.raw)?;
    checks::ok_with_line(&response.raw, &ctx.suite.expected_status_line)?;

    let types = &response.data;
    checks::aligned("leave type", types)?;
    checks::id_column("leave type id", &types.ids)?;
    checks::value_column("leave type name", &types.names)?;
    checks::value_column("leave type situational", &types.situationals)?;
    checks::value_column("leave type deleted", &types.deleted)
}

pub(super) async fn usage_report(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx
        .client
        .get_usage_report(&ctx.session, &ctx.suite.usage_report_name)
        .await?;
    checks::valid(ValidatedEndpoint::GetUsageReport, &response.raw)?;
    checks::ok_with_line(&response.raw, &ctx.suite.expected_status_line)?;

    let report = &response.data;
    checks::aligned("usage report header", report)?;
    checks::value_column("header name", &report.names)?;
    checks::value_column("header prop", &report.props)?;
    checks::value_column("header size", &report.sizes)?;
    checks::non_empty("header cell properties", &report.cell_properties)?;

    // pin is nullable; only recorded
    let pinned = report.pins.iter().filter(|pin| !pin.is_null()).count();
    info!(
        headers = report.names.len(),
        pinned, "Usage report header pins: {:?}", report.pins
    );
    Ok(())
}

pub(super) async fn workweek(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx.client.get_workweek(&ctx.session).await?;
    checks::status(&response.raw, 200)?;
    checks::body_not_empty(&response.raw)?;

    let days = &response.data.days;
    ensure!(!days.is_empty(), "workweek has no days");
    let missing: Vec<u8> = (0..7u8).filter(|&day| !response.data.has_day(day)).collect();
    ensure!(missing.is_empty(), "workweek is missing days {:?}", missing);
    Ok(())
}
