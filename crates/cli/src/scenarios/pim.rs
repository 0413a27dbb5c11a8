//! PIM (employee) scenarios.

use anyhow::{Context, Result, ensure};
use hrm_client::ValidatedEndpoint;
use serde_json::{Value, json};
use tracing::info;

use super::checks;
use super::{ScenarioContext, unique_suffix};

/// Employee number of the first listed employee.
async fn first_emp_number(ctx: &ScenarioContext) -> Result<i32> {
    let response = ctx
        .client
        .list_employees(&ctx.session)
        .await
        .context("Failed to list employees")?;
    checks::status(&response.raw, 200).context("Employee list request failed")?;
    response
        .data
        .emp_numbers
        .first()
        .copied()
        .flatten()
        .context("employee list has no empNumber at data[0]")
}

pub(super) async fn employee_count(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx.client.get_employee_count(&ctx.session).await?;
    checks::valid(ValidatedEndpoint::GetEmpCount, &response.raw)?;
    checks::ok_with_line(&response.raw, &ctx.suite.expected_status_line)?;

    let count = response.data.count.context("employee count is null")?;
    info!("Employee count: {}", count);
    Ok(())
}

pub(super) async fn personal_details(ctx: &ScenarioContext) -> Result<()> {
    let emp_number = first_emp_number(ctx).await?;
    let response = ctx
        .client
        .get_personal_details(&ctx.session, emp_number)
        .await?;
    checks::ok_with_line(&response.raw, &ctx.suite.expected_status_line)?;

    let details = &response.data;
    ensure!(
        details.emp_number.is_some_and(|n| n > 0),
        "empNumber is not positive: {:?}",
        details.emp_number
    );
    checks::not_blank("first name", details.first_name.as_deref())?;
    checks::not_blank("last name", details.last_name.as_deref())
}

pub(super) async fn employee_data(ctx: &ScenarioContext) -> Result<()> {
    let emp_number = first_emp_number(ctx).await?;
    let response = ctx.client.get_employee(&ctx.session, emp_number).await?;
    checks::ok_with_line(&response.raw, &ctx.suite.expected_status_line)?;

    let employees = &response.data;
    checks::aligned("employee", employees)?;
    checks::non_empty("employee number", &employees.emp_numbers)?;
    checks::non_empty("first name", &employees.first_names)?;
    checks::non_empty("last name", &employees.last_names)
}

pub(super) async fn create_employee(ctx: &ScenarioContext) -> Result<()> {
    let suffix = unique_suffix();
    let first_name = format!("Emp_{}", suffix);
    let body = json!({
        "empPicture": Value::Null,
        "employeeId": Value::Null,
        "firstName": first_name,
        "lastName": uuid::Uuid::new_v4().simple().to_string()[..5].to_string(),
        "middleName": "api",
    });

    let raw = ctx.client.create_employee(&ctx.session, &body).await?;
    checks::status(&raw, 200)?;
    checks::body_contains(&raw, &first_name)
}

pub(super) async fn update_personal_details(ctx: &ScenarioContext) -> Result<()> {
    let emp_number = first_emp_number(ctx).await?;
    let body = json!({
        "firstName": "John123",
        "lastName": "abcde",
        "middleName": "fghij",
    });

    let response = ctx
        .client
        .update_personal_details(&ctx.session, emp_number, &body)
        .await?;
    checks::status(&response.raw, 200)?;
    checks::body_not_empty(&response.raw)?;
    ensure!(
        response.data.emp_number.is_some(),
        "updated record has no empNumber"
    );
    Ok(())
}

pub(super) async fn create_report_definition(ctx: &ScenarioContext) -> Result<()> {
    let body = json!({
        "name": "jav",
        "include": "currentAndPast",
        "criteria": {},
        "fieldGroup": {
            "1": { "fields": [9], "includeHeader": false }
        },
    });

    let response = ctx
        .client
        .create_report_definition(&ctx.session, &body)
        .await?;
    checks::status(&response.raw, 200)?;
    let id = response.data.id.context("created report definition has no id")?;
    info!("Created report definition {}", id);
    Ok(())
}
