//! Recruitment scenarios.

use anyhow::{Context, Result};
use hrm_client::ValidatedEndpoint;
use hrm_client::endpoints::VacancyQuery;
use serde_json::{Value, json};
use tracing::info;

use super::checks;
use super::{ScenarioContext, unique_suffix};

pub(super) async fn vacancies(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx
        .client
        .get_vacancies(&ctx.session, &VacancyQuery::default())
        .await?;
    checks::valid(ValidatedEndpoint::GetVacancies, &response.raw)?;
    checks::ok_with_line(&response.raw, &ctx.suite.expected_status_line)?;

    let vacancies = &response.data;
    checks::aligned("vacancy", vacancies)?;
    checks::id_column("vacancy id", &vacancies.ids)?;
    checks::value_column("vacancy name", &vacancies.names)
}

pub(super) async fn create_candidate(ctx: &ScenarioContext) -> Result<()> {
    let suffix = unique_suffix();
    let first_name = format!("First_{}", suffix);
    let last_name = format!("Last_{}", suffix);
    let email = format!("candidate_{}@example.com", suffix);
    let body = json!({
        "firstName": first_name,
        "middleName": Value::Null,
        "lastName": last_name,
        "email": email,
        "contactNumber": Value::Null,
        "keywords": Value::Null,
        "comment": Value::Null,
        "dateOfApplication": chrono::Utc::now().format("%Y-%m-%d").to_string(),
        "consentToKeepData": false,
    });

    let response = ctx.client.create_candidate(&ctx.session, &body).await?;
    checks::status(&response.raw, 200)?;
    checks::body_contains(&response.raw, &first_name)?;
    checks::body_contains(&response.raw, &last_name)?;
    checks::body_contains(&response.raw, &email)?;
    if let Some(id) = response.data.id {
        info!("Created candidate {}", id);
    }
    Ok(())
}

pub(super) async fn delete_candidate(ctx: &ScenarioContext) -> Result<()> {
    let listed = ctx
        .client
        .list_candidates(&ctx.session)
        .await
        .context("Failed to list candidates")?;
    checks::status(&listed.raw, 200).context("Candidate list request failed")?;
    let id = listed
        .data
        .ids
        .first()
        .copied()
        .flatten()
        .context("candidate list has no id at data[0]")?;

    let response = ctx.client.delete_candidates(&ctx.session, &[id]).await?;
    checks::status(&response.raw, 200)?;
    checks::body_not_empty(&response.raw)?;
    info!("Deleted candidates {:?}", response.data.ids);
    Ok(())
}
