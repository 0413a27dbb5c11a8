//! Admin module scenarios.

use anyhow::Result;

use super::ScenarioContext;
use super::checks;

pub(super) async fn job_titles(ctx: &ScenarioContext) -> Result<()> {
    let response = ctx.client.get_job_titles(&ctx.session).await?;
    checks::ok_with_line(&response.raw, &ctx.suite.expected_status_line)?;

    let titles = &response.data;
    checks::aligned("job title", titles)?;
    checks::id_column("job title id", &titles.ids)?;
    checks::column("job title", &titles.titles, Option::is_none)
}
