//! Run command implementation.

use anyhow::Result;
use hrm_config::Config;
use tracing::info;

use crate::error::SuiteError;
use crate::report::OutputFormat;
use crate::scenarios::{self, ScenarioId};

pub async fn run(config: Config, only: &[ScenarioId], output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;

    let selected = scenarios::select(only);
    info!(
        "Running {} scenario(s) against {}",
        selected.len(),
        client.base_url()
    );

    let (report, login_error) = scenarios::run_suite(client, &config, &selected).await;
    print!("{}", report.render(format)?);

    if let Some(e) = login_error {
        return Err(e.into());
    }

    let summary = report.summary();
    if summary.failed > 0 {
        return Err(SuiteError::ScenariosFailed {
            failed: summary.failed,
            total: selected.len(),
        }
        .into());
    }
    Ok(())
}
