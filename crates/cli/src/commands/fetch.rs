//! Fetch command implementation.

use anyhow::{Context, Result};
use hrm_client::{Extraction, HttpMethod, Shape};
use hrm_config::Config;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Serialize)]
struct FetchOutput<'a> {
    status_code: u16,
    status_line: &'a str,
    extraction: &'a Extraction,
}

pub async fn run(
    config: Config,
    shape: Shape,
    path: &str,
    method: HttpMethod,
    body: Option<&str>,
) -> Result<()> {
    let body: Option<Value> = body
        .map(serde_json::from_str)
        .transpose()
        .context("--body is not valid JSON")?;

    let client = crate::commands::build_client_from_config(&config)?;
    let (session, _) = client.resolve_session(&config).await?;

    info!("{} {} as {}", method, path, shape);
    let response = client
        .fetch(&session, shape, method, path, body.as_ref())
        .await?;

    let output = FetchOutput {
        status_code: response.status_code(),
        status_line: response.status_line(),
        extraction: &response.data,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
