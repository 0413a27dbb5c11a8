//! Validate command implementation.

use anyhow::Result;
use hrm_client::{HttpMethod, RequestBuilder, Transport, ValidationOutcome, validate};
use hrm_config::Config;
use serde::Serialize;

use crate::error::SuiteError;
use crate::report::OutputFormat;

#[derive(Serialize)]
struct ValidateOutput<'a> {
    endpoint: &'a str,
    status_code: u16,
    #[serde(flatten)]
    outcome: &'a ValidationOutcome,
}

pub async fn run(config: Config, endpoint: &str, path: &str, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;
    let (session, _) = client.resolve_session(&config).await?;

    let raw = client
        .request(path)
        .cookie(&session)
        .header("Content-Type", "application/json")
        .dispatch(HttpMethod::Get)
        .await?;
    let outcome = validate(endpoint, &raw);

    let output = ValidateOutput {
        endpoint,
        status_code: raw.status_code(),
        outcome: &outcome,
    };
    print!("{}", render(&output, format)?);

    if !outcome.passed {
        return Err(SuiteError::ValidationFailed {
            endpoint: endpoint.to_string(),
        }
        .into());
    }
    Ok(())
}

fn render(output: &ValidateOutput<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(output)?)),
        OutputFormat::Table => {
            let verdict = if output.outcome.passed { "PASS" } else { "FAIL" };
            let mut out = format!(
                "{} {} (status {})\n",
                verdict, output.endpoint, output.status_code
            );
            for diagnostic in &output.outcome.diagnostics {
                out.push_str(&format!("  - {}\n", diagnostic));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_diagnostics() {
        let outcome = ValidationOutcome {
            passed: false,
            diagnostics: vec!["Leave type at index 0 has no 'name'".to_string()],
        };
        let output = ValidateOutput {
            endpoint: "GetLeaveType",
            status_code: 200,
            outcome: &outcome,
        };
        let out = render(&output, OutputFormat::Table).unwrap();
        assert_eq!(
            out,
            "FAIL GetLeaveType (status 200)\n  - Leave type at index 0 has no 'name'\n"
        );
    }

    #[test]
    fn test_json_flattens_outcome() {
        let outcome = ValidationOutcome {
            passed: true,
            diagnostics: vec![],
        };
        let output = ValidateOutput {
            endpoint: "GetEmpCount",
            status_code: 200,
            outcome: &outcome,
        };
        let doc: serde_json::Value =
            serde_json::from_str(&render(&output, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(doc["passed"], true);
        assert_eq!(doc["endpoint"], "GetEmpCount");
    }
}
