//! List command implementation.

use anyhow::Result;
use serde::Serialize;

use crate::report::OutputFormat;
use crate::scenarios::ScenarioId;

#[derive(Serialize)]
struct ScenarioEntry {
    name: &'static str,
    description: &'static str,
}

pub fn run(output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    print!("{}", render(format)?);
    Ok(())
}

fn render(format: OutputFormat) -> Result<String> {
    let entries: Vec<ScenarioEntry> = ScenarioId::ALL
        .into_iter()
        .map(|id| ScenarioEntry {
            name: id.name(),
            description: id.description(),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&entries)?)),
        OutputFormat::Table => {
            let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
            Ok(entries
                .iter()
                .map(|e| format!("{:<width$}  {}\n", e.name, e.description, width = width))
                .collect())
        }
    }
}
