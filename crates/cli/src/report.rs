//! Suite report rendering.
//!
//! Responsibilities:
//! - Hold one row per scenario (plus the login row) with its outcome and timing.
//! - Render the report as aligned text or pretty JSON.
//!
//! Does NOT handle:
//! - Running scenarios (see `scenarios` module).

use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

/// Output format for reports and command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json", s),
        }
    }
}

/// How a scenario ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { message: String },
    Skipped { reason: String },
}

impl Outcome {
    fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "PASS",
            Outcome::Failed { .. } => "FAIL",
            Outcome::Skipped { .. } => "SKIP",
        }
    }

    fn detail(&self) -> &str {
        match self {
            Outcome::Passed => "",
            Outcome::Failed { message } => message,
            Outcome::Skipped { reason } => reason,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRow {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub elapsed_ms: u64,
}

impl ScenarioRow {
    pub fn new(name: impl Into<String>, outcome: Outcome, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            outcome,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Rows in run order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioReport {
    pub rows: Vec<ScenarioRow>,
}

impl ScenarioReport {
    pub fn push(&mut self, row: ScenarioRow) {
        self.rows.push(row);
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.rows.len(),
            ..Summary::default()
        };
        for row in &self.rows {
            match row.outcome {
                Outcome::Passed => summary.passed += 1,
                Outcome::Failed { .. } => summary.failed += 1,
                Outcome::Skipped { .. } => summary.skipped += 1,
            }
        }
        summary
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Json => {
                #[derive(Serialize)]
                struct Document<'a> {
                    scenarios: &'a [ScenarioRow],
                    summary: Summary,
                }
                let doc = Document {
                    scenarios: &self.rows,
                    summary: self.summary(),
                };
                Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
            }
        }
    }

    fn render_table(&self) -> String {
        let name_width = self
            .rows
            .iter()
            .map(|row| row.name.len())
            .max()
            .unwrap_or(0)
            .max("SCENARIO".len());

        let mut out = format!(
            "{:<4}  {:<name_width$}  {:>8}  DETAIL\n",
            "",
            "SCENARIO",
            "TIME",
            name_width = name_width
        );
        for row in &self.rows {
            let line = format!(
                "{:<4}  {:<name_width$}  {:>6}ms  {}",
                row.outcome.label(),
                row.name,
                row.elapsed_ms,
                row.outcome.detail(),
                name_width = name_width
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }

        let summary = self.summary();
        out.push_str(&format!(
            "\n{} passed, {} failed, {} skipped ({} total)\n",
            summary.passed, summary.failed, summary.skipped, summary.total
        ));
        out
    }
}
