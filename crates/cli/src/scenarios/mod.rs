//! Endpoint scenarios and the suite runner.
//!
//! Responsibilities:
//! - Name every scenario and fix the order the suite runs them in.
//! - Resolve the session once, then run the selected scenarios against it.
//! - Turn each scenario's result into a report row.
//!
//! Does NOT handle:
//! - Rendering the report (see `report` module).
//! - Mapping failures to exit codes (see `error` module).
//!
//! Invariants:
//! - Scenarios run sequentially in [`ScenarioId::ALL`] order, whatever order
//!   `--only` named them in.
//! - A scenario failure never stops the run; a login failure skips every
//!   scenario.

mod admin;
mod checks;
mod leave;
mod pim;
mod recruitment;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Result;
use hrm_client::auth::SessionSource;
use hrm_client::{ClientError, HrmClient, SessionCookie};
use hrm_config::{Config, SuiteConfig};
use tracing::{info, warn};

use crate::report::{Outcome, ScenarioReport, ScenarioRow};

/// Everything a scenario needs: the client, the session, and the expectations.
pub struct ScenarioContext {
    pub client: HrmClient,
    pub session: SessionCookie,
    pub suite: SuiteConfig,
}

/// One named scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioId {
    Holidays,
    LeaveData,
    EmployeeCount,
    LeaveTypes,
    UsageReport,
    Vacancies,
    JobTitles,
    PersonalDetails,
    EmployeeData,
    Workweek,
    CreateEmployee,
    UpdatePersonalDetails,
    CreateReportDefinition,
    CreateCandidate,
    DeleteCandidate,
}

impl ScenarioId {
    /// Every scenario, in run order.
    pub const ALL: [ScenarioId; 15] = [
        ScenarioId::Holidays,
        ScenarioId::LeaveData,
        ScenarioId::EmployeeCount,
        ScenarioId::LeaveTypes,
        ScenarioId::UsageReport,
        ScenarioId::Vacancies,
        ScenarioId::JobTitles,
        ScenarioId::PersonalDetails,
        ScenarioId::EmployeeData,
        ScenarioId::Workweek,
        ScenarioId::CreateEmployee,
        ScenarioId::UpdatePersonalDetails,
        ScenarioId::CreateReportDefinition,
        ScenarioId::CreateCandidate,
        ScenarioId::DeleteCandidate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Holidays => "holidays",
            Self::LeaveData => "leave-data",
            Self::EmployeeCount => "employee-count",
            Self::LeaveTypes => "leave-types",
            Self::UsageReport => "usage-report",
            Self::Vacancies => "vacancies",
            Self::JobTitles => "job-titles",
            Self::PersonalDetails => "personal-details",
            Self::EmployeeData => "employee-data",
            Self::Workweek => "workweek",
            Self::CreateEmployee => "create-employee",
            Self::UpdatePersonalDetails => "update-personal-details",
            Self::CreateReportDefinition => "create-report-definition",
            Self::CreateCandidate => "create-candidate",
            Self::DeleteCandidate => "delete-candidate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Holidays => "Holidays in the configured window have ids, names and dates",
            Self::LeaveData => "Holiday list passes GetLeaveData validation with unique dates",
            Self::EmployeeCount => "Employee count passes GetEmpCount validation",
            Self::LeaveTypes => "Leave types pass GetLeaveType validation",
            Self::UsageReport => "Usage report headers pass GetUsageReport validation",
            Self::Vacancies => "Vacancies pass GetVacancies validation",
            Self::JobTitles => "Job titles have ids and titles",
            Self::PersonalDetails => "First employee's personal details have names",
            Self::EmployeeData => "First employee is returned with number and names",
            Self::Workweek => "Workweek lists all seven days",
            Self::CreateEmployee => "Create an employee with a unique first name",
            Self::UpdatePersonalDetails => "Update the first employee's names",
            Self::CreateReportDefinition => "Create a PIM report definition",
            Self::CreateCandidate => "Create a candidate with unique names and email",
            Self::DeleteCandidate => "Delete the first listed candidate",
        }
    }

    /// Run this scenario. Any error is the scenario's failure message.
    pub async fn run(self, ctx: &ScenarioContext) -> Result<()> {
        match self {
            Self::Holidays => leave::holidays(ctx).await,
            Self::LeaveData => leave::leave_data(ctx).await,
            Self::EmployeeCount => pim::employee_count(ctx).await,
            Self::LeaveTypes => leave::leave_types(ctx).await,
            Self::UsageReport => leave::usage_report(ctx).await,
            Self::Vacancies => recruitment::vacancies(ctx).await,
            Self::JobTitles => admin::job_titles(ctx).await,
            Self::PersonalDetails => pim::personal_details(ctx).await,
            Self::EmployeeData => pim::employee_data(ctx).await,
            Self::Workweek => leave::workweek(ctx).await,
            Self::CreateEmployee => pim::create_employee(ctx).await,
            Self::UpdatePersonalDetails => pim::update_personal_details(ctx).await,
            Self::CreateReportDefinition => pim::create_report_definition(ctx).await,
            Self::CreateCandidate => recruitment::create_candidate(ctx).await,
            Self::DeleteCandidate => recruitment::delete_candidate(ctx).await,
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s.trim())
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|id| id.name()).collect();
                format!("unknown scenario '{}'. Valid: {}", s, names.join(", "))
            })
    }
}

/// The scenarios to run: all of them when `only` is empty, otherwise the
/// named ones in suite order without duplicates.
pub fn select(only: &[ScenarioId]) -> Vec<ScenarioId> {
    if only.is_empty() {
        return ScenarioId::ALL.to_vec();
    }
    ScenarioId::ALL
        .into_iter()
        .filter(|id| only.contains(id))
        .collect()
}

/// Name of the report row recording session resolution.
pub const LOGIN_ROW: &str = "login";

/// Resolve the session, then run `selected` in order.
///
/// Returns the report and, when the session could not be resolved, the
/// error that caused it. In that case every scenario row is skipped.
pub async fn run_suite(
    client: HrmClient,
    config: &Config,
    selected: &[ScenarioId],
) -> (ScenarioReport, Option<ClientError>) {
    let mut report = ScenarioReport::default();

    let started = Instant::now();
    let session = match client.resolve_session(config).await {
        Ok((session, source)) => {
            let how = match source {
                SessionSource::Configured => "configured session cookie",
                SessionSource::Login => "credential login",
            };
            info!("Session resolved via {}", how);
            report.push(ScenarioRow::new(LOGIN_ROW, Outcome::Passed, started.elapsed()));
            session
        }
        Err(e) => {
            warn!("Session could not be resolved: {}", e);
            report.push(ScenarioRow::new(
                LOGIN_ROW,
                Outcome::Failed {
                    message: e.to_string(),
                },
                started.elapsed(),
            ));
            for id in selected {
                report.push(ScenarioRow::new(
                    id.name(),
                    Outcome::Skipped {
                        reason: "no session".to_string(),
                    },
                    std::time::Duration::ZERO,
                ));
            }
            return (report, Some(e));
        }
    };

    let ctx = ScenarioContext {
        client,
        session,
        suite: config.suite.clone(),
    };

    for id in selected {
        info!("Running scenario {}", id);
        let started = Instant::now();
        let outcome = match id.run(&ctx).await {
            Ok(()) => Outcome::Passed,
            Err(e) => {
                warn!("Scenario {} failed: {:#}", id, e);
                Outcome::Failed {
                    message: format!("{:#}", e),
                }
            }
        };
        report.push(ScenarioRow::new(id.name(), outcome, started.elapsed()));
    }

    (report, None)
}

/// `<epoch millis>_<5 hex chars>`, unique enough to tell runs apart.
pub(crate) fn unique_suffix() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    format!("{}_{}", millis, &nonce[..5])
}
