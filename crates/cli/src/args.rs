//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and `HRM_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration sources (see `config_context` module).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hrm_client::{HttpMethod, Shape};

use crate::scenarios::ScenarioId;

#[derive(Parser)]
#[command(name = "hrm-api")]
#[command(about = "API test suite for an HRM web application", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  hrm-api -b https://hrm.example.com/orangehrm-5.7 -u Admin -p admin123 run\n  hrm-api run --only employee-count --only vacancies -o json\n  hrm-api fetch employee-count /web/index.php/api/v2/pim/employees/count\n  hrm-api validate GetLeaveType '/web/index.php/api/v2/leave/leave-types?limit=0'\n"
)]
pub struct Cli {
    /// Base URL of the HRM deployment (e.g., https://hrm.example.com/orangehrm-5.7)
    #[arg(short, long, global = true, env = "HRM_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for credential login
    #[arg(short, long, global = true, env = "HRM_USERNAME")]
    pub username: Option<String>,

    /// Password for credential login
    #[arg(short, long, global = true, env = "HRM_PASSWORD")]
    pub password: Option<String>,

    /// Pre-issued session cookie value (skips login)
    #[arg(long, global = true, env = "HRM_SESSION_COOKIE")]
    pub session_cookie: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "HRM_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Status line every successful scenario response must carry
    #[arg(long, global = true, env = "HRM_EXPECTED_STATUS_LINE")]
    pub expected_status_line: Option<String>,

    /// Path to a JSON configuration file.
    ///
    /// Can also be set via HRM_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "HRM_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in, then run the endpoint scenarios in order
    Run {
        /// Run only the named scenario (repeatable)
        #[arg(long, value_name = "NAME")]
        only: Vec<ScenarioId>,
    },

    /// List the scenarios in run order
    List,

    /// Send one request and print the extracted payload as JSON
    Fetch {
        /// Extraction shape (e.g., holidays, employee-count, none)
        shape: Shape,

        /// Path relative to the base URL, including any query string
        path: String,

        /// HTTP method
        #[arg(short, long, default_value = "GET")]
        method: HttpMethod,

        /// JSON request body
        #[arg(long, value_name = "JSON")]
        body: Option<String>,
    },

    /// Send one GET request and validate the response shape
    Validate {
        /// Endpoint name (e.g., GetLeaveData, GetVacancies)
        endpoint: String,

        /// Path relative to the base URL, including any query string
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_only() {
        let cli = Cli::try_parse_from([
            "hrm-api",
            "run",
            "--only",
            "employee-count",
            "--only",
            "workweek",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { only } => {
                assert_eq!(only, vec![ScenarioId::EmployeeCount, ScenarioId::Workweek])
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::try_parse_from([
            "hrm-api",
            "fetch",
            "holidays",
            "/web/index.php/api/v2/leave/holidays",
            "--method",
            "post",
        ])
        .unwrap();
        match cli.command {
            Commands::Fetch { shape, method, .. } => {
                assert_eq!(shape, Shape::Holidays);
                assert_eq!(method, HttpMethod::Post);
            }
            _ => panic!("expected fetch"),
        }
    }

    #[test]
    fn test_unknown_scenario_rejected() {
        assert!(Cli::try_parse_from(["hrm-api", "run", "--only", "payroll"]).is_err());
    }
}
