//! Configuration assembly for command execution.
//!
//! Responsibilities:
//! - Merge the config file, `HRM_*` environment variables, and CLI flags into a
//!   validated [`Config`].
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before parsing).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - Precedence, lowest to highest: config file, environment, CLI flags.
//! - Blank `--config-path` values are ignored so the env var can apply.

use std::time::Duration;

use anyhow::{Context, Result};
use hrm_config::{Config, ConfigLoader};

use crate::args::Cli;

/// Build the configuration for a command that talks to the server.
pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?;
    loader = loader
        .from_file()
        .context("Failed to load configuration file")?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref cookie) = cli.session_cookie {
        loader = loader.with_session_cookie(cookie.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(ref line) = cli.expected_status_line {
        loader = loader.with_expected_status_line(line.clone());
    }

    loader.build().context("Failed to build configuration")
}
