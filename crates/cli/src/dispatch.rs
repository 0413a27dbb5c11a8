//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Load configuration for commands that talk to the server.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration merging (see `config_context`).
//!
//! Invariants:
//! - `list` never touches configuration, so it works without a base URL.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::load_config;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::List => commands::list::run(&cli.output),
        Commands::Run { only } => commands::run::run(load_config(&cli)?, only, &cli.output).await,
        Commands::Fetch {
            shape,
            path,
            method,
            body,
        } => {
            let config = load_config(&cli)?;
            commands::fetch::run(config, *shape, path, *method, body.as_deref()).await
        }
        Commands::Validate { endpoint, path } => {
            commands::validate::run(load_config(&cli)?, endpoint, path, &cli.output).await
        }
    }
}
