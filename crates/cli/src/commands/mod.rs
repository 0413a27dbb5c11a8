//! CLI command implementations.

pub mod fetch;
pub mod list;
pub mod run;
pub mod validate;

use anyhow::{Context, Result};
use hrm_client::HrmClient;
use hrm_config::Config;

/// Build an [`HrmClient`] from the merged configuration.
pub fn build_client_from_config(config: &Config) -> Result<HrmClient> {
    HrmClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build HRM client")
}
