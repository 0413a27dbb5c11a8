//! Configuration management for the HRM API suite.
//!
//! This crate provides types and loaders for managing HRM connection
//! settings, credentials, and suite expectations from environment
//! variables, a JSON config file, and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, FileConfig, SuiteConfig};
