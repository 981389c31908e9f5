//! Omnifile CLI library.
//!
//! Argument parsing, configuration and credential handling, command
//! execution and output formatting for the `omnifile` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use credentials::{resolve_api_key, Credentials, API_KEY_ENV};
pub use error::{CliError, Result};
pub use output::Formatter;
