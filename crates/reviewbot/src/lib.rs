//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use config_validator::validate_configuration;
use reviewbot_config::Config;
use reviewbot_logging::configure_logging;

pub(crate) mod args;
mod commands;
pub(crate) mod config_validator;

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    let config = Config::from_env(env!("CARGO_PKG_VERSION").into());
    configure_logging(&config)?;
    validate_configuration(&config)?;

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
