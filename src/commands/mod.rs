//! Command implementations for composer-run.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command starts from the same prepared state: the
//! task file applied to a fresh slot store, then the command-line overrides.

mod args;
mod prepare;
mod report;
mod run;


use crate::cli::{Cli, Command};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Run(args) => run::cmd_run(config_path, &args),
        Command::Args(args) => args::cmd_args(config_path, &args),
        Command::Report(args) => report::cmd_report(config_path, &args),
    }
}
