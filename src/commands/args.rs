//! Implementation of the `composer-run args` command.
//!
//! Snapshots and renders the parameters without touching the output
//! directory or starting any process.

use super::prepare::prepare;
use crate::cli::PrintArgs;
use crate::error::{ComposerError, Result};
use crate::params::Params;
use std::path::Path;

/// Execute the `composer-run args` command.
pub fn cmd_args(config_path: Option<&Path>, args: &PrintArgs) -> Result<()> {
    let prepared = prepare(config_path, &args.task)?;
    let params = Params::snapshot(&prepared.store)?;
    println!("{}", render_args(&params, args.json)?);
    Ok(())
}

/// Runner arguments as one token per line, or as a JSON array.
pub(super) fn render_args(params: &Params, json: bool) -> Result<String> {
    let args = params.to_cli_args();
    if json {
        serde_json::to_string(&args).map_err(|e| {
            ComposerError::ConfigError(format!("failed to serialize arguments: {}", e))
        })
    } else {
        Ok(args.join("\n"))
    }
}
