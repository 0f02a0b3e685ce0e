//! Implementation of the `composer-run run` command.

use super::prepare::prepare;
use crate::cli::TaskArgs;
use crate::error::Result;
use crate::runner;
use std::path::Path;
use tracing::info;

/// Execute the `composer-run run` command.
pub fn cmd_run(config_path: Option<&Path>, args: &TaskArgs) -> Result<()> {
    let prepared = prepare(config_path, args)?;
    let launcher = prepared.config.launcher();

    let params = runner::execute(&prepared.store, &launcher, &mut std::io::stdout())?;
    info!(output = %params.output_directory.display(), "runner succeeded");
    Ok(())
}
