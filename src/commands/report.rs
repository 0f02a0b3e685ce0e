//! Implementation of the `composer-run report` command.

use super::prepare::prepare;
use crate::cli::TaskArgs;
use crate::error::{ComposerError, Result};
use crate::runner::report::{emit_report, report_index};
use crate::slots::ScalarField;
use std::path::Path;

/// Execute the `composer-run report` command.
///
/// Succeeds whether or not a report exists.
pub fn cmd_report(config_path: Option<&Path>, args: &TaskArgs) -> Result<()> {
    let prepared = prepare(config_path, args)?;
    let output_directory = prepared
        .store
        .path(ScalarField::OutputDirectory)
        .ok_or(ComposerError::MissingRequiredField(
            ScalarField::OutputDirectory.name(),
        ))?;

    if !emit_report(output_directory, &mut std::io::stdout()) {
        eprintln!(
            "No Composer Html Report at {}",
            report_index(output_directory).display()
        );
    }
    Ok(())
}
