//! Runner process lifecycle.
//!
//! One execution, in order:
//!
//! 1. Snapshot the slot store into [`Params`] (fails before touching anything)
//! 2. Remove the previous output directory
//! 3. Launch the runner and wait for it to exit
//! 4. Print the HTML report location if one exists, on every exit path of 3
//! 5. Return the runner's outcome

mod launcher;
mod output;
pub mod report;


pub use launcher::{DEFAULT_JAVA, DEFAULT_MAIN_CLASS, Launcher};
pub use output::reset_output_directory;

use crate::error::Result;
use crate::params::Params;
use crate::slots::SlotStore;
use report::ReportOnExit;
use std::io::Write;

/// Execute the runner for the current contents of `store`.
///
/// Report discovery writes to `sink` after the runner exits, whether it
/// succeeded, failed, or could not be spawned. The runner's own failure is
/// returned afterwards, unchanged.
pub fn execute<W: Write + ?Sized>(
    store: &SlotStore,
    launcher: &Launcher,
    sink: &mut W,
) -> Result<Params> {
    let params = Params::snapshot(store)?;
    reset_output_directory(&params.output_directory)?;

    let args = params.to_cli_args();
    {
        let _report = ReportOnExit::new(&params.output_directory, sink);
        launcher.launch(&args)?;
    }

    Ok(params)
}
