//! HTML report discovery after a runner invocation.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Location of the report index relative to the output directory.
pub fn report_index(output_directory: &Path) -> PathBuf {
    output_directory.join("html-report").join("index.html")
}

/// Absolute path of the report index, if the runner produced one.
pub fn find_report(output_directory: &Path) -> Option<PathBuf> {
    let index = report_index(output_directory);
    if !index.exists() {
        return None;
    }
    Some(std::path::absolute(&index).unwrap_or(index))
}

pub fn report_message(index: &Path) -> String {
    format!("Composer Html Report: file://{}", index.display())
}

/// Print the report location to `sink` if the report exists.
///
/// Best-effort: write failures are ignored. Returns whether a report was found.
pub fn emit_report<W: Write + ?Sized>(output_directory: &Path, sink: &mut W) -> bool {
    match find_report(output_directory) {
        Some(index) => {
            let _ = writeln!(sink, "\n{}\n", report_message(&index));
            true
        }
        None => false,
    }
}

/// Emits the report location when dropped.
///
/// Hold one across the runner invocation so discovery happens on every exit
/// path, including early returns through `?`.
pub struct ReportOnExit<'a, W: Write + ?Sized> {
    output_directory: &'a Path,
    sink: &'a mut W,
}

impl<'a, W: Write + ?Sized> ReportOnExit<'a, W> {
    pub fn new(output_directory: &'a Path, sink: &'a mut W) -> Self {
        Self {
            output_directory,
            sink,
        }
    }
}

impl<W: Write + ?Sized> Drop for ReportOnExit<'_, W> {
    fn drop(&mut self) {
        emit_report(self.output_directory, &mut *self.sink);
    }
}
