//! Error types for the composer-run CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for composer-run operations.
///
/// Each variant maps to a specific exit code. None of them are retried.
#[derive(Error, Debug)]
pub enum ComposerError {
    /// A resolved value does not fit the slot it was assigned to.
    #[error("type mismatch for '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A required field had no value when the parameters were snapshotted.
    #[error("missing required field '{0}'")]
    MissingRequiredField(&'static str),

    /// A deferred value (environment lookup or command) could not be evaluated.
    #[error("failed to evaluate deferred value for '{field}': {reason}")]
    DeferredEvaluationFailed { field: &'static str, reason: String },

    /// The task file could not be read, parsed, or validated.
    #[error("{0}")]
    ConfigError(String),

    /// The previous output directory survived a recursive delete.
    #[error("failed to remove existing outputs at '{}': {reason}", .path.display())]
    OutputCleanupFailed { path: PathBuf, reason: String },

    /// The runner process could not be started at all.
    #[error("failed to launch runner '{program}': {reason}")]
    RunnerLaunchFailed { program: String, reason: String },

    /// The runner process terminated with a non-success status.
    #[error("runner exited unsuccessfully ({status})")]
    RunnerExecutionFailed { status: String },
}

impl ComposerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ComposerError::TypeMismatch { .. }
            | ComposerError::MissingRequiredField(_)
            | ComposerError::DeferredEvaluationFailed { .. }
            | ComposerError::ConfigError(_) => exit_codes::USER_ERROR,
            ComposerError::OutputCleanupFailed { .. } => exit_codes::OUTPUT_CLEANUP_FAILURE,
            ComposerError::RunnerLaunchFailed { .. }
            | ComposerError::RunnerExecutionFailed { .. } => exit_codes::RUNNER_FAILURE,
        }
    }
}

/// Result type alias for composer-run operations.
pub type Result<T> = std::result::Result<T, ComposerError>;
