//! Exit code constants for the composer-run CLI.
//!
//! - 0: Success
//! - 1: User error (bad task description, type mismatch, missing field)
//! - 3: Output directory could not be reset
//! - 4: Runner failed to launch or exited unsuccessfully

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid task file, mistyped value, or unresolved required field.
pub const USER_ERROR: i32 = 1;

/// The previous output directory could not be fully removed.
pub const OUTPUT_CLEANUP_FAILURE: i32 = 3;

/// The runner could not be spawned or exited with a non-success status.
pub const RUNNER_FAILURE: i32 = 4;
