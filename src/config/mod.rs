//! Task file model for composer-run.
//!
//! This module defines the Config struct that represents `composer.yaml`:
//! runner launch settings plus the task's field values, each either a YAML
//! literal or a deferred source evaluated when the file is applied.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{ListSpec, ValueSpec};

/// Task file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "composer.yaml";
