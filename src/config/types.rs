//! Task-file value shapes and defaults.
//!
//! Field values in a task file are either YAML literals or references to a
//! deferred source (`{ env: NAME }`, `{ command: "..." }`).

use crate::runner::{DEFAULT_JAVA, DEFAULT_MAIN_CLASS};
use crate::slots::DEFAULT_OUTPUT_DIR;
use serde::Deserialize;
use std::path::PathBuf;

/// A single field value as written in the task file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValueSpec {
    /// Read from an environment variable at load time.
    Env { env: String },
    /// Captured from a command's stdout at load time.
    Command { command: String },
    /// Any YAML literal (string, bool, integer, or single-entry mapping).
    Literal(serde_yaml::Value),
}

/// A list field value: a sequence of items, or one item / deferred collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListSpec {
    Items(Vec<ValueSpec>),
    Single(ValueSpec),
}

// Default value functions for serde
pub(crate) fn default_java() -> String {
    DEFAULT_JAVA.to_string()
}
pub(crate) fn default_main_class() -> String {
    DEFAULT_MAIN_CLASS.to_string()
}
pub(crate) fn default_output_directory() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
