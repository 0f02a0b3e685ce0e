//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;
use std::path::PathBuf;

/// Contents of a `composer.yaml` task file.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Launch settings
    // =========================================================================
    /// Program used to start the JVM (default: "java").
    #[serde(default = "default_java")]
    pub java: String,

    /// Extra JVM arguments placed before `-cp`.
    pub jvm_args: Vec<String>,

    /// Runner entry point.
    #[serde(default = "default_main_class")]
    pub main_class: String,

    /// Runner classpath, passed through unmodified.
    pub classpath: Vec<PathBuf>,

    /// Output directory used when the task does not set one.
    #[serde(default = "default_output_directory")]
    pub default_output_directory: PathBuf,

    // =========================================================================
    // Task fields
    // =========================================================================
    pub task: TaskSpec,
}

/// Runner parameters as written in the task file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaskSpec {
    pub apk: Option<ValueSpec>,
    pub test_apk: Option<ValueSpec>,
    pub output_directory: Option<ValueSpec>,
    pub shard: Option<ValueSpec>,
    pub verbose_output: Option<ValueSpec>,
    pub device_pattern: Option<ValueSpec>,
    pub keep_output: Option<ValueSpec>,
    pub install_timeout: Option<ValueSpec>,
    pub devices: Option<ListSpec>,
    pub instrumentation_arguments: Option<ListSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            java: default_java(),
            jvm_args: Vec::new(),
            main_class: default_main_class(),
            classpath: Vec::new(),
            default_output_directory: default_output_directory(),
            task: TaskSpec::default(),
        }
    }
}
