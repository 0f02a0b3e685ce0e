//! CLI argument parsing for composer-run.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// composer-run: launch the Composer instrumentation test runner.
///
/// Task fields come from a YAML task file (`composer.yaml` by default) and
/// from command-line flags, which are applied after the file:
/// scalar flags replace file values, list flags append to them.
#[derive(Parser, Debug)]
#[command(name = "composer-run")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Task file to load (default: composer.yaml, if it exists).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for composer-run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the test runner.
    ///
    /// Removes the previous output directory, launches the runner and waits
    /// for it, then prints the HTML report location if one was produced.
    Run(TaskArgs),

    /// Print the runner arguments without running anything.
    Args(PrintArgs),

    /// Print the HTML report location from a previous run.
    Report(TaskArgs),
}

/// Task fields and launch settings shared by every command.
#[derive(Args, Debug, Default)]
pub struct TaskArgs {
    /// APK under test.
    #[arg(long)]
    pub apk: Option<PathBuf>,

    /// Instrumentation test APK.
    #[arg(long)]
    pub test_apk: Option<PathBuf>,

    /// Directory for runner outputs (removed before each run).
    #[arg(long)]
    pub output_directory: Option<PathBuf>,

    /// Shard tests across devices.
    #[arg(long)]
    pub shard: Option<bool>,

    /// Ask the runner for verbose output.
    #[arg(long)]
    pub verbose_output: Option<bool>,

    /// Device serial to run on (repeatable, order preserved).
    #[arg(long = "device")]
    pub devices: Vec<String>,

    /// Pattern selecting devices by serial.
    #[arg(long)]
    pub device_pattern: Option<String>,

    /// Keep runner outputs on devices after the run.
    #[arg(long)]
    pub keep_output: Option<bool>,

    /// APK install timeout in seconds, forwarded to the runner.
    #[arg(long)]
    pub install_timeout: Option<u32>,

    /// Instrumentation argument as key=value (repeatable, order preserved).
    #[arg(long = "instrumentation-argument", value_name = "KEY=VALUE")]
    pub instrumentation_arguments: Vec<String>,

    /// Program used to start the JVM.
    #[arg(long)]
    pub java: Option<String>,

    /// Extra JVM argument (repeatable).
    #[arg(long = "jvm-arg", allow_hyphen_values = true)]
    pub jvm_args: Vec<String>,

    /// Runner main class.
    #[arg(long)]
    pub main_class: Option<String>,

    /// Classpath entry for the runner (repeatable, appended to the task file's).
    #[arg(long = "classpath")]
    pub classpath: Vec<PathBuf>,
}

/// Arguments for the `args` command.
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub task: TaskArgs,

    /// Print the arguments as a JSON array instead of one per line.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run_minimal() {
        let cli = Cli::try_parse_from(["composer-run", "run"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert!(args.apk.is_none());
            assert!(args.shard.is_none());
            assert!(args.devices.is_empty());
        } else {
            panic!("Expected Run command");
        }
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_run_full() {
        let cli = Cli::try_parse_from([
            "composer-run",
            "run",
            "--apk",
            "app.apk",
            "--test-apk",
            "app-test.apk",
            "--output-directory",
            "out",
            "--shard",
            "true",
            "--verbose-output",
            "false",
            "--device",
            "emulator-5554",
            "--device",
            "emulator-5556",
            "--device-pattern",
            "emulator-.+",
            "--keep-output",
            "true",
            "--install-timeout",
            "120",
            "--instrumentation-argument",
            "size=small",
            "--java",
            "/opt/jdk/bin/java",
            "--jvm-arg",
            "-Xmx1g",
            "--main-class",
            "com.example.Main",
            "--classpath",
            "composer.jar",
        ])
        .unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.apk, Some(PathBuf::from("app.apk")));
            assert_eq!(args.test_apk, Some(PathBuf::from("app-test.apk")));
            assert_eq!(args.output_directory, Some(PathBuf::from("out")));
            assert_eq!(args.shard, Some(true));
            assert_eq!(args.verbose_output, Some(false));
            assert_eq!(args.devices, vec!["emulator-5554", "emulator-5556"]);
            assert_eq!(args.device_pattern.as_deref(), Some("emulator-.+"));
            assert_eq!(args.keep_output, Some(true));
            assert_eq!(args.install_timeout, Some(120));
            assert_eq!(args.instrumentation_arguments, vec!["size=small"]);
            assert_eq!(args.java.as_deref(), Some("/opt/jdk/bin/java"));
            assert_eq!(args.jvm_args, vec!["-Xmx1g"]);
            assert_eq!(args.main_class.as_deref(), Some("com.example.Main"));
            assert_eq!(args.classpath, vec![PathBuf::from("composer.jar")]);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn parse_shard_requires_boolean() {
        let result = Cli::try_parse_from(["composer-run", "run", "--shard", "maybe"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_args_json_with_global_flags() {
        let cli = Cli::try_parse_from([
            "composer-run",
            "args",
            "--json",
            "-c",
            "task.yaml",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("task.yaml")));
        assert_eq!(cli.verbose, 2);
        if let Command::Args(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Args command");
        }
    }

    #[test]
    fn parse_report() {
        let cli = Cli::try_parse_from(["composer-run", "report", "--output-directory", "out"])
            .unwrap();
        if let Command::Report(args) = cli.command {
            assert_eq!(args.output_directory, Some(PathBuf::from("out")));
        } else {
            panic!("Expected Report command");
        }
    }
}
