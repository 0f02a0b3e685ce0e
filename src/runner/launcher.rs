//! Runner subprocess launch.

use crate::error::{ComposerError, Result};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// Main class of the Composer runner.
pub const DEFAULT_MAIN_CLASS: &str = "com.gojuno.composer.MainKt";

/// Program used to start the JVM.
pub const DEFAULT_JAVA: &str = "java";

/// How to start the runner: a JVM, its classpath, and a fixed entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub java: String,
    pub jvm_args: Vec<String>,
    pub main_class: String,
    /// Resolved by the caller and passed through unmodified.
    pub classpath: Vec<PathBuf>,
}

impl Default for Launcher {
    fn default() -> Self {
        Self {
            java: DEFAULT_JAVA.to_string(),
            jvm_args: Vec::new(),
            main_class: DEFAULT_MAIN_CLASS.to_string(),
            classpath: Vec::new(),
        }
    }
}

impl Launcher {
    /// Build `<java> [jvm_args] [-cp <classpath>] <main_class> <args>`.
    pub fn command(&self, args: &[String]) -> Result<Command> {
        let mut command = Command::new(&self.java);
        command.args(&self.jvm_args);

        if !self.classpath.is_empty() {
            let joined = std::env::join_paths(&self.classpath).map_err(|e| {
                ComposerError::RunnerLaunchFailed {
                    program: self.java.clone(),
                    reason: format!("invalid classpath: {}", e),
                }
            })?;
            command.arg("-cp").arg(joined);
        }

        command.arg(&self.main_class).args(args);
        Ok(command)
    }

    /// Run the runner to completion, blocking the calling thread.
    ///
    /// Standard streams are inherited so runner output reaches the terminal.
    pub fn launch(&self, args: &[String]) -> Result<()> {
        let mut command = self.command(args)?;
        debug!(command = ?command, "launching runner");

        let status = command
            .status()
            .map_err(|e| ComposerError::RunnerLaunchFailed {
                program: self.java.clone(),
                reason: e.to_string(),
            })?;

        info!(status = %status, "runner finished");
        if status.success() {
            Ok(())
        } else {
            Err(ComposerError::RunnerExecutionFailed {
                status: describe_status(status),
            })
        }
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(command: &Command) -> Vec<String> {
        std::iter::once(command.get_program())
            .chain(command.get_args())
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_command_without_classpath() {
        let launcher = Launcher::default();
        let command = launcher.command(&["--apk".to_string(), "a.apk".to_string()]).unwrap();
        assert_eq!(
            argv(&command),
            vec!["java", "com.gojuno.composer.MainKt", "--apk", "a.apk"]
        );
    }

    #[test]
    fn test_command_with_jvm_args_and_classpath() {
        let launcher = Launcher {
            java: "/opt/jdk/bin/java".to_string(),
            jvm_args: vec!["-Xmx1g".to_string()],
            main_class: "com.example.Main".to_string(),
            classpath: vec![PathBuf::from("libs/composer.jar"), PathBuf::from("libs/rx.jar")],
        };
        let command = launcher.command(&[]).unwrap();

        let expected_cp = std::env::join_paths(["libs/composer.jar", "libs/rx.jar"])
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert_eq!(
            argv(&command),
            vec![
                "/opt/jdk/bin/java".to_string(),
                "-Xmx1g".to_string(),
                "-cp".to_string(),
                expected_cp,
                "com.example.Main".to_string(),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_classpath_entry_with_separator_rejected() {
        let launcher = Launcher {
            classpath: vec![PathBuf::from("a:b.jar")],
            ..Default::default()
        };
        let err = launcher.command(&[]).unwrap_err();
        assert!(matches!(err, ComposerError::RunnerLaunchFailed { .. }));
    }

    #[test]
    fn test_launch_missing_program() {
        let launcher = Launcher {
            java: "nonexistent_java_xyz_123".to_string(),
            ..Default::default()
        };
        let err = launcher.launch(&[]).unwrap_err();
        assert!(matches!(err, ComposerError::RunnerLaunchFailed { .. }));
        assert!(err.to_string().contains("nonexistent_java_xyz_123"));
    }
}
