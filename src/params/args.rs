//! Rendering of [`Params`] into the runner's command-line arguments.
//!
//! Flag spellings are a compatibility contract with the runner and must not
//! change. Order is fixed: required fields, then optional scalars, then lists.

use super::model::Params;
use std::path::Path;

pub const APK: &str = "--apk";
pub const TEST_APK: &str = "--test-apk";
pub const OUTPUT_DIRECTORY: &str = "--output-directory";
pub const SHARD: &str = "--shard";
pub const VERBOSE_OUTPUT: &str = "--verbose-output";
pub const DEVICE_PATTERN: &str = "--device-pattern";
pub const KEEP_OUTPUT: &str = "--keep-output-on-exit";
pub const INSTALL_TIMEOUT: &str = "--install-timeout";
pub const DEVICE: &str = "--device";
pub const INSTRUMENTATION_ARGUMENT: &str = "--instrumentation-argument";

impl Params {
    /// Render the argument list passed to the runner after its main class.
    ///
    /// Absent optional values produce no tokens at all.
    pub fn to_cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        push(&mut args, APK, path_arg(&self.apk));
        push(&mut args, TEST_APK, path_arg(&self.test_apk));
        push(&mut args, OUTPUT_DIRECTORY, path_arg(&self.output_directory));

        if let Some(shard) = self.shard {
            push(&mut args, SHARD, shard.to_string());
        }
        if let Some(verbose) = self.verbose_output {
            push(&mut args, VERBOSE_OUTPUT, verbose.to_string());
        }
        if let Some(pattern) = &self.device_pattern {
            push(&mut args, DEVICE_PATTERN, pattern.clone());
        }
        if let Some(keep) = self.keep_output {
            push(&mut args, KEEP_OUTPUT, keep.to_string());
        }
        if let Some(timeout) = self.install_timeout {
            push(&mut args, INSTALL_TIMEOUT, timeout.to_string());
        }

        for device in &self.devices {
            push(&mut args, DEVICE, device.clone());
        }
        for (key, value) in &self.instrumentation_arguments {
            push(&mut args, INSTRUMENTATION_ARGUMENT, format!("{}={}", key, value));
        }

        args
    }
}

fn push(args: &mut Vec<String>, flag: &str, value: String) {
    args.push(flag.to_string());
    args.push(value);
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
