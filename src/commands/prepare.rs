//! Shared setup: load the task file and build the slot store.

use crate::cli::TaskArgs;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::slots::{Input, ListField, ScalarField, SlotStore, Value};
use std::path::Path;
use tracing::debug;

/// Config and populated store for one command invocation.
pub(super) struct Prepared {
    pub config: Config,
    pub store: SlotStore,
}

/// Load the task file, apply it, then apply command-line overrides.
///
/// An explicit `config_path` must exist. Without one, `composer.yaml` in the
/// working directory is used if present, otherwise defaults.
pub(super) fn prepare(config_path: Option<&Path>, args: &TaskArgs) -> Result<Prepared> {
    let mut config = load_config(config_path)?;
    apply_launch_overrides(&mut config, args);
    config.validate()?;

    let mut store = config.new_store();
    config.apply_task(&mut store)?;
    apply_task_overrides(&mut store, args)?;

    Ok(Prepared { config, store })
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading task file");
            Config::load(path)
        }
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            debug!(path = DEFAULT_CONFIG_FILE, "loading default task file");
            Config::load(DEFAULT_CONFIG_FILE)
        }
        None => Ok(Config::default()),
    }
}

fn apply_launch_overrides(config: &mut Config, args: &TaskArgs) {
    if let Some(java) = &args.java {
        config.java = java.clone();
    }
    if let Some(main_class) = &args.main_class {
        config.main_class = main_class.clone();
    }
    config.jvm_args.extend(args.jvm_args.iter().cloned());
    config.classpath.extend(args.classpath.iter().cloned());
}

/// Scalar flags replace task-file values; list flags append to them.
pub(super) fn apply_task_overrides(store: &mut SlotStore, args: &TaskArgs) -> Result<()> {
    if let Some(apk) = &args.apk {
        store.assign(ScalarField::Apk, Input::value(apk.clone()))?;
    }
    if let Some(test_apk) = &args.test_apk {
        store.assign(ScalarField::TestApk, Input::value(test_apk.clone()))?;
    }
    if let Some(dir) = &args.output_directory {
        store.assign(ScalarField::OutputDirectory, Input::value(dir.clone()))?;
    }
    if let Some(shard) = args.shard {
        store.assign(ScalarField::Shard, Input::value(shard))?;
    }
    if let Some(verbose) = args.verbose_output {
        store.assign(ScalarField::VerboseOutput, Input::value(verbose))?;
    }
    if let Some(pattern) = &args.device_pattern {
        store.assign(ScalarField::DevicePattern, Input::value(pattern.as_str()))?;
    }
    if let Some(keep) = args.keep_output {
        store.assign(ScalarField::KeepOutput, Input::value(keep))?;
    }
    if let Some(timeout) = args.install_timeout {
        store.assign(ScalarField::InstallTimeout, Input::value(i64::from(timeout)))?;
    }

    if !args.devices.is_empty() {
        let devices = args.devices.iter().cloned().map(Value::Str).collect();
        store.append_all(ListField::Devices, Input::Immediate(devices))?;
    }
    if !args.instrumentation_arguments.is_empty() {
        let pairs = args
            .instrumentation_arguments
            .iter()
            .cloned()
            .map(Value::Str)
            .collect();
        store.append_all(ListField::InstrumentationArguments, Input::Immediate(pairs))?;
    }

    Ok(())
}
