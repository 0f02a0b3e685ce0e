//! Config loading, validation, and application to a slot store.

use super::model::Config;
use super::types::{ListSpec, ValueSpec};
use crate::error::{ComposerError, Result};
use crate::runner::Launcher;
use crate::slots::{Input, ListField, ScalarField, SlotStore, Value};
use std::path::Path;

impl Config {
    /// Load config from a YAML task file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ComposerError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ComposerError::ConfigError(format!(
                "failed to read task file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document parses as null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            ComposerError::ConfigError(format!("failed to parse task file YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate launch settings.
    ///
    /// Validation rules:
    /// - `java` and `main_class` must be non-empty
    /// - `classpath` entries must be non-empty and joinable into one classpath
    pub fn validate(&self) -> Result<()> {
        if self.java.trim().is_empty() {
            return Err(invalid("java must not be empty"));
        }

        if self.main_class.trim().is_empty() {
            return Err(invalid("main_class must not be empty"));
        }

        if self.classpath.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(invalid("classpath entries must be non-empty"));
        }

        if let Err(e) = std::env::join_paths(&self.classpath) {
            return Err(invalid(&format!("classpath cannot be joined: {}", e)));
        }

        Ok(())
    }

    /// The runner launch settings described by this config.
    pub fn launcher(&self) -> Launcher {
        Launcher {
            java: self.java.clone(),
            jvm_args: self.jvm_args.clone(),
            main_class: self.main_class.clone(),
            classpath: self.classpath.clone(),
        }
    }

    /// A fresh slot store with this config's default output directory.
    pub fn new_store(&self) -> SlotStore {
        SlotStore::new(self.default_output_directory.clone())
    }

    /// Assign every task field present in the file to `store`.
    ///
    /// Deferred sources are evaluated here, in field order.
    pub fn apply_task(&self, store: &mut SlotStore) -> Result<()> {
        let task = &self.task;
        let scalars = [
            (ScalarField::Apk, &task.apk),
            (ScalarField::TestApk, &task.test_apk),
            (ScalarField::OutputDirectory, &task.output_directory),
            (ScalarField::Shard, &task.shard),
            (ScalarField::VerboseOutput, &task.verbose_output),
            (ScalarField::DevicePattern, &task.device_pattern),
            (ScalarField::KeepOutput, &task.keep_output),
            (ScalarField::InstallTimeout, &task.install_timeout),
        ];
        for (field, spec) in scalars {
            if let Some(spec) = spec
                && let Some(input) = scalar_input(field.name(), spec)?
            {
                store.assign(field, input)?;
            }
        }

        let lists = [
            (ListField::Devices, &task.devices),
            (
                ListField::InstrumentationArguments,
                &task.instrumentation_arguments,
            ),
        ];
        for (field, spec) in lists {
            match spec {
                None => {}
                Some(ListSpec::Items(items)) => {
                    for item in items {
                        if let Some(input) = scalar_input(field.name(), item)? {
                            store.append(field, input)?;
                        }
                    }
                }
                Some(ListSpec::Single(ValueSpec::Env { env })) => {
                    store.append_all(field, Input::env(env.clone()))?;
                }
                Some(ListSpec::Single(ValueSpec::Command { command })) => {
                    store.append_all(field, Input::command(command.clone()))?;
                }
                Some(ListSpec::Single(literal)) => {
                    if let Some(input) = scalar_input(field.name(), literal)? {
                        store.append(field, input)?;
                    }
                }
            }
        }

        Ok(())
    }
}

fn invalid(msg: &str) -> ComposerError {
    ComposerError::ConfigError(format!("config validation failed: {}", msg))
}

fn scalar_input(field: &'static str, spec: &ValueSpec) -> Result<Option<Input<Value>>> {
    Ok(match spec {
        ValueSpec::Env { env } => Some(Input::env(env.clone())),
        ValueSpec::Command { command } => Some(Input::command(command.clone())),
        ValueSpec::Literal(yaml) => literal_value(field, yaml)?.map(Input::Immediate),
    })
}

/// Convert a YAML literal into a slot value. `null` means no value.
fn literal_value(field: &'static str, yaml: &serde_yaml::Value) -> Result<Option<Value>> {
    use serde_yaml::Value as Yaml;

    let mismatch = |found: &str| ComposerError::TypeMismatch {
        field,
        expected: "scalar value",
        found: found.to_string(),
    };

    match yaml {
        Yaml::Null => Ok(None),
        Yaml::Bool(b) => Ok(Some(Value::Bool(*b))),
        Yaml::Number(n) => n
            .as_i64()
            .map(|i| Some(Value::Int(i)))
            .ok_or_else(|| mismatch("non-integer number")),
        Yaml::String(s) => Ok(Some(Value::Str(s.clone()))),
        Yaml::Mapping(map) if map.len() == 1 => {
            let (key, value) = map.iter().next().ok_or_else(|| mismatch("mapping"))?;
            match (scalar_text(key), scalar_text(value)) {
                (Some(k), Some(v)) => Ok(Some(Value::Pair(k, v))),
                _ => Err(mismatch("nested mapping")),
            }
        }
        Yaml::Mapping(_) => Err(mismatch("mapping")),
        Yaml::Sequence(_) => Err(mismatch("list")),
        Yaml::Tagged(_) => Err(mismatch("tagged value")),
    }
}

fn scalar_text(yaml: &serde_yaml::Value) -> Option<String> {
    match yaml {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
