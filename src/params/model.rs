//! Immutable parameter snapshot taken from a slot store.

use crate::error::{ComposerError, Result};
use crate::slots::{ListField, ScalarField, SlotStore, Value};
use std::path::PathBuf;

/// Every resolved runner parameter for one execution.
///
/// Owns copies of the store's values, so later store mutation does not
/// affect a snapshot already taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub apk: PathBuf,
    pub test_apk: PathBuf,
    pub shard: Option<bool>,
    pub output_directory: PathBuf,
    pub instrumentation_arguments: Vec<(String, String)>,
    pub verbose_output: Option<bool>,
    pub devices: Vec<String>,
    pub device_pattern: Option<String>,
    pub keep_output: Option<bool>,
    pub install_timeout: Option<u64>,
}

impl Params {
    /// Freeze the current contents of `store`.
    ///
    /// # Returns
    ///
    /// * `Ok(Params)` - All required fields resolved
    /// * `Err(ComposerError::MissingRequiredField)` - apk, test apk, or output directory unresolved
    pub fn snapshot(store: &SlotStore) -> Result<Self> {
        let required = |field: ScalarField| {
            store
                .path(field)
                .map(PathBuf::from)
                .ok_or(ComposerError::MissingRequiredField(field.name()))
        };

        Ok(Self {
            apk: required(ScalarField::Apk)?,
            test_apk: required(ScalarField::TestApk)?,
            shard: store.bool(ScalarField::Shard),
            output_directory: required(ScalarField::OutputDirectory)?,
            instrumentation_arguments: store
                .list(ListField::InstrumentationArguments)
                .iter()
                .filter_map(|v| match v {
                    Value::Pair(k, v) => Some((k.clone(), v.clone())),
                    _ => None,
                })
                .collect(),
            verbose_output: store.bool(ScalarField::VerboseOutput),
            devices: store
                .list(ListField::Devices)
                .iter()
                .filter_map(|v| match v {
                    Value::Str(s) => Some(s.clone()),
                    _ => None,
                })
                .collect(),
            device_pattern: store.str(ScalarField::DevicePattern).map(str::to_string),
            keep_output: store.bool(ScalarField::KeepOutput),
            install_timeout: store
                .int(ScalarField::InstallTimeout)
                .and_then(|i| u64::try_from(i).ok()),
        })
    }
}
