//! Typed slot store: one slot per task field, scalar or list-valued.

use super::value::{SlotKind, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default runner output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "composer-output";

/// Fields that hold at most one value. Last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScalarField {
    Apk,
    TestApk,
    OutputDirectory,
    Shard,
    VerboseOutput,
    DevicePattern,
    KeepOutput,
    InstallTimeout,
}

impl ScalarField {
    /// Field name as it appears in task files and error messages.
    pub fn name(self) -> &'static str {
        match self {
            ScalarField::Apk => "apk",
            ScalarField::TestApk => "test_apk",
            ScalarField::OutputDirectory => "output_directory",
            ScalarField::Shard => "shard",
            ScalarField::VerboseOutput => "verbose_output",
            ScalarField::DevicePattern => "device_pattern",
            ScalarField::KeepOutput => "keep_output",
            ScalarField::InstallTimeout => "install_timeout",
        }
    }

    pub fn kind(self) -> SlotKind {
        match self {
            ScalarField::Apk | ScalarField::TestApk | ScalarField::OutputDirectory => {
                SlotKind::Path
            }
            ScalarField::Shard | ScalarField::VerboseOutput | ScalarField::KeepOutput => {
                SlotKind::Bool
            }
            ScalarField::DevicePattern => SlotKind::Str,
            ScalarField::InstallTimeout => SlotKind::Int,
        }
    }
}

/// Fields that accumulate an ordered sequence of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ListField {
    Devices,
    InstrumentationArguments,
}

impl ListField {
    pub fn name(self) -> &'static str {
        match self {
            ListField::Devices => "devices",
            ListField::InstrumentationArguments => "instrumentation_arguments",
        }
    }

    /// Declared type of each element.
    pub fn kind(self) -> SlotKind {
        match self {
            ListField::Devices => SlotKind::Str,
            ListField::InstrumentationArguments => SlotKind::Pair,
        }
    }
}

/// Mutable holder for every task field prior to execution.
///
/// Values stored here have already been checked against their slot's
/// declared kind by the evaluator.
#[derive(Debug, Clone, Default)]
pub struct SlotStore {
    scalars: BTreeMap<ScalarField, Value>,
    lists: BTreeMap<ListField, Vec<Value>>,
}

impl SlotStore {
    /// Create a store with the output directory preset to `default_output_dir`.
    pub fn new(default_output_dir: impl Into<PathBuf>) -> Self {
        let mut store = Self::default();
        store.scalars.insert(
            ScalarField::OutputDirectory,
            Value::Path(default_output_dir.into()),
        );
        store
    }

    pub fn get(&self, field: ScalarField) -> Option<&Value> {
        self.scalars.get(&field)
    }

    pub fn list(&self, field: ListField) -> &[Value] {
        self.lists.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove any value held by `field`, including a preset default.
    pub fn clear(&mut self, field: ScalarField) {
        self.scalars.remove(&field);
    }

    pub(super) fn put(&mut self, field: ScalarField, value: Value) {
        self.scalars.insert(field, value);
    }

    pub(super) fn extend(&mut self, field: ListField, values: Vec<Value>) {
        self.lists.entry(field).or_default().extend(values);
    }

    pub fn path(&self, field: ScalarField) -> Option<&Path> {
        match self.get(field) {
            Some(Value::Path(p)) => Some(p),
            _ => None,
        }
    }

    pub fn bool(&self, field: ScalarField) -> Option<bool> {
        match self.get(field) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn str(&self, field: ScalarField) -> Option<&str> {
        match self.get(field) {
            Some(Value::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn int(&self, field: ScalarField) -> Option<i64> {
        match self.get(field) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        }
    }
}
