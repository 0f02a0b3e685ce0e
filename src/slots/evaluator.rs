//! Property evaluator: resolves immediate or deferred inputs into slots.
//!
//! Deferred inputs are evaluated eagerly, at assignment time. A deferred
//! source that yields no value leaves the slot untouched; required fields are
//! checked later, when the parameters are snapshotted.

use super::store::{ListField, ScalarField, SlotStore};
use super::value::{Deferred, FromDeferredText, Input, SlotKind, Value};
use crate::error::{ComposerError, Result};
use std::process::Command;
use tracing::{debug, info};

impl SlotStore {
    /// Resolve `input` and store it in `field`, replacing any previous value.
    pub fn assign(&mut self, field: ScalarField, input: Input<Value>) -> Result<()> {
        let Some(value) = resolve(field.name(), field.kind(), input)? else {
            info!(field = field.name(), "deferred value resolved to nothing; slot unchanged");
            return Ok(());
        };

        let value = value.coerce(field.name(), field.kind())?;
        check_range(field, &value)?;

        debug!(field = field.name(), value = %value, "assigned");
        self.put(field, value);
        Ok(())
    }

    /// Resolve `input` and add it to the end of `field`.
    pub fn append(&mut self, field: ListField, input: Input<Value>) -> Result<()> {
        let Some(value) = resolve(field.name(), field.kind(), input)? else {
            info!(field = field.name(), "deferred value resolved to nothing; list unchanged");
            return Ok(());
        };

        let value = value.coerce(field.name(), field.kind())?;
        debug!(field = field.name(), value = %value, "appended");
        self.extend(field, vec![value]);
        Ok(())
    }

    /// Resolve a collection and append each element in iteration order.
    ///
    /// Either every element is appended or none is.
    pub fn append_all(&mut self, field: ListField, input: Input<Vec<Value>>) -> Result<()> {
        let Some(values) = resolve(field.name(), field.kind(), input)? else {
            info!(field = field.name(), "deferred collection resolved to nothing; list unchanged");
            return Ok(());
        };

        let values = values
            .into_iter()
            .map(|v| v.coerce(field.name(), field.kind()))
            .collect::<Result<Vec<_>>>()?;

        debug!(field = field.name(), count = values.len(), "appended all");
        self.extend(field, values);
        Ok(())
    }
}

/// Turn an input into a concrete value, evaluating deferred sources now.
///
/// Text from the environment or a command is read according to `kind`.
pub fn resolve<T: FromDeferredText>(
    field: &'static str,
    kind: SlotKind,
    input: Input<T>,
) -> Result<Option<T>> {
    match input {
        Input::Immediate(v) => Ok(Some(v)),
        Input::Deferred(Deferred::Computed(f)) => f(),
        Input::Deferred(Deferred::Env(name)) => match std::env::var(&name) {
            Ok(raw) => Ok(T::from_env_text(&raw, kind)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ComposerError::DeferredEvaluationFailed {
                field,
                reason: format!("environment variable '{}': {}", name, e),
            }),
        },
        Input::Deferred(Deferred::Command(command)) => {
            let stdout = run_capture(field, &command)?;
            Ok(T::from_stdout_text(&stdout, kind))
        }
    }
}

fn run_capture(field: &'static str, command: &str) -> Result<String> {
    let fail = |reason: String| ComposerError::DeferredEvaluationFailed { field, reason };

    let args = shell_words::split(command)
        .map_err(|e| fail(format!("failed to parse command '{}': {}", command, e)))?;
    let Some((program, rest)) = args.split_first() else {
        return Err(fail("command is empty".to_string()));
    };

    debug!(field, command, "evaluating deferred command");
    let output = Command::new(program)
        .args(rest)
        .output()
        .map_err(|e| fail(format!("failed to execute '{}': {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(fail(format!(
            "command '{}' exited with {}: {}",
            command,
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn check_range(field: ScalarField, value: &Value) -> Result<()> {
    match (field, value) {
        (ScalarField::InstallTimeout, Value::Int(i)) if *i < 0 => {
            Err(ComposerError::TypeMismatch {
                field: field.name(),
                expected: "non-negative integer",
                found: i.to_string(),
            })
        }
        _ => Ok(()),
    }
}
