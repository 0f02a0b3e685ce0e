//! Dynamic values and the immediate/deferred input shapes accepted by slots.

use crate::error::{ComposerError, Result};
use std::fmt;
use std::path::PathBuf;

/// Declared type of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Path,
    Bool,
    Str,
    Int,
    Pair,
}

impl SlotKind {
    /// Human-readable type name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            SlotKind::Path => "path",
            SlotKind::Bool => "boolean",
            SlotKind::Str => "string",
            SlotKind::Int => "integer",
            SlotKind::Pair => "key=value pair",
        }
    }
}

/// A configuration value before it has been checked against a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Path(PathBuf),
    Bool(bool),
    Str(String),
    Int(i64),
    Pair(String, String),
}

impl Value {
    /// Name of this value's own type, for mismatch reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Path(_) => SlotKind::Path.name(),
            Value::Bool(_) => SlotKind::Bool.name(),
            Value::Str(_) => SlotKind::Str.name(),
            Value::Int(_) => SlotKind::Int.name(),
            Value::Pair(..) => SlotKind::Pair.name(),
        }
    }

    /// Interpret text produced by a deferred source for a slot of `kind`.
    ///
    /// Integer and boolean slots parse the text; every other slot keeps it
    /// verbatim, so `0123` stays `0123` for a device serial. Text that does
    /// not parse stays a string and fails the later type check.
    pub fn from_text(text: &str, kind: SlotKind) -> Self {
        match kind {
            SlotKind::Int => text
                .parse::<i64>()
                .map(Value::Int)
                .unwrap_or_else(|_| Value::Str(text.to_string())),
            SlotKind::Bool => match text {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::Str(text.to_string()),
            },
            SlotKind::Path | SlotKind::Str | SlotKind::Pair => Value::Str(text.to_string()),
        }
    }

    /// Check this value against `kind`, applying the few permitted coercions.
    ///
    /// Strings coerce into paths, and `key=value` strings coerce into pairs.
    pub fn coerce(self, field: &'static str, kind: SlotKind) -> Result<Value> {
        match (kind, self) {
            (SlotKind::Path, v @ Value::Path(_)) => Ok(v),
            (SlotKind::Path, Value::Str(s)) => Ok(Value::Path(PathBuf::from(s))),
            (SlotKind::Bool, v @ Value::Bool(_)) => Ok(v),
            (SlotKind::Str, v @ Value::Str(_)) => Ok(v),
            (SlotKind::Int, v @ Value::Int(_)) => Ok(v),
            (SlotKind::Pair, v @ Value::Pair(..)) => Ok(v),
            (SlotKind::Pair, Value::Str(s)) => match s.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    Ok(Value::Pair(key.to_string(), value.to_string()))
                }
                _ => Err(ComposerError::TypeMismatch {
                    field,
                    expected: kind.name(),
                    found: format!("string '{}'", s),
                }),
            },
            (kind, other) => Err(ComposerError::TypeMismatch {
                field,
                expected: kind.name(),
                found: other.type_name().to_string(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Path(p) => write!(f, "{}", p.display()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Pair(k, v) => write!(f, "{}={}", k, v),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<PathBuf> for Value {
    fn from(p: PathBuf) -> Self {
        Value::Path(p)
    }
}

impl From<(String, String)> for Value {
    fn from((k, v): (String, String)) -> Self {
        Value::Pair(k, v)
    }
}

/// Shapes that a deferred source can produce from raw text.
///
/// `kind` is the declared type of the receiving slot. Returning `None` means
/// the source yielded no value.
pub trait FromDeferredText: Sized {
    /// Build from the contents of an environment variable.
    fn from_env_text(raw: &str, kind: SlotKind) -> Option<Self>;
    /// Build from the captured stdout of a command.
    fn from_stdout_text(raw: &str, kind: SlotKind) -> Option<Self>;
}

impl FromDeferredText for Value {
    fn from_env_text(raw: &str, kind: SlotKind) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| Value::from_text(raw, kind))
    }

    fn from_stdout_text(raw: &str, kind: SlotKind) -> Option<Self> {
        Self::from_env_text(raw, kind)
    }
}

impl FromDeferredText for Vec<Value> {
    fn from_env_text(raw: &str, kind: SlotKind) -> Option<Self> {
        collect_items(raw.split(','), kind)
    }

    fn from_stdout_text(raw: &str, kind: SlotKind) -> Option<Self> {
        collect_items(raw.lines(), kind)
    }
}

fn collect_items<'a>(items: impl Iterator<Item = &'a str>, kind: SlotKind) -> Option<Vec<Value>> {
    let values: Vec<Value> = items
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Value::from_text(s, kind))
        .collect();
    (!values.is_empty()).then_some(values)
}

/// Boxed zero-argument computation producing a value later.
pub type Computation<T> = Box<dyn FnOnce() -> Result<Option<T>>>;

/// A value that has not been computed yet.
pub enum Deferred<T> {
    /// Read an environment variable.
    Env(String),
    /// Run a command (split with shell-words, no shell) and capture stdout.
    Command(String),
    /// Arbitrary caller-supplied computation.
    Computed(Computation<T>),
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deferred::Env(name) => f.debug_tuple("Env").field(name).finish(),
            Deferred::Command(cmd) => f.debug_tuple("Command").field(cmd).finish(),
            Deferred::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Input to a slot: either already known, or computed on assignment.
#[derive(Debug)]
pub enum Input<T> {
    Immediate(T),
    Deferred(Deferred<T>),
}

impl<T> Input<T> {
    /// Immediate input from anything convertible into the slot's value shape.
    pub fn value(v: impl Into<T>) -> Self {
        Input::Immediate(v.into())
    }

    /// Wrap a closure as a deferred input.
    pub fn deferred(f: impl FnOnce() -> Result<Option<T>> + 'static) -> Self {
        Input::Deferred(Deferred::Computed(Box::new(f)))
    }

    /// Deferred input read from an environment variable.
    pub fn env(name: impl Into<String>) -> Self {
        Input::Deferred(Deferred::Env(name.into()))
    }

    /// Deferred input captured from a command's stdout.
    pub fn command(command: impl Into<String>) -> Self {
        Input::Deferred(Deferred::Command(command.into()))
    }
}

impl From<Value> for Input<Value> {
    fn from(v: Value) -> Self {
        Input::Immediate(v)
    }
}

impl From<Vec<Value>> for Input<Vec<Value>> {
    fn from(v: Vec<Value>) -> Self {
        Input::Immediate(v)
    }
}
