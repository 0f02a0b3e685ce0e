//! Typed slots for runner task fields.
//!
//! A [`SlotStore`] holds one slot per field. Scalar slots keep at most one
//! value (last write wins); list slots accumulate values in call order.
//! Inputs arrive as [`Input`]s, which are either immediate values or deferred
//! sources evaluated at assignment time.

mod evaluator;
mod store;
mod value;


pub use store::{DEFAULT_OUTPUT_DIR, ListField, ScalarField, SlotStore};
pub use value::{Input, SlotKind, Value};
