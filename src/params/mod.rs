//! Runner parameters: the frozen snapshot and its argument rendering.

pub mod args;
mod model;


pub use model::Params;
