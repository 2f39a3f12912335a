//! Template model and placeholder engine

pub mod placeholder;
pub mod types;

pub use placeholder::{placeholders, render};
pub use types::*;
