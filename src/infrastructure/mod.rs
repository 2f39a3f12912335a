//! Infrastructure layer - concrete implementations of application ports

pub mod output;
pub mod templates;

pub use output::*;
pub use templates::*;
