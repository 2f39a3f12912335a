//! Core domain: templates, placeholders and emission errors

pub mod error;
pub mod templates;

pub use error::{EmitError, ErrorKind, Result};
