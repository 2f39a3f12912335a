//! Application layer - use cases coordinating the registry, renderer and output

pub mod emit;
pub mod substitutions;
pub mod template_management;
pub mod traits;

pub use emit::*;
pub use substitutions::*;
pub use template_management::*;
pub use traits::*;
