//! Template sources and the registry built from them

pub mod embedded_repository;
pub mod errors;
pub mod filesystem_loader;
pub mod manifest;
pub mod registry;

pub use embedded_repository::*;
pub use errors::*;
pub use filesystem_loader::*;
pub use registry::*;
