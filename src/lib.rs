//! Templet
//!
//! Render named text templates with `{{placeholder}}` substitution and write
//! them to disk.
//!
//! ```no_run
//! use templet::application::Emitter;
//! use templet::core::templates::Substitutions;
//! use templet::infrastructure::TemplateRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = TemplateRegistry::embedded()?;
//! let mut vars = Substitutions::new();
//! vars.insert("year".to_string(), "2026".to_string());
//! vars.insert("holder".to_string(), "Bee Co".to_string());
//!
//! let emission = Emitter::new(&registry).emit("common/license-mit", "LICENSE", &vars)?;
//! println!("wrote {}", emission.path.display());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod infrastructure;
