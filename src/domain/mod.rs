//! Domain layer: file naming, content templates and name standardization
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod templates;

pub use entities::{expand_env_vars, GeneratedFile, Standardization};
pub use templates::*;
