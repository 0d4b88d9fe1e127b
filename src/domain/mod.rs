//! Domain layer: documents, parameters and the built-in manifest
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod manifest;
pub mod params;

pub use entities::*;
pub use error::DomainError;
pub use manifest::builtin_manifest;
pub use params::{expand_tilde, BrowseParams, DEFAULT_DIR};
