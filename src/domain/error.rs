//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations detected before touching the filesystem.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("cannot expand '~': home directory is unknown (directory: {requested})")]
    HomeDirUnavailable { requested: String },
}
