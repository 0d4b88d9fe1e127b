//! Browse command parameters and directory resolution

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::error::DomainError;

/// Directory browsed when `dir` is not given.
pub const DEFAULT_DIR: &str = ".";

/// Parameters of the browse command, validated at the argument boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseParams {
    /// Raw `dir` value as passed by the host
    pub dir: Option<String>,
}

impl BrowseParams {
    pub fn new(dir: Option<String>) -> Self {
        Self { dir }
    }

    /// Resolve the directory to list.
    ///
    /// Defaults to [`DEFAULT_DIR`] when absent or empty; a leading `~` is
    /// substituted with `home`.
    pub fn resolve_dir(&self, home: Option<&Path>) -> Result<PathBuf, DomainError> {
        let raw = self
            .dir
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DIR);
        expand_tilde(raw, home)
    }
}

/// Replace a single leading `~` with `home`.
///
/// This is plain prefix substitution: `~/a` becomes `<home>/a` and `~a`
/// becomes `<home>a`. A `~` anywhere else is left alone.
pub fn expand_tilde(raw: &str, home: Option<&Path>) -> Result<PathBuf, DomainError> {
    let Some(rest) = raw.strip_prefix('~') else {
        return Ok(PathBuf::from(raw));
    };
    let home = home.ok_or_else(|| DomainError::HomeDirUnavailable {
        requested: raw.to_string(),
    })?;

    let mut expanded = OsString::from(home.as_os_str());
    expanded.push(rest);
    Ok(PathBuf::from(expanded))
}
