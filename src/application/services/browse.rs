//! Directory browsing service
//!
//! Turns the immediate entries of one directory into a [`Listing`].

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{BrowseParams, Item, Listing};
use crate::infrastructure::traits::FileSystem;

/// Service listing directories for the browse command.
pub struct BrowseService {
    fs: Arc<dyn FileSystem>,
}

impl BrowseService {
    /// Create a new browse service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Resolve `params` against `home` and list the resulting directory.
    pub fn browse(&self, params: &BrowseParams, home: Option<&Path>) -> ApplicationResult<Listing> {
        let dir = params.resolve_dir(home)?;
        debug!("browse: dir={:?} resolved={}", params.dir, dir.display());
        self.list(&dir)
    }

    /// List the non-hidden entries of `dir`, in enumeration order.
    ///
    /// The listing is complete before it is returned; any entry failure
    /// fails the whole call.
    pub fn list(&self, dir: &Path) -> ApplicationResult<Listing> {
        let entries = self
            .fs
            .read_dir(dir)
            .with_path_context("read directory", dir)?;
        debug!("list: {} entries in {}", entries.len(), dir.display());

        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(name) = entry.file_name() else {
                continue;
            };
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                trace!("list: skipping hidden {}", name);
                continue;
            }

            let abs = self
                .fs
                .absolute(&entry)
                .with_path_context("resolve absolute path", &entry)?;
            let is_dir = self.fs.is_dir(&entry);
            items.push(Item::for_entry(name, &abs.to_string_lossy(), is_dir));
        }

        Ok(Listing { items })
    }
}
