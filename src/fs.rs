//! Filesystem access used by the organizer.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::ScanSettings;
use crate::error::FsError;

pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;

    /// Create one directory. Fails when the parent does not exist.
    fn create_dir(&self, path: &Path) -> Result<(), FsError>;

    /// Move a file. Fails when `to` already exists or `from` is missing.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError>;

    /// Every regular file below `root`, in walk order.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, FsError> {
        let walk_err = |source: io::Error| FsError::Walk {
            root: root.to_path_buf(),
            source,
        };

        // Walked paths keep the form of the root, so resolve it up front.
        let root_abs = std::fs::canonicalize(root).map_err(walk_err)?;
        let mut walker = WalkDir::new(&root_abs)
            .follow_links(self.scan.follow_links)
            .sort_by_file_name();
        if let Some(d) = self.scan.max_depth {
            walker = walker.max_depth(d);
        }

        let include_hidden = self.scan.include_hidden;
        let mut files = Vec::new();
        for entry in walker.into_iter().filter_entry(|e| {
            if include_hidden || e.depth() == 0 || !is_hidden(e.path()) {
                return true;
            }
            debug!("skipping hidden entry {}", e.path().display());
            false
        }) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => return Err(walk_err(source.into())),
                Err(e) => {
                    warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}
