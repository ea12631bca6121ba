//! Immutable snapshot of one bulk record read.
//!
//! The flat record set is treated as immutable for the duration of a
//! single render cycle and re-fetched wholesale on refresh, never
//! patched incrementally.

use std::collections::HashMap;

use tracing::warn;

use drive_entity::file::File;
use drive_entity::folder::{Folder, FolderId};

/// An indexed, read-only view of the full folder and file record set.
#[derive(Debug, Clone)]
pub struct DriveSnapshot {
    folders: HashMap<FolderId, Folder>,
    files: Vec<File>,
}

impl DriveSnapshot {
    /// Build a snapshot from flat record lists.
    ///
    /// Files whose parent folder does not exist in the same snapshot
    /// violate the record invariant and are dropped with a warning; they
    /// would otherwise be unreachable through any location.
    pub fn new(folders: Vec<Folder>, files: Vec<File>) -> Self {
        let folders: HashMap<FolderId, Folder> =
            folders.into_iter().map(|f| (f.id, f)).collect();

        let files = files
            .into_iter()
            .filter(|file| {
                let known = folders.contains_key(&file.folder_id);
                if !known {
                    warn!(
                        file_id = file.id,
                        folder_id = file.folder_id,
                        "Dropping file with unknown parent folder"
                    );
                }
                known
            })
            .collect();

        Self { folders, files }
    }

    /// Look up a folder by ID.
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.get(&id)
    }

    /// Whether a folder exists in this snapshot.
    pub fn contains_folder(&self, id: FolderId) -> bool {
        self.folders.contains_key(&id)
    }

    /// Number of folders in the snapshot.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// Iterate over all folders (unordered).
    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.values()
    }

    /// All files in the snapshot.
    pub fn files(&self) -> &[File] {
        &self.files
    }
}
