//! On-demand ancestry resolution from parent pointers.
//!
//! The accepted data model forbids cycles, but the resolver still caps
//! its traversal so corrupted upstream data fails with
//! `CycleDetected` instead of looping forever.

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_entity::folder::FolderId;

use crate::snapshot::DriveSnapshot;

/// Display name of the synthetic root, which has no stored record.
pub const ROOT_DISPLAY_NAME: &str = "My Drive";

/// Resolves folder ancestry and display names against one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    snapshot: &'a DriveSnapshot,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver over a snapshot.
    pub fn new(snapshot: &'a DriveSnapshot) -> Self {
        Self { snapshot }
    }

    /// Compute the ancestry chain of a folder, ordered root to the
    /// folder itself.
    ///
    /// Fails with `NotFound` if the folder (or any ancestor it points
    /// at) does not exist, and with `CycleDetected` if the traversal
    /// exceeds the number of folders in the snapshot.
    pub fn ancestry_of(&self, folder_id: FolderId) -> AppResult<Vec<FolderId>> {
        // One hop per folder plus one; any longer walk revisits a node.
        let max_hops = self.snapshot.folder_count() + 1;

        let mut chain = Vec::new();
        let mut current = Some(folder_id);

        while let Some(id) = current {
            if chain.len() >= max_hops {
                return Err(AppError::cycle_detected(format!(
                    "Ancestry of folder {folder_id} exceeds {max_hops} hops"
                )));
            }

            let folder = self
                .snapshot
                .folder(id)
                .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))?;
            chain.push(id);
            current = folder.parent_id;
        }

        chain.reverse();
        Ok(chain)
    }

    /// Resolve the display name of a folder, or of the root sentinel
    /// when `folder_id` is `None`.
    ///
    /// A `NotFound` result means the folder was deleted concurrently;
    /// callers fall back to showing the raw identifier.
    pub fn display_name_of(&self, folder_id: Option<FolderId>) -> AppResult<String> {
        match folder_id {
            None => Ok(ROOT_DISPLAY_NAME.to_string()),
            Some(id) => self
                .snapshot
                .folder(id)
                .map(|f| f.name.clone())
                .ok_or_else(|| AppError::not_found(format!("Folder {id} not found"))),
        }
    }
}
