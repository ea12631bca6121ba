//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::folder::FolderId;

/// A file stored in the drive.
///
/// Unlike folders, a file's parent is mandatory: every file lives inside
/// exactly one existing folder and never at the synthetic root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: i64,
    /// The folder containing this file.
    pub folder_id: FolderId,
    /// The file name (including extension).
    pub name: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Opaque retrieval locator for the file content.
    pub url: String,
    /// Whether the file is shared with other users.
    pub is_shared: bool,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}
