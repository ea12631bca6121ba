//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stable folder identifier (auto-incrementing database key).
pub type FolderId = i64;

/// A folder in the drive hierarchy.
///
/// Folders form a forest: every folder has at most one parent and no
/// folder is its own ancestor. A `parent_id` of `None` marks a
/// root-level folder; the synthetic "My Drive" root itself is never
/// stored as a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (None for root-level folders).
    pub parent_id: Option<FolderId>,
    /// Whether the folder is shared with other users.
    pub is_shared: bool,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root-level folder (no parent).
    pub fn is_root_level(&self) -> bool {
        self.parent_id.is_none()
    }
}
