//! Displayed-item view model.
//!
//! [`DriveItem`] is the read-only union of [`Folder`] and [`File`] handed
//! to the presentation layer. It is derived per render cycle, never
//! stored. Each variant carries only its own required attributes: a
//! folder has no size or URL, a file has no child-listing capability.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::file::File;
use crate::folder::{Folder, FolderId};

/// Type discriminant for a displayed item, used by presentation to pick
/// an icon and click behavior (folder enters, file opens its URL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A navigable folder.
    Folder,
    /// An openable file.
    File,
}

/// A single entry in a folder listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DriveItem {
    /// A child folder.
    Folder {
        /// Folder identifier.
        id: FolderId,
        /// Folder name.
        name: String,
        /// Whether the folder is shared.
        shared: bool,
        /// Last modification time.
        modified_at: DateTime<Utc>,
    },
    /// A file in the current folder.
    File {
        /// File identifier.
        id: i64,
        /// File name.
        name: String,
        /// File size in bytes.
        size_bytes: i64,
        /// Retrieval locator for opening the file.
        url: String,
        /// Whether the file is shared.
        shared: bool,
        /// Last modification time.
        modified_at: DateTime<Utc>,
    },
}

impl DriveItem {
    /// The item's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// The item's identifier within its own table.
    pub fn id(&self) -> i64 {
        match self {
            Self::Folder { id, .. } | Self::File { id, .. } => *id,
        }
    }

    /// The type discriminant.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Folder { .. } => ItemKind::Folder,
            Self::File { .. } => ItemKind::File,
        }
    }
}

impl From<&Folder> for DriveItem {
    fn from(folder: &Folder) -> Self {
        Self::Folder {
            id: folder.id,
            name: folder.name.clone(),
            shared: folder.is_shared,
            modified_at: folder.updated_at,
        }
    }
}

impl From<&File> for DriveItem {
    fn from(file: &File) -> Self {
        Self::File {
            id: file.id,
            name: file.name.clone(),
            size_bytes: file.size_bytes,
            url: file.url.clone(),
            shared: file.is_shared,
            modified_at: file.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_serde_tag_discriminates_variants() {
        let item = DriveItem::Folder {
            id: 7,
            name: "Photos".to_string(),
            shared: false,
            modified_at: Utc::now(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "folder");
        assert_eq!(json["name"], "Photos");
        assert!(json.get("size_bytes").is_none());
    }

    #[test]
    fn test_kind_accessor() {
        let item = DriveItem::File {
            id: 1,
            name: "a.txt".to_string(),
            size_bytes: 12,
            url: "blob://1".to_string(),
            shared: false,
            modified_at: Utc::now(),
        };
        assert_eq!(item.kind(), ItemKind::File);
        assert_eq!(item.name(), "a.txt");
    }
}
