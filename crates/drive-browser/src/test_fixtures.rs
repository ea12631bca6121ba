//! Record constructors shared by the unit tests in this crate.

use chrono::{TimeZone, Utc};

use drive_entity::file::File;
use drive_entity::folder::{Folder, FolderId};

/// Build a folder record with fixed timestamps.
pub fn folder(id: FolderId, name: &str, parent_id: Option<FolderId>) -> Folder {
    let ts = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
    Folder {
        id,
        name: name.to_string(),
        parent_id,
        is_shared: false,
        created_at: ts,
        updated_at: ts,
    }
}

/// Build a file record with fixed timestamps.
pub fn file(id: i64, folder_id: FolderId, name: &str) -> File {
    let ts = Utc.with_ymd_and_hms(2025, 5, 2, 12, 0, 0).unwrap();
    File {
        id,
        folder_id,
        name: name.to_string(),
        size_bytes: 1024,
        url: format!("blob://{id}"),
        is_shared: false,
        created_at: ts,
        updated_at: ts,
    }
}
