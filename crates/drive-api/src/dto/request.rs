//! Request DTOs.

use serde::Deserialize;

use drive_entity::folder::FolderId;

/// Query parameters for the drive view endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriveViewQuery {
    /// The folder to view; omitted for the root view.
    pub folder_id: Option<FolderId>,
    /// Search query applied to the displayed children.
    pub q: Option<String>,
}
