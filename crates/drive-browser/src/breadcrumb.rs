//! Path-to-display-name rendering.

use serde::{Deserialize, Serialize};

use drive_entity::folder::FolderId;

use crate::navigator::Location;
use crate::resolver::{PathResolver, ROOT_DISPLAY_NAME};

/// One breadcrumb entry. Selecting the entry at position `i` maps to
/// `TreeNavigator::ascend_to(i)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// The folder at this position, or `None` for the root sentinel.
    pub folder_id: Option<FolderId>,
    /// Resolved display name.
    pub name: String,
}

/// Render a location as an ordered breadcrumb trail, root first.
///
/// A folder deleted concurrently with navigation still gets an entry;
/// its name falls back to the raw identifier.
pub fn render(location: &Location, resolver: &PathResolver<'_>) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::with_capacity(location.len());
    crumbs.push(Breadcrumb {
        folder_id: None,
        name: ROOT_DISPLAY_NAME.to_string(),
    });

    for &id in location.folder_ids() {
        let name = resolver
            .display_name_of(Some(id))
            .unwrap_or_else(|_| id.to_string());
        crumbs.push(Breadcrumb {
            folder_id: Some(id),
            name,
        });
    }

    crumbs
}
