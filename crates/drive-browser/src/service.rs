//! One-render-cycle orchestration for the presentation boundary.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_entity::folder::FolderId;
use drive_entity::item::{DriveItem, ItemKind};

use crate::breadcrumb::{self, Breadcrumb};
use crate::navigator::{self, Location};
use crate::resolver::PathResolver;
use crate::search;
use crate::snapshot::DriveSnapshot;
use crate::store::RecordStore;

/// Everything the presentation layer needs to render one drive view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveView {
    /// The displayed items, folders first, each sorted by name.
    pub items: Vec<DriveItem>,
    /// The breadcrumb trail for the viewed location, root first.
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Combines the record store, resolver, navigator, and search filter
/// into per-request drive views.
#[derive(Clone)]
pub struct BrowseService {
    store: Arc<dyn RecordStore>,
}

impl BrowseService {
    /// Create a browse service over a record store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Perform the single bulk read of a render cycle.
    ///
    /// A store failure is surfaced as `ServiceUnavailable`; retry policy
    /// belongs to the caller, not this layer.
    pub async fn load_snapshot(&self) -> AppResult<DriveSnapshot> {
        let folders = self.store.list_folders().await.map_err(unavailable)?;
        let files = self.store.list_files().await.map_err(unavailable)?;

        debug!(
            folders = folders.len(),
            files = files.len(),
            "Loaded drive snapshot"
        );
        Ok(DriveSnapshot::new(folders, files))
    }

    /// Build the view for a folder (`None` for the root), optionally
    /// narrowed by a search query.
    pub async fn view_at(
        &self,
        folder_id: Option<FolderId>,
        query: Option<&str>,
    ) -> AppResult<DriveView> {
        let snapshot = self.load_snapshot().await?;
        let resolver = PathResolver::new(&snapshot);

        let location = match folder_id {
            None => Location::root(),
            Some(id) => Location::from_ancestry(resolver.ancestry_of(id)?),
        };

        let mut items = navigator::children_at(&location, &snapshot);
        sort_for_display(&mut items);

        if let Some(q) = query {
            items = search::filter_items(items, q);
        }

        let breadcrumbs = breadcrumb::render(&location, &resolver);
        Ok(DriveView { items, breadcrumbs })
    }

    /// Check that the backing record store can serve reads.
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    /// Resolve the breadcrumb trail of a folder without listing children.
    pub async fn breadcrumbs_of(&self, folder_id: FolderId) -> AppResult<Vec<Breadcrumb>> {
        let snapshot = self.load_snapshot().await?;
        let resolver = PathResolver::new(&snapshot);
        let location = Location::from_ancestry(resolver.ancestry_of(folder_id)?);
        Ok(breadcrumb::render(&location, &resolver))
    }
}

/// Folders before files, then case-insensitive name order. Purely a
/// presentation choice; the core leaves ordering unspecified.
fn sort_for_display(items: &mut [DriveItem]) {
    items.sort_by(|a, b| {
        let rank = |i: &DriveItem| match i.kind() {
            ItemKind::Folder => 0u8,
            ItemKind::File => 1,
        };
        rank(a)
            .cmp(&rank(b))
            .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
    });
}

fn unavailable(err: AppError) -> AppError {
    AppError::with_source(
        drive_core::error::ErrorKind::ServiceUnavailable,
        "Drive data unavailable",
        err,
    )
}
