//! Session location state and child listing.
//!
//! A [`Location`] is the path from the synthetic root to the folder
//! currently being viewed. It is owned by a single navigation session:
//! reset to root on session start, pushed on `enter`, truncated when
//! jumping to an ancestor via breadcrumbs.
//!
//! Membership is a direct-parent equality test on identifiers. Names
//! play no part in the join; a rename never breaks navigation.

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_entity::folder::FolderId;
use drive_entity::item::DriveItem;

use crate::snapshot::DriveSnapshot;

/// A path of folder identifiers below the synthetic root.
///
/// The root sentinel is implicit at index 0; `folder_ids` holds only
/// stored folder identifiers, so an empty path means the root view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    folder_ids: Vec<FolderId>,
}

impl Location {
    /// The root location.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a location from a root-to-target ancestry chain.
    pub fn from_ancestry(chain: Vec<FolderId>) -> Self {
        Self { folder_ids: chain }
    }

    /// The folder identifiers below the root, outermost first.
    pub fn folder_ids(&self) -> &[FolderId] {
        &self.folder_ids
    }

    /// The folder currently being viewed, or `None` at the root.
    pub fn terminal(&self) -> Option<FolderId> {
        self.folder_ids.last().copied()
    }

    /// Path length including the root sentinel.
    pub fn len(&self) -> usize {
        self.folder_ids.len() + 1
    }

    /// Whether the location is the root view.
    pub fn is_root(&self) -> bool {
        self.folder_ids.is_empty()
    }
}

/// Compute the direct children visible at a location.
///
/// Returns every folder whose parent equals the location's terminal
/// folder (root-level folders when at the root) plus every file whose
/// parent equals that same folder. Files never appear at the root.
/// Ordering is left to the presentation layer.
pub fn children_at(location: &Location, snapshot: &DriveSnapshot) -> Vec<DriveItem> {
    let terminal = location.terminal();

    let mut items: Vec<DriveItem> = snapshot
        .folders()
        .filter(|f| f.parent_id == terminal)
        .map(DriveItem::from)
        .collect();

    if let Some(folder_id) = terminal {
        items.extend(
            snapshot
                .files()
                .iter()
                .filter(|f| f.folder_id == folder_id)
                .map(DriveItem::from),
        );
    }

    items
}

/// Maintains the current location of one navigation session.
#[derive(Debug, Clone, Default)]
pub struct TreeNavigator {
    location: Location,
}

impl TreeNavigator {
    /// Create a navigator positioned at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The children visible at the current location.
    pub fn children(&self, snapshot: &DriveSnapshot) -> Vec<DriveItem> {
        children_at(&self.location, snapshot)
    }

    /// Descend into a folder.
    ///
    /// The folder must be a direct child of the current terminal folder.
    /// Membership is not re-validated: callers pass identifiers obtained
    /// from [`Self::children`].
    pub fn enter(&mut self, folder_id: FolderId) {
        self.location.folder_ids.push(folder_id);
    }

    /// Jump to the ancestor at breadcrumb position `index` (0 = root).
    ///
    /// Fails with `InvalidIndex` when the index is at or beyond the
    /// current path length; the location is left unchanged.
    pub fn ascend_to(&mut self, index: usize) -> AppResult<()> {
        if index >= self.location.len() {
            return Err(AppError::invalid_index(format!(
                "Breadcrumb index {index} out of bounds for path of length {}",
                self.location.len()
            )));
        }
        self.location.folder_ids.truncate(index);
        Ok(())
    }

    /// Move up one level. Fails with `AlreadyAtRoot` at the root.
    pub fn up(&mut self) -> AppResult<()> {
        if self.location.is_root() {
            return Err(AppError::already_at_root("Already at the root location"));
        }
        self.ascend_to(self.location.len() - 2)
    }

    /// Reconcile the location against a fresh snapshot.
    ///
    /// If any folder along the path was deleted since the last render
    /// cycle, the location is truncated to the last known-good ancestor.
    /// Returns `true` when the location was truncated, so the caller can
    /// surface a non-fatal notice.
    pub fn reconcile(&mut self, snapshot: &DriveSnapshot) -> bool {
        let keep = self
            .location
            .folder_ids
            .iter()
            .take_while(|id| snapshot.contains_folder(**id))
            .count();

        if keep < self.location.folder_ids.len() {
            self.location.folder_ids.truncate(keep);
            true
        } else {
            false
        }
    }
}
