//! # drive-browser
//!
//! The navigation core of Meridian Drive: given a flat snapshot of
//! folder and file records, reconstruct folder contents, breadcrumb
//! trails, and search-scoped views.
//!
//! The crate is organized leaf-first:
//!
//! - [`store`] — the `RecordStore` seam over the external record tables
//! - [`snapshot`] — an immutable, indexed snapshot of one bulk read
//! - [`resolver`] — on-demand ancestry resolution from parent pointers
//! - [`navigator`] — session location state and child listing
//! - [`search`] — name filtering over a computed child set
//! - [`breadcrumb`] — path-to-display-name rendering
//! - [`service`] — one-render-cycle orchestration for the HTTP boundary

pub mod breadcrumb;
pub mod navigator;
pub mod resolver;
pub mod search;
pub mod service;
pub mod snapshot;
pub mod store;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use breadcrumb::Breadcrumb;
pub use navigator::{Location, TreeNavigator};
pub use resolver::{PathResolver, ROOT_DISPLAY_NAME};
pub use service::{BrowseService, DriveView};
pub use snapshot::DriveSnapshot;
pub use store::{MemoryRecordStore, PgRecordStore, RecordStore};
