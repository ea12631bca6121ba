//! # drive-entity
//!
//! Domain entity models for Meridian Drive. Every struct in this crate
//! represents a database table row or a derived view-model. Database
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! `sqlx::FromRow`.

pub mod file;
pub mod folder;
pub mod item;

pub use file::File;
pub use folder::{Folder, FolderId};
pub use item::{DriveItem, ItemKind};
