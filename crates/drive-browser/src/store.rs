//! The record store seam.
//!
//! The navigation core never talks to the database directly; it consumes
//! the [`RecordStore`] trait, which exposes the two full-table scans the
//! core needs per render cycle. The production implementation wraps the
//! sqlx repositories; the in-memory implementation backs tests and demos.

use async_trait::async_trait;

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_database::connection::DatabasePool;
use drive_database::repositories::file::FileRepository;
use drive_database::repositories::folder::FolderRepository;
use drive_entity::file::File;
use drive_entity::folder::Folder;

/// Read access to the flat folder and file record set.
///
/// Implementations must return a complete, consistent snapshot per call;
/// the core does not depend on pagination or incremental sync.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List every folder record.
    async fn list_folders(&self) -> AppResult<Vec<Folder>>;

    /// List every file record.
    async fn list_files(&self) -> AppResult<Vec<File>>;

    /// Verify the store can serve reads right now.
    async fn ping(&self) -> AppResult<()>;
}

/// Postgres-backed record store over the repository layer.
///
/// The pool is injected at construction; its lifecycle belongs to
/// process startup and shutdown.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    db: DatabasePool,
    folders: FolderRepository,
    files: FileRepository,
}

impl PgRecordStore {
    /// Create a record store over an already-connected pool.
    pub fn new(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            db,
            folders: FolderRepository::new(pool.clone()),
            files: FileRepository::new(pool),
        }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn list_folders(&self) -> AppResult<Vec<Folder>> {
        self.folders.list_all().await
    }

    async fn list_files(&self) -> AppResult<Vec<File>> {
        self.files.list_all().await
    }

    async fn ping(&self) -> AppResult<()> {
        if self.db.health_check().await? {
            Ok(())
        } else {
            Err(AppError::database("Record store health check failed"))
        }
    }
}

/// In-memory record store used by tests and local demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    folders: Vec<Folder>,
    files: Vec<File>,
}

impl MemoryRecordStore {
    /// Create a store holding the given records.
    pub fn new(folders: Vec<Folder>, files: Vec<File>) -> Self {
        Self { folders, files }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list_folders(&self) -> AppResult<Vec<Folder>> {
        Ok(self.folders.clone())
    }

    async fn list_files(&self) -> AppResult<Vec<File>> {
        Ok(self.files.clone())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
