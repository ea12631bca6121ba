//! Folder repository implementation.

use sqlx::PgPool;

use drive_core::error::{AppError, ErrorKind};
use drive_core::result::AppResult;
use drive_entity::folder::Folder;

/// Repository for folder records.
///
/// The navigation core only reads; folder creation and deletion belong
/// to an external write path. One full-table scan feeds each render
/// cycle's snapshot.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every folder record.
    pub async fn list_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }
}
