//! File repository implementation.

use sqlx::PgPool;

use drive_core::error::{AppError, ErrorKind};
use drive_core::result::AppResult;
use drive_entity::file::File;

/// Repository for file records. Read-only, like the folder repository;
/// uploads and deletes happen on an external write path.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every file record.
    pub async fn list_all(&self) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }
}
