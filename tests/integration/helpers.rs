//! Shared test helpers for integration tests.
//!
//! The router is built over an in-memory record store, so these tests
//! exercise the full HTTP stack without a live database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use drive_api::state::AppState;
use drive_browser::{BrowseService, MemoryRecordStore, RecordStore};
use drive_core::config::AppConfig;
use drive_core::config::database::DatabaseConfig;
use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_entity::file::File;
use drive_entity::folder::{Folder, FolderId};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// A captured response body and status.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a test application over the standard drive fixture:
    /// Work (Reports inside) and Personal at the root, three files.
    pub fn new() -> Self {
        let store = MemoryRecordStore::new(
            vec![
                folder(1, "Work", None),
                folder(2, "Reports", Some(1)),
                folder(3, "Personal", None),
            ],
            vec![
                file(10, 1, "a.txt"),
                file(11, 2, "b.txt"),
                file(12, 1, "Budget.xlsx"),
            ],
        );
        Self::with_store(Arc::new(store))
    }

    /// Create a test application over an arbitrary record store.
    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        let state = AppState {
            config: Arc::new(test_config()),
            browse: Arc::new(BrowseService::new(store)),
        };
        Self {
            router: drive_api::build_router(state),
        }
    }

    /// Issue a GET request and capture status plus JSON body.
    pub async fn get(&self, path: &str) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("router never fails");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collect")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        logging: Default::default(),
    }
}

/// A record store whose backing database is unreachable.
pub struct DownStore;

#[async_trait]
impl RecordStore for DownStore {
    async fn list_folders(&self) -> AppResult<Vec<Folder>> {
        Err(AppError::database("connection refused"))
    }

    async fn list_files(&self) -> AppResult<Vec<File>> {
        Err(AppError::database("connection refused"))
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::database("connection refused"))
    }
}

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
