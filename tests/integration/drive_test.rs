//! Integration tests for drive navigation endpoints.

use std::sync::Arc;

use axum::http::StatusCode;

use super::helpers::{DownStore, TestApp};

#[tokio::test]
async fn test_root_view_lists_root_level_folders() {
    let app = TestApp::new();

    let response = app.get("/api/drive").await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["kind"] == "folder"));

    let crumbs = response.body["data"]["breadcrumbs"].as_array().unwrap();
    assert_eq!(crumbs.len(), 1);
    assert_eq!(crumbs[0]["name"], "My Drive");
}

#[tokio::test]
async fn test_folder_view_mixes_folders_and_files() {
    let app = TestApp::new();

    let response = app.get("/api/drive?folder_id=1").await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Reports", "a.txt", "Budget.xlsx"]);

    let crumbs = response.body["data"]["breadcrumbs"].as_array().unwrap();
    let crumb_names: Vec<&str> = crumbs.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(crumb_names, vec!["My Drive", "Work"]);
}

#[tokio::test]
async fn test_search_narrows_to_matching_children() {
    let app = TestApp::new();

    let response = app.get("/api/drive?folder_id=1&q=budget").await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Budget.xlsx");
}

#[tokio::test]
async fn test_search_does_not_recurse_into_descendants() {
    let app = TestApp::new();

    // b.txt lives in Reports, one level below Work.
    let response = app.get("/api/drive?folder_id=1&q=b.txt").await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_unknown_folder_returns_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/drive?folder_id=99").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_breadcrumbs_endpoint() {
    let app = TestApp::new();

    let response = app.get("/api/folders/2/breadcrumbs").await;

    assert_eq!(response.status, StatusCode::OK);
    let crumbs = response.body["data"].as_array().unwrap();
    let names: Vec<&str> = crumbs.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["My Drive", "Work", "Reports"]);
    assert!(crumbs[0]["folder_id"].is_null());
}

#[tokio::test]
async fn test_unreachable_store_reports_data_unavailable() {
    let app = TestApp::with_store(Arc::new(DownStore));

    let response = app.get("/api/drive").await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "DATA_UNAVAILABLE");
}
