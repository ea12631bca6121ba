//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use drive_browser::BrowseService;
use drive_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Drive navigation service.
    pub browse: Arc<BrowseService>,
}
