//! Health check handlers.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
///
/// Reports degraded rather than failing the request when the record
/// store is unreachable, so load balancers can tell "process up, data
/// down" apart from a dead process.
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let (status, store) = match state.browse.ping().await {
        Ok(()) => ("ok", "connected"),
        Err(e) => {
            warn!("Record store unreachable during health check: {e}");
            ("degraded", "unavailable")
        }
    };

    Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        store: store.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
