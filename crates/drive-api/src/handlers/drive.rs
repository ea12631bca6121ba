//! Drive navigation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use drive_browser::{Breadcrumb, DriveView};
use drive_entity::folder::FolderId;

use crate::dto::request::DriveViewQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/drive?folder_id=...&q=...
///
/// Returns the children and breadcrumb trail for a folder (the root
/// view when `folder_id` is omitted), optionally narrowed by a search
/// query over the displayed children.
pub async fn view(
    State(state): State<AppState>,
    Query(params): Query<DriveViewQuery>,
) -> Result<Json<ApiResponse<DriveView>>, ApiError> {
    let view = state
        .browse
        .view_at(params.folder_id, params.q.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// GET /api/folders/{id}/breadcrumbs
pub async fn breadcrumbs(
    State(state): State<AppState>,
    Path(id): Path<FolderId>,
) -> Result<Json<ApiResponse<Vec<Breadcrumb>>>, ApiError> {
    let crumbs = state.browse.breadcrumbs_of(id).await?;
    Ok(Json(ApiResponse::ok(crumbs)))
}
