//! Handlers for the video listing and per-video frame lists.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::handlers::run_blocking;
use crate::state::AppState;

/// GET /api/videos
///
/// Every video on disk with derived annotation state, unfinished work first.
pub async fn list_videos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let catalog = Arc::clone(&state.catalog);
    let videos = run_blocking(move || catalog.list()).await?;
    tracing::debug!(count = videos.len(), "Listed videos");
    Ok(Json(videos))
}

/// GET /api/video/{video_id}/frames
///
/// Frame filenames in ascending order, or 404 when the video is unknown.
pub async fn list_frames(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let catalog = Arc::clone(&state.catalog);
    let frames = run_blocking(move || catalog.frames().list_frames(&video_id)).await?;
    Ok(Json(frames))
}
