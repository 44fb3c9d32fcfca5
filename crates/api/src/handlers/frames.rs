//! Raw frame image serving.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{self, HeaderValue};
use axum::http::StatusCode;
use axum::response::Response;

use crate::error::{AppError, AppResult};
use crate::handlers::run_blocking;
use crate::state::AppState;

/// GET /frames/{video_id}/{filename}
///
/// Filenames that are not a single component of the video directory (or
/// that resolve outside it through a symlink) are rejected with 400.
pub async fn serve_frame(
    State(state): State<AppState>,
    Path((video_id, filename)): Path<(String, String)>,
) -> AppResult<Response> {
    let catalog = Arc::clone(&state.catalog);
    let path = run_blocking(move || catalog.frames().frame_path(&video_id, &filename)).await?;

    let data = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to read {}: {e}", path.display())))?;

    let content_type = content_type_for_extension(&path.to_string_lossy());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, data.len().to_string())
        .header(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        )
        .body(Body::from(data))
        .map_err(|e| AppError::InternalError(e.to_string()))
}

/// Guess a Content-Type from a file extension.
fn content_type_for_extension(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
