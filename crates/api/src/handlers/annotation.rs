//! Handlers for per-video annotation documents.
//!
//! Documents are replaced wholesale on every POST; there is no partial
//! update or merge.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use framelabel_core::annotation::Annotation;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::handlers::run_blocking;
use crate::state::AppState;

/// Acknowledgement body for a successful save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub ok: bool,
}

/// GET /api/annotation/{video_id}
///
/// Returns the stored document, or the empty default when nothing has been
/// saved yet.
pub async fn get_annotation(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let catalog = Arc::clone(&state.catalog);
    let annotation = run_blocking(move || catalog.annotations().load(&video_id)).await?;
    Ok(Json(annotation))
}

/// POST /api/annotation/{video_id}
///
/// The body must be a JSON object shaped like an annotation document.
/// Any `video_id` or `last_modified` in it is ignored; the server sets both.
pub async fn save_annotation(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let document = serde_json::from_slice::<Map<String, Value>>(&body)
        .and_then(Annotation::from_client_object)
        .map_err(|e| {
            tracing::debug!(video_id, error = %e, "Rejected annotation body");
            AppError::BadRequest("Invalid JSON".into())
        })?;

    let catalog = Arc::clone(&state.catalog);
    let id = video_id.clone();
    let saved = run_blocking(move || catalog.annotations().save(&id, document)).await?;

    tracing::info!(
        video_id,
        selected = saved.selected_frames.len(),
        status = saved.status.map(|s| s.as_str()),
        "Annotation saved"
    );

    Ok(Json(SaveResponse { ok: true }))
}
