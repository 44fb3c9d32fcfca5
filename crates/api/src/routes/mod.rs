pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /videos                        list videos with annotation state
/// GET    /video/{video_id}/frames       ordered frame filenames
/// GET    /annotation/{video_id}         load annotation document
/// POST   /annotation/{video_id}         replace annotation document
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(handlers::videos::list_videos))
        .route("/video/{video_id}/frames", get(handlers::videos::list_frames))
        .route(
            "/annotation/{video_id}",
            get(handlers::annotation::get_annotation).post(handlers::annotation::save_annotation),
        )
}

/// Raw frame images, mounted at the root.
///
/// ```text
/// GET    /frames/{video_id}/{filename}  JPEG bytes
/// ```
pub fn frame_routes() -> Router<AppState> {
    Router::new().route(
        "/frames/{video_id}/{filename}",
        get(handlers::frames::serve_frame),
    )
}
