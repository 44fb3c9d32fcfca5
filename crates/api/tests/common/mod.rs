#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use framelabel_api::config::ServerConfig;
use framelabel_api::router::build_app_router;
use framelabel_api::state::AppState;
use framelabel_core::config::StorageConfig;

/// On-disk layout for one test: `<tmp>/frames/<video>/...` and
/// `<tmp>/annotations/`. Dropping it removes everything.
pub struct TestEnv {
    pub dir: tempfile::TempDir,
    pub storage: StorageConfig,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let frames = dir.path().join("frames");
        std::fs::create_dir(&frames).expect("create frames dir");
        let storage = StorageConfig::resolve(&frames, None).expect("resolve storage");
        Self { dir, storage }
    }

    pub fn frames_dir(&self) -> &Path {
        &self.storage.frames_dir
    }

    pub fn annotations_dir(&self) -> &Path {
        &self.storage.annotations_dir
    }

    /// Create a video directory holding the given files.
    pub fn add_video(&self, video_id: &str, files: &[&str]) -> PathBuf {
        let dir = self.frames_dir().join(video_id);
        std::fs::create_dir_all(&dir).expect("create video dir");
        for name in files {
            std::fs::write(dir.join(name), format!("frame:{name}")).expect("write frame");
        }
        dir
    }

    /// Write an annotation file directly, bypassing the API.
    pub fn write_annotation(&self, video_id: &str, contents: &str) {
        std::fs::write(
            self.annotations_dir().join(format!("{video_id}.json")),
            contents,
        )
        .expect("write annotation");
    }

    pub fn app(&self) -> Router {
        build_test_app(&self.storage)
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(storage: &StorageConfig) -> ServerConfig {
    ServerConfig {
        frames_dir: storage.frames_dir.clone(),
        annotations_dir: Some(storage.annotations_dir.clone()),
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: None,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, exactly as
/// `main.rs` does.
pub fn build_test_app(storage: &StorageConfig) -> Router {
    let config = test_config(storage);
    build_app_router(AppState::new(storage), &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
