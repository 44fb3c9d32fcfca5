//! Integration tests for `GET /api/videos` and `GET /api/video/{id}/frames`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, TestEnv};
use serde_json::json;

fn ids(json: &serde_json::Value) -> Vec<&str> {
    json.as_array()
        .expect("array body")
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn empty_frames_root_lists_no_videos() {
    let env = TestEnv::new();
    let response = get(env.app(), "/api/videos").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn videos_are_listed_in_workflow_order() {
    let env = TestEnv::new();
    for id in ["A", "B", "C", "D"] {
        env.add_video(id, &["0001.jpg"]);
    }
    env.write_annotation("B", r#"{"video_id": "B", "selected_frames": ["x"], "status": null}"#);
    env.write_annotation("C", r#"{"video_id": "C", "selected_frames": [], "status": "skip"}"#);
    env.write_annotation("D", r#"{"video_id": "D", "selected_frames": [], "status": "done"}"#);

    let json = body_json(get(env.app(), "/api/videos").await).await;
    assert_eq!(ids(&json), vec!["B", "A", "C", "D"]);
}

#[tokio::test]
async fn summary_has_all_fields() {
    let env = TestEnv::new();
    env.add_video("clip", &["0001.jpg", "0002.jpg", "0003.JPG", "readme.txt"]);
    env.write_annotation(
        "clip",
        r#"{"video_id": "clip", "selected_frames": ["0002.jpg"], "history": [], "status": "review", "difficulty": 2}"#,
    );

    let json = body_json(get(env.app(), "/api/videos").await).await;
    assert_eq!(
        json,
        json!([{
            "id": "clip",
            "frame_count": 2,
            "selected_count": 1,
            "annotated": true,
            "completed": false,
            "status": "review",
            "difficulty": 2,
        }])
    );
}

#[tokio::test]
async fn legacy_completed_flag_lists_as_done() {
    let env = TestEnv::new();
    env.add_video("old", &["0001.jpg"]);
    env.add_video("new", &["0001.jpg"]);
    env.write_annotation("old", r#"{"video_id": "old", "selected_frames": [1], "completed": true}"#);

    let json = body_json(get(env.app(), "/api/videos").await).await;
    assert_eq!(ids(&json), vec!["new", "old"]);
    assert_eq!(json[1]["status"], "done");
    assert_eq!(json[1]["completed"], true);
}

#[tokio::test]
async fn corrupt_annotation_fails_listing_with_500() {
    let env = TestEnv::new();
    env.add_video("bad", &["0001.jpg"]);
    env.write_annotation("bad", "{ truncated");

    let response = get(env.app(), "/api/videos").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CORRUPT_ANNOTATION");
    assert_eq!(json["error"], "Annotation for video bad is corrupt");
}

#[tokio::test]
async fn new_video_directory_appears_without_restart() {
    let env = TestEnv::new();
    let app = env.app();
    env.add_video("late", &["0001.jpg"]);

    let json = body_json(get(app, "/api/videos").await).await;
    assert_eq!(ids(&json), vec!["late"]);
}

#[tokio::test]
async fn frames_are_filtered_and_sorted() {
    let env = TestEnv::new();
    env.add_video("v1", &["f2.jpg", "f1.jpg", "f3.JPG", "notes.txt"]);

    let response = get(env.app(), "/api/video/v1/frames").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(["f1.jpg", "f2.jpg"]));
}

#[tokio::test]
async fn frames_of_unknown_video_return_404() {
    let env = TestEnv::new();
    let response = get(env.app(), "/api/video/ghost/frames").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Video not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn frames_with_traversal_video_id_are_rejected() {
    let env = TestEnv::new();
    let response = get(env.app(), "/api/video/..%2F..%2Fetc/frames").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
