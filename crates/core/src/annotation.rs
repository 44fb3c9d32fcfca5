//! Per-video annotation document.
//!
//! One document exists logically for every video. A missing file is
//! equivalent to [`Annotation::empty`], and every write replaces the whole
//! document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Review state a video can be placed in.
///
/// Absence of a status (`null` or a missing field) means the video is still
/// open for annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationStatus {
    Skip,
    Review,
    Done,
}

impl AnnotationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationStatus::Skip => "skip",
            AnnotationStatus::Review => "review",
            AnnotationStatus::Done => "done",
        }
    }
}

/// The JSON document stored at `<annotations_dir>/<video_id>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Owning video. Always overwritten by the store on save.
    #[serde(default)]
    pub video_id: String,
    /// Selected frames as sent by the client (filenames or indices).
    #[serde(default)]
    pub selected_frames: Vec<Value>,
    /// Client-defined action log.
    #[serde(default)]
    pub history: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AnnotationStatus>,
    /// Legacy flag written by older clients before `status` existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Value>,
    /// Set by the store on every successful write.
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    /// Any other top-level fields the client stored.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Top-level keys the store sets on every write. Client values are discarded
/// unread.
pub const STORE_OWNED_FIELDS: [&str; 2] = ["video_id", "last_modified"];

impl Annotation {
    /// Build a document from a client-supplied JSON object.
    ///
    /// Store-owned keys are dropped first, so a malformed `last_modified` or
    /// a non-string `video_id` never fails the request.
    pub fn from_client_object(mut object: Map<String, Value>) -> serde_json::Result<Self> {
        for key in STORE_OWNED_FIELDS {
            object.remove(key);
        }
        serde_json::from_value(Value::Object(object))
    }

    /// The document a video has before anything was ever saved for it.
    pub fn empty(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            selected_frames: Vec::new(),
            history: Vec::new(),
            status: None,
            completed: None,
            difficulty: None,
            last_modified: None,
            extra: Map::new(),
        }
    }

    /// Fold the legacy `completed` flag into `status`.
    ///
    /// Documents written before `status` existed only carry
    /// `completed: true`; those read as `status == done`. An explicit status
    /// always wins.
    pub fn normalize_legacy(&mut self) {
        if self.status.is_none() && self.completed == Some(true) {
            self.status = Some(AnnotationStatus::Done);
        }
    }

    pub fn is_annotated(&self) -> bool {
        !self.selected_frames.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.status == Some(AnnotationStatus::Done)
    }
}
