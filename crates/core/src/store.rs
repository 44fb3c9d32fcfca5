//! Durable per-video annotation documents.
//!
//! Each video owns `<dir>/<video_id>.json`. Writes go to a sibling
//! `<video_id>.json.tmp` which is then renamed over the target, so readers
//! only ever observe a complete document (or none). Writers to the same
//! video are serialized on a per-video lock that is held from the temp write
//! through the rename; the last writer wins.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use crate::annotation::Annotation;
use crate::error::{CoreError, CoreResult};
use crate::paths::validate_path_component;

type VideoLocks = Mutex<HashMap<String, Arc<Mutex<()>>>>;

/// Clones share the same write locks.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    dir: PathBuf,
    locks: Arc<VideoLocks>,
}

impl AnnotationStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            locks: Arc::default(),
        }
    }

    /// Create the annotations directory if it does not exist yet.
    pub fn ensure_dir(&self) -> CoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    pub fn annotation_path(&self, video_id: &str) -> PathBuf {
        self.dir.join(format!("{video_id}.json"))
    }

    fn temp_path(&self, video_id: &str) -> PathBuf {
        self.dir.join(format!("{video_id}.json.tmp"))
    }

    /// The write lock for one video, created on first use.
    fn video_lock(&self, video_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(video_id.to_string()).or_default())
    }

    /// Load a video's document, falling back to [`Annotation::empty`] when no
    /// file exists. Legacy fields are normalized before returning.
    pub fn load(&self, video_id: &str) -> CoreResult<Annotation> {
        validate_path_component(video_id, "video_id")?;
        let path = self.annotation_path(video_id);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Annotation::empty(video_id)),
            Err(e) => return Err(e.into()),
        };

        let mut annotation: Annotation =
            serde_json::from_str(&content).map_err(|source| CoreError::CorruptAnnotation {
                video_id: video_id.to_string(),
                source,
            })?;
        annotation.normalize_legacy();
        Ok(annotation)
    }

    /// Replace a video's document.
    ///
    /// `video_id` and `last_modified` are owned by the store and overwrite
    /// whatever the caller supplied. Returns the document as written.
    pub fn save(&self, video_id: &str, mut document: Annotation) -> CoreResult<Annotation> {
        validate_path_component(video_id, "video_id")?;
        self.ensure_dir()?;

        document.video_id = video_id.to_string();
        document.last_modified = Some(Utc::now());

        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| CoreError::Internal(format!("Failed to serialize annotation: {e}")))?;

        let path = self.annotation_path(video_id);
        let lock = self.video_lock(video_id);
        {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            let temp_path = self.write_temp(video_id, &bytes)?;
            commit(&temp_path, &path)?;
        }

        tracing::debug!(
            video_id,
            path = %path.display(),
            selected = document.selected_frames.len(),
            "Annotation saved"
        );
        Ok(document)
    }

    /// Write the full payload to the temp file and fsync it.
    fn write_temp(&self, video_id: &str, bytes: &[u8]) -> CoreResult<PathBuf> {
        let temp_path = self.temp_path(video_id);
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(temp_path)
    }
}

/// Atomically move the temp file over the target, removing it on failure.
fn commit(temp_path: &Path, path: &Path) -> CoreResult<()> {
    std::fs::rename(temp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(temp_path);
        tracing::error!(
            error = %e,
            from = %temp_path.display(),
            to = %path.display(),
            "Failed to replace annotation file"
        );
        CoreError::Io(e)
    })
}
