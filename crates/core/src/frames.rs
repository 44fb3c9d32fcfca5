//! Read-only view of the frames root.
//!
//! Layout: `<root>/<video_id>/<frame>.jpg`. Nothing is cached; every call
//! re-scans the directory so frames added or removed on disk show up on the
//! next request.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::paths::{ensure_contained, validate_path_component};

/// Frame files are matched on this exact, case-sensitive suffix.
pub const FRAME_EXTENSION: &str = ".jpg";

/// Whether `name` is listed as a frame.
pub fn is_frame_file(name: &str) -> bool {
    name.ends_with(FRAME_EXTENSION)
}

#[derive(Debug, Clone)]
pub struct FrameStore {
    root: PathBuf,
}

impl FrameStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// One id per immediate sub-directory of the root, in byte order.
    pub fn list_videos(&self) -> CoreResult<BTreeSet<String>> {
        let mut videos = BTreeSet::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) if validate_path_component(&name, "video_id").is_ok() => {
                    videos.insert(name);
                }
                Ok(name) => {
                    tracing::warn!(name, "Skipping video directory with unusable name");
                }
                Err(name) => {
                    tracing::warn!(name = ?name, "Skipping video directory with non-UTF-8 name");
                }
            }
        }
        Ok(videos)
    }

    /// Directory holding a video's frames. Fails with `NotFound` when it
    /// does not exist.
    pub fn video_dir(&self, video_id: &str) -> CoreResult<PathBuf> {
        validate_path_component(video_id, "video_id")?;
        let dir = self.root.join(video_id);
        if !dir.is_dir() {
            return Err(CoreError::video_not_found(video_id));
        }
        Ok(dir)
    }

    /// Frame filenames for a video, sorted ascending.
    pub fn list_frames(&self, video_id: &str) -> CoreResult<Vec<String>> {
        let dir = self.video_dir(video_id)?;
        let mut frames = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) if is_frame_file(&name) => frames.push(name),
                Ok(_) => {}
                Err(name) => {
                    tracing::warn!(video_id, name = ?name, "Skipping frame with non-UTF-8 name");
                }
            }
        }
        frames.sort_unstable();
        Ok(frames)
    }

    /// Resolve a frame for serving.
    ///
    /// The filename must be a single path component and, once symlinks are
    /// resolved, must still live inside the video's directory.
    pub fn frame_path(&self, video_id: &str, filename: &str) -> CoreResult<PathBuf> {
        let dir = self.video_dir(video_id)?;
        validate_path_component(filename, "filename")?;

        let candidate = dir.join(filename);
        if !candidate.is_file() {
            return Err(CoreError::NotFound {
                entity: "Frame",
                id: format!("{video_id}/{filename}"),
            });
        }
        ensure_contained(&dir, &candidate)
    }
}
