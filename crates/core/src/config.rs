use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Directory name used for annotations when none is configured. Created as a
/// sibling of the frames root.
pub const DEFAULT_ANNOTATIONS_DIR_NAME: &str = "annotations";

/// Resolved on-disk locations shared by the frame and annotation stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Root holding one sub-directory of JPEG frames per video.
    pub frames_dir: PathBuf,
    /// Directory holding one `<video_id>.json` document per video.
    pub annotations_dir: PathBuf,
}

impl StorageConfig {
    /// Resolve both directories to absolute paths.
    ///
    /// Fails if the frames root is not an existing directory. The annotations
    /// directory defaults to `<parent of frames>/annotations` and is created
    /// if absent.
    pub fn resolve(frames_dir: &Path, annotations_dir: Option<&Path>) -> CoreResult<Self> {
        let frames_dir = std::path::absolute(frames_dir)?;
        if !frames_dir.is_dir() {
            return Err(CoreError::Config(format!(
                "Frames directory not found: {}",
                frames_dir.display()
            )));
        }

        let annotations_dir = match annotations_dir {
            Some(dir) => std::path::absolute(dir)?,
            None => frames_dir
                .parent()
                .unwrap_or(&frames_dir)
                .join(DEFAULT_ANNOTATIONS_DIR_NAME),
        };
        std::fs::create_dir_all(&annotations_dir)?;

        Ok(Self {
            frames_dir,
            annotations_dir,
        })
    }
}
