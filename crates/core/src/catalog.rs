//! Video listing with derived annotation state.
//!
//! Combines [`FrameStore`] and [`AnnotationStore`] into the summaries the UI
//! renders, ordered so unfinished work comes first:
//!
//! | Bucket | Condition                       |
//! |--------|---------------------------------|
//! | 0      | no status, has selected frames  |
//! | 1      | no status, nothing selected     |
//! | 2      | `skip`                          |
//! | 3      | `review`                        |
//! | 4      | `done`                          |
//!
//! Ties within a bucket break on the video id.

use serde::Serialize;
use serde_json::Value;

use crate::annotation::{Annotation, AnnotationStatus};
use crate::config::StorageConfig;
use crate::error::CoreResult;
use crate::frames::FrameStore;
use crate::store::AnnotationStore;

/// Listing priority. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortBucket {
    InProgress,
    Untouched,
    Skipped,
    Review,
    Done,
}

impl SortBucket {
    pub fn of(status: Option<AnnotationStatus>, annotated: bool) -> Self {
        match status {
            Some(AnnotationStatus::Skip) => SortBucket::Skipped,
            Some(AnnotationStatus::Review) => SortBucket::Review,
            Some(AnnotationStatus::Done) => SortBucket::Done,
            None if annotated => SortBucket::InProgress,
            None => SortBucket::Untouched,
        }
    }
}

/// One row of `GET /api/videos`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoSummary {
    pub id: String,
    pub frame_count: usize,
    pub selected_count: usize,
    pub annotated: bool,
    pub completed: bool,
    pub status: Option<AnnotationStatus>,
    pub difficulty: Option<Value>,
}

impl VideoSummary {
    /// Derive a summary from a loaded (already normalized) annotation.
    pub fn new(id: String, frame_count: usize, annotation: Annotation) -> Self {
        let selected_count = annotation.selected_frames.len();
        Self {
            id,
            frame_count,
            selected_count,
            annotated: annotation.is_annotated(),
            completed: annotation.is_completed(),
            status: annotation.status,
            difficulty: annotation.difficulty,
        }
    }

    pub fn bucket(&self) -> SortBucket {
        SortBucket::of(self.status, self.annotated)
    }
}

#[derive(Debug, Clone)]
pub struct VideoCatalog {
    frames: FrameStore,
    annotations: AnnotationStore,
}

impl VideoCatalog {
    pub fn new(frames: FrameStore, annotations: AnnotationStore) -> Self {
        Self {
            frames,
            annotations,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            FrameStore::new(&config.frames_dir),
            AnnotationStore::new(&config.annotations_dir),
        )
    }

    pub fn frames(&self) -> &FrameStore {
        &self.frames
    }

    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    /// Summaries for every video on disk, in bucket-then-id order.
    ///
    /// A corrupt annotation for any video fails the whole listing.
    pub fn list(&self) -> CoreResult<Vec<VideoSummary>> {
        let mut summaries = Vec::new();
        for video_id in self.frames.list_videos()? {
            let frame_count = self.frames.list_frames(&video_id)?.len();
            let annotation = self.annotations.load(&video_id)?;
            summaries.push(VideoSummary::new(video_id, frame_count, annotation));
        }
        sort_summaries(&mut summaries);
        Ok(summaries)
    }
}

pub fn sort_summaries(summaries: &mut [VideoSummary]) {
    summaries.sort_by(|a, b| {
        a.bucket()
            .cmp(&b.bucket())
            .then_with(|| a.id.cmp(&b.id))
    });
}
