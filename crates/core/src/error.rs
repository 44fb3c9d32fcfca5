#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Corrupt annotation for video {video_id}: {source}")]
    CorruptAnnotation {
        video_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn video_not_found(video_id: &str) -> Self {
        CoreError::NotFound {
            entity: "Video",
            id: video_id.to_string(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
