//! Request handlers.
//!
//! Core stores do synchronous filesystem work, so handlers hand it to the
//! blocking pool via [`run_blocking`] and map errors through [`AppError`].

pub mod annotation;
pub mod frames;
pub mod videos;

use framelabel_core::error::CoreResult;

use crate::error::{AppError, AppResult};

/// Run a blocking core operation off the async runtime.
pub(crate) async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> CoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::InternalError(format!("Blocking task failed: {e}")))?
        .map_err(AppError::from)
}
