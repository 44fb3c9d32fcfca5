//! Path component validation.
//!
//! Video ids and frame filenames arrive straight from request paths and are
//! joined onto configured roots, so each one must name exactly one entry
//! inside its parent directory.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Check that `value` is usable as a single path component.
///
/// Rejects empty values, `.` and `..`, path separators (plus `:` on
/// Windows) and control characters (including NUL).
pub fn validate_path_component(value: &str, label: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!("{label} must not be empty")));
    }
    if value == "." || value == ".." {
        return Err(CoreError::InvalidInput(format!(
            "Invalid {label}: contains path traversal sequence"
        )));
    }
    if value.contains('/') || value.contains('\\') || (cfg!(windows) && value.contains(':')) {
        return Err(CoreError::InvalidInput(format!(
            "Invalid {label}: contains path separator"
        )));
    }
    if value.chars().any(char::is_control) {
        return Err(CoreError::InvalidInput(format!(
            "Invalid {label}: contains control characters"
        )));
    }
    Ok(())
}

/// Resolve `candidate` and verify it stays under `base` once symlinks are
/// followed. Both paths must exist.
pub fn ensure_contained(base: &Path, candidate: &Path) -> CoreResult<PathBuf> {
    let base = base.canonicalize()?;
    let resolved = candidate.canonicalize()?;
    if !resolved.starts_with(&base) {
        return Err(CoreError::InvalidInput(format!(
            "Path {} escapes {}",
            candidate.display(),
            base.display()
        )));
    }
    Ok(resolved)
}
