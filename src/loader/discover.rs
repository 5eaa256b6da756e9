use std::path::PathBuf;

use tracing::warn;

use crate::error::LoadError;

/// Lists regular files matching a glob pattern, sorted by path.
///
/// # Errors
///
/// Returns [`LoadError::InvalidPattern`] when the pattern cannot be compiled.
pub fn discover_files(pattern: &str) -> Result<Vec<PathBuf>, LoadError> {
    let entries = glob::glob(pattern).map_err(|err| LoadError::InvalidPattern {
        pattern: pattern.to_owned(),
        source: err,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(path) => {
                tracing::debug!("Skipping non-file match {}", path.display());
            }
            Err(err) => {
                warn!("Skipping unreadable path {}: {}", err.path().display(), err);
            }
        }
    }
    paths.sort();
    Ok(paths)
}
