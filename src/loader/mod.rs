//! Discovery and parsing of delimited API request logs.
mod discover;
mod parsing;
mod timestamp;


use tracing::{info, warn};

use crate::error::LoadError;
use crate::metrics::{TimezonePolicy, UnifiedLog};

pub use discover::discover_files;
pub use parsing::{ParsedFile, REQUIRED_COLUMNS, read_log_file};
pub use timestamp::{parse_latency, parse_timestamp};

/// Loads every file matching `pattern` into one unified log.
///
/// Files that cannot be parsed are skipped with a warning; rows whose
/// timestamp or latency cannot be coerced are dropped.
///
/// # Errors
///
/// Returns [`LoadError::InvalidPattern`] for a malformed pattern, and
/// [`LoadError::NoInputFound`] or [`LoadError::NoValidRows`] when nothing
/// usable was found. Callers treat the latter two as an empty result.
pub fn load_logs(pattern: &str, timezone: TimezonePolicy) -> Result<UnifiedLog, LoadError> {
    let paths = discover_files(pattern)?;
    if paths.is_empty() {
        return Err(LoadError::NoInputFound {
            pattern: pattern.to_owned(),
        });
    }

    let mut records = Vec::new();
    let mut files = Vec::with_capacity(paths.len());
    let mut dropped_rows: usize = 0;

    for path in &paths {
        match read_log_file(path, timezone) {
            Ok(parsed) => {
                info!(
                    "Loaded {} records from {}",
                    parsed.rows_read,
                    path.display()
                );
                dropped_rows = dropped_rows.saturating_add(parsed.dropped_rows());
                records.extend(parsed.records);
                files.push(path.display().to_string());
            }
            Err(err) => {
                warn!("Error reading {}: {}", path.display(), err);
            }
        }
    }

    if files.is_empty() || records.is_empty() {
        return Err(LoadError::NoValidRows);
    }

    if dropped_rows > 0 {
        tracing::debug!("Dropped {} rows with invalid timestamp or latency", dropped_rows);
    }
    info!("Total records processed: {}", records.len());

    Ok(UnifiedLog::new(records, files))
}
