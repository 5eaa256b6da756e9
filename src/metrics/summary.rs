use std::collections::HashSet;

use serde::Serialize;

use super::clock::ReferenceTime;
use super::types::UnifiedLog;

/// Timestamp layout used throughout the summary block.
pub(crate) const SUMMARY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub earliest: String,
    pub latest: String,
}

/// Run-level facts reported next to the windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub analysis_date: String,
    pub files_analyzed: Vec<String>,
    pub date_range: DateRange,
    pub unique_endpoints: u64,
    pub total_records_processed: u64,
}

/// Builds the summary block, or `None` for an empty log.
#[must_use]
pub fn summarize(log: &UnifiedLog, reference: &ReferenceTime) -> Option<RunSummary> {
    let earliest = log.records().iter().map(|record| record.timestamp).min()?;
    let latest = log.records().iter().map(|record| record.timestamp).max()?;
    let endpoints: HashSet<&str> = log
        .records()
        .iter()
        .map(|record| record.endpoint.as_str())
        .filter(|endpoint| !endpoint.is_empty())
        .collect();

    Some(RunSummary {
        analysis_date: reference.format(reference.now, SUMMARY_TIME_FORMAT),
        files_analyzed: log.files().to_vec(),
        date_range: DateRange {
            earliest: reference.format(earliest, SUMMARY_TIME_FORMAT),
            latest: reference.format(latest, SUMMARY_TIME_FORMAT),
        },
        unique_endpoints: endpoints.len() as u64,
        total_records_processed: log.len() as u64,
    })
}
