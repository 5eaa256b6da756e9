use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::LoadError;
use crate::metrics::{LogRecord, TimezonePolicy};

use super::timestamp::{parse_latency, parse_timestamp};

const TIMESTAMP_COLUMN: &str = "timestamp";
const STATUS_COLUMN: &str = "status";
const LATENCY_COLUMN: &str = "latency_ms";
const ENDPOINT_COLUMN: &str = "api_call";

/// Header columns every log file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    TIMESTAMP_COLUMN,
    STATUS_COLUMN,
    LATENCY_COLUMN,
    ENDPOINT_COLUMN,
];

/// Records retained from one file.
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    /// Data rows in the file before coercion.
    pub rows_read: usize,
    pub records: Vec<LogRecord>,
}

impl ParsedFile {
    #[must_use]
    pub fn dropped_rows(&self) -> usize {
        self.rows_read.saturating_sub(self.records.len())
    }
}

#[derive(Clone, Copy)]
struct ColumnIndex {
    timestamp: usize,
    status: usize,
    latency: usize,
    endpoint: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };
        Ok(Self {
            timestamp: find(TIMESTAMP_COLUMN)?,
            status: find(STATUS_COLUMN)?,
            latency: find(LATENCY_COLUMN)?,
            endpoint: find(ENDPOINT_COLUMN)?,
        })
    }
}

/// Parses one delimited log file with a header row.
///
/// Rows longer than the header fail the whole file; shorter rows are padded
/// with missing cells. Rows with a missing or unparseable timestamp or
/// latency are counted in `rows_read` but not kept. Only header names are
/// trimmed: `status` and `api_call` cells are taken verbatim.
///
/// # Errors
///
/// Returns an error when the file cannot be opened, is not well-formed
/// delimited data, has a row with more fields than the header, or lacks one
/// of [`REQUIRED_COLUMNS`].
pub fn read_log_file(path: &Path, timezone: TimezonePolicy) -> Result<ParsedFile, LoadError> {
    let file = File::open(path).map_err(|err| LoadError::OpenFile {
        path: path.to_path_buf(),
        source: err,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(file);

    let csv_error = |err: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source: err,
    };

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndex::from_headers(&headers, path)?;
    let source_file = path.display().to_string();

    let mut parsed = ParsedFile::default();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        if row.len() > headers.len() {
            return Err(LoadError::ExtraFields {
                path: path.to_path_buf(),
                line: row.position().map_or(0, csv::Position::line),
                expected: headers.len(),
                found: row.len(),
            });
        }
        parsed.rows_read = parsed.rows_read.saturating_add(1);
        if let Some(record) = coerce_row(&row, columns, timezone, &source_file) {
            parsed.records.push(record);
        }
    }
    Ok(parsed)
}

fn coerce_row(
    row: &StringRecord,
    columns: ColumnIndex,
    timezone: TimezonePolicy,
    source_file: &str,
) -> Option<LogRecord> {
    let timestamp = parse_timestamp(row.get(columns.timestamp)?, timezone)?;
    let latency_ms = parse_latency(row.get(columns.latency)?)?;
    let status = row.get(columns.status).unwrap_or_default().to_owned();
    let endpoint = row.get(columns.endpoint).unwrap_or_default().to_owned();
    Some(LogRecord::new(
        timestamp,
        status,
        latency_ms,
        endpoint,
        source_file.to_owned(),
    ))
}
