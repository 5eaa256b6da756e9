use chrono::{DateTime, Utc};

/// Status literal that marks a request as successful.
pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub success: bool,
    pub latency_ms: f64,
    pub endpoint: String,
    pub source_file: String,
}

impl LogRecord {
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        status: String,
        latency_ms: f64,
        endpoint: String,
        source_file: String,
    ) -> Self {
        let success = status == SUCCESS_STATUS;
        Self {
            timestamp,
            status,
            success,
            latency_ms,
            endpoint,
            source_file,
        }
    }
}

/// Merged, cleaned records from every input file that could be read.
///
/// Built once per invocation and only read afterwards. Record order carries
/// no meaning for any aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedLog {
    records: Vec<LogRecord>,
    files: Vec<String>,
}

impl UnifiedLog {
    #[must_use]
    pub const fn new(records: Vec<LogRecord>, files: Vec<String>) -> Self {
        Self { records, files }
    }

    #[must_use]
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
