use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("No CSV files found matching pattern: {pattern}")]
    NoInputFound { pattern: String },
    #[error("No valid data found in CSV files.")]
    NoValidRows,
    #[error("Failed to open '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Line {line} of '{path}' has {found} fields, header has {expected}.")]
    ExtraFields {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("File '{path}' is missing required column '{column}'.")]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

impl LoadError {
    /// Both empty-input conditions surface to callers as a "no data" outcome.
    #[must_use]
    pub const fn is_no_input(&self) -> bool {
        matches!(self, Self::NoInputFound { .. } | Self::NoValidRows)
    }
}
