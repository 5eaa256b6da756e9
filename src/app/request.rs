use std::path::PathBuf;

use crate::args::{AnalyzerArgs, OutputFormat};
use crate::metrics::TimezonePolicy;

/// Settings of one run, after config and CLI have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub pattern: String,
    pub output_format: OutputFormat,
    pub charts: bool,
    pub charts_path: PathBuf,
    pub export_json: Option<PathBuf>,
    pub timezone: TimezonePolicy,
}

impl AnalysisRequest {
    #[must_use]
    pub fn new(pattern: impl Into<String>, output_format: OutputFormat) -> Self {
        Self {
            pattern: pattern.into(),
            output_format,
            charts: false,
            charts_path: PathBuf::from(crate::args::default_charts_path()),
            export_json: None,
            timezone: TimezonePolicy::default(),
        }
    }
}

impl From<&AnalyzerArgs> for AnalysisRequest {
    fn from(args: &AnalyzerArgs) -> Self {
        Self {
            pattern: args.pattern.clone(),
            output_format: args.output_format,
            charts: args.charts,
            charts_path: PathBuf::from(&args.charts_path),
            export_json: args.export_json.as_ref().map(PathBuf::from),
            timezone: args.timezone,
        }
    }
}
