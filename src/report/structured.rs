use crate::error::ReportError;
use crate::metrics::AnalysisResult;

/// Key-ordered JSON dump of the result, two-space indented.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn to_structured_json(result: &AnalysisResult) -> Result<String, ReportError> {
    serde_json::to_string_pretty(result).map_err(|err| ReportError::Serialize { source: err })
}
