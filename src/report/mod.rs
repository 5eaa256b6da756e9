//! Renderers for the analysis result.
mod export;
mod format;
mod pretty;
mod structured;


use crate::args::OutputFormat;
use crate::error::ReportError;
use crate::metrics::AnalysisResult;

pub use export::export_json;
pub use format::{format_count, format_ms, format_rate};
pub use pretty::report_lines;
pub use structured::to_structured_json;

/// Renders `result` for stdout, or `None` when the format prints nothing.
///
/// # Errors
///
/// Returns an error when the structured dump cannot be serialized.
pub fn render(result: &AnalysisResult, format: OutputFormat) -> Result<Option<String>, ReportError> {
    match format {
        OutputFormat::Json => to_structured_json(result).map(Some),
        OutputFormat::Pretty => {
            let lines = report_lines(result);
            Ok((!lines.is_empty()).then(|| lines.join("\n")))
        }
        OutputFormat::Raw => Ok(None),
    }
}
