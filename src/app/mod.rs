//! One analyzer invocation: load, aggregate, render, export and chart.
mod prompt;
mod request;


use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::charts::plot_dashboard;
use crate::error::{AppError, AppResult};
use crate::loader::load_logs;
use crate::metrics::{AnalysisResult, ReferenceTime, UnifiedLog, analyze};
use crate::report::{export_json, render};

pub use prompt::{confirm_charts, is_affirmative};
pub use request::AnalysisRequest;

/// What one invocation produced.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    /// The loaded records, kept for drawing the dashboard later.
    pub log: UnifiedLog,
    pub dashboard: Option<PathBuf>,
}

/// Runs the analyzer once and writes the rendered report to `out`.
///
/// A pattern matching no files, or files without a single usable row, yields
/// an empty result and a warning rather than an error.
///
/// # Errors
///
/// Returns an error for an invalid glob pattern, or when writing the report,
/// the JSON export or the dashboard fails.
pub fn run_analysis<W: Write>(
    request: &AnalysisRequest,
    reference: &ReferenceTime,
    out: &mut W,
) -> AppResult<AnalysisOutcome> {
    let log = match load_logs(&request.pattern, request.timezone) {
        Ok(log) => log,
        Err(err) if err.is_no_input() => {
            warn!("{}", err);
            UnifiedLog::default()
        }
        Err(err) => return Err(AppError::load(err)),
    };

    let result = analyze(&log, reference);

    debug!("Rendering result as {}", request.output_format.as_str());
    if let Some(rendered) = render(&result, request.output_format)? {
        writeln!(out, "{}", rendered)?;
        out.flush()?;
    }

    if let Some(path) = request.export_json.as_deref() {
        export_json(path, &result)?;
        info!("Results exported to {}", path.display());
    }

    let mut outcome = AnalysisOutcome {
        result,
        log,
        dashboard: None,
    };
    if request.charts {
        outcome.dashboard = draw_dashboard(&outcome, &request.charts_path, reference)?;
    }
    Ok(outcome)
}

/// Draws the dashboard for a finished run. Empty runs draw nothing.
///
/// # Errors
///
/// Returns an error when the charts directory or the image cannot be written.
pub fn draw_dashboard(
    outcome: &AnalysisOutcome,
    charts_dir: &Path,
    reference: &ReferenceTime,
) -> AppResult<Option<PathBuf>> {
    if outcome.result.is_empty() {
        return Ok(None);
    }
    plot_dashboard(&outcome.log, &outcome.result, charts_dir, reference)
}

/// Asks whether to draw the dashboard, then draws it.
///
/// The question goes to `prompt`, which the CLI points at stderr so the
/// rendered report on stdout is left untouched.
///
/// # Errors
///
/// Returns an error when the answer cannot be read or drawing fails.
pub fn prompt_for_dashboard<R, W>(
    outcome: &AnalysisOutcome,
    charts_dir: &Path,
    reference: &ReferenceTime,
    input: &mut R,
    prompt: &mut W,
) -> AppResult<Option<PathBuf>>
where
    R: BufRead,
    W: Write,
{
    if outcome.result.is_empty() {
        return Ok(None);
    }
    let confirmed = confirm_charts(input, prompt)?;
    if !confirmed {
        debug!("Dashboard declined");
        return Ok(None);
    }
    draw_dashboard(outcome, charts_dir, reference)
}
