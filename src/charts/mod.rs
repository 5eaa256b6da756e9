mod buckets;
mod naming;
mod panels;


use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::{error, info};

use crate::error::{AppError, AppResult, ReportError};
use crate::metrics::{AnalysisResult, ReferenceTime, UnifiedLog};

pub use buckets::{
    HISTOGRAM_CEILING_MS, HISTOGRAM_EDGES, HourlyBucket, LatencyHistogram, PeriodCounts,
    hourly_buckets, latency_histogram, period_counts,
};
pub use naming::dashboard_file_name;

const DASHBOARD_SIZE: (u32, u32) = (1600, 1200);
const DASHBOARD_TITLE: &str = "API Log Analysis Dashboard";

/// Renders the 2x2 dashboard into `charts_dir` and returns the image path.
///
/// Nothing is drawn for an empty log.
///
/// # Errors
///
/// Returns an error when the directory cannot be created or drawing fails.
pub fn plot_dashboard(
    log: &UnifiedLog,
    result: &AnalysisResult,
    charts_dir: &Path,
    reference: &ReferenceTime,
) -> AppResult<Option<PathBuf>> {
    if log.is_empty() {
        return Ok(None);
    }

    if let Err(err) = fs::create_dir_all(charts_dir) {
        error!(
            "Failed to create output directory '{}': {}",
            charts_dir.display(),
            err
        );
        return Err(AppError::report(ReportError::CreateChartsDir {
            path: charts_dir.to_path_buf(),
            source: err,
        }));
    }

    let path = charts_dir.join(dashboard_file_name(reference));
    let hourly = hourly_buckets(log.records(), reference.timezone);
    let histogram = latency_histogram(log.records());
    let periods = period_counts(result);

    {
        let root = BitMapBackend::new(&path, DASHBOARD_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let body = root.titled(DASHBOARD_TITLE, ("sans-serif", 32))?;
        if let [rate, distribution, latency, counts] = body.split_evenly((2, 2)).as_slice() {
            panels::draw_success_rate(rate, &hourly)?;
            panels::draw_latency_histogram(distribution, &histogram)?;
            panels::draw_average_latency(latency, &hourly)?;
            panels::draw_period_counts(counts, &periods)?;
        }
        root.present()?;
    }

    info!("Visualization saved as: {}", path.display());
    Ok(Some(path))
}
