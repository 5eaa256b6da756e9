//! Log records, time windows, and per-window metric aggregation.
mod analysis;
mod clock;
mod percentiles;
mod stats;
mod summary;
mod types;
mod window;


pub use analysis::{AnalysisResult, analyze};
pub use clock::{ReferenceTime, TimezonePolicy};
pub use percentiles::{mean, percentile, round2};
pub use stats::{MetricSet, compute_metric_set};
pub use summary::{DateRange, RunSummary, summarize};
pub use types::{LogRecord, SUCCESS_STATUS, UnifiedLog};
pub use window::TimeWindow;
