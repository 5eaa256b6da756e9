use crate::metrics::ReferenceTime;

const FILE_PREFIX: &str = "api_log_analysis_";
const FILE_STAMP: &str = "%Y%m%d_%H%M%S";

/// `api_log_analysis_YYYYmmdd_HHMMSS.png`, stamped with the reference time.
#[must_use]
pub fn dashboard_file_name(reference: &ReferenceTime) -> String {
    format!(
        "{}{}.png",
        FILE_PREFIX,
        reference.format(reference.now, FILE_STAMP)
    )
}
