use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ReportError;
use crate::metrics::AnalysisResult;

/// Writes the structured dump of `result` to `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn export_json(path: &Path, result: &AnalysisResult) -> Result<(), ReportError> {
    let write_error = |err: std::io::Error| ReportError::WriteOutput {
        path: path.to_path_buf(),
        source: err,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result)
        .map_err(|err| ReportError::Serialize { source: err })?;
    writer.write_all(b"\n").map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
