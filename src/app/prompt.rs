use std::io::{BufRead, Write};

use crate::error::ReportError;

const CHARTS_QUESTION: &str = "Would you like to generate visualization charts? (y/N): ";
const AFFIRMATIVE: [&str; 4] = ["y", "yes", "1", "true"];

/// Trimmed, case-insensitive yes.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

/// Asks whether to draw the dashboard. End of input counts as no.
///
/// # Errors
///
/// Returns an error when the question cannot be written or the answer read.
pub fn confirm_charts<R, W>(input: &mut R, output: &mut W) -> Result<bool, ReportError>
where
    R: BufRead,
    W: Write,
{
    let prompt_error = |err: std::io::Error| ReportError::Prompt { source: err };
    write!(output, "\n{}", CHARTS_QUESTION).map_err(prompt_error)?;
    output.flush().map_err(prompt_error)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(prompt_error)?;
    Ok(is_affirmative(&answer))
}
