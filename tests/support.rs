use std::ffi::OsStr;
use std::path::Path;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Runs the built binary inside `cwd` with logging reduced to errors.
///
/// # Errors
///
/// Returns an error if the binary path is unknown or the process cannot run.
pub fn run_apistat<I, S>(cwd: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = apistat_bin()?;
    Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .env_remove("APISTAT_LOG")
        .env_remove("NO_COLOR")
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run apistat failed: {}", err))
}

/// Like [`run_apistat`], feeding `input` on stdin.
///
/// # Errors
///
/// Returns an error if the process cannot run or stdin cannot be written.
pub fn run_apistat_with_input<I, S>(cwd: &Path, args: I, input: &str) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = apistat_bin()?;
    let mut child = Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .env_remove("APISTAT_LOG")
        .env_remove("NO_COLOR")
        .env("RUST_LOG", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| format!("spawn apistat failed: {}", err))?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .map_err(|err| format!("write stdin failed: {}", err))?;
    }
    child
        .wait_with_output()
        .map_err(|err| format!("wait apistat failed: {}", err))
}

/// Fails with both streams attached when the process did not exit cleanly.
///
/// # Errors
///
/// Returns an error describing the failed run.
pub fn ensure_success(output: &Output) -> Result<(), String> {
    if output.status.success() {
        return Ok(());
    }
    Err(format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    ))
}

fn apistat_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_apistat").map_or_else(
        || Err("CARGO_BIN_EXE_apistat missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
