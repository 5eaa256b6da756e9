mod support;

use std::fs;

use serde_json::Value;
use tempfile::tempdir;

use support::{ensure_success, run_apistat, run_apistat_with_input};

const GATEWAY_LOG: &str = "\
timestamp,status,latency_ms,api_call
2020-03-02 10:00:00,success,120,/orders
2020-03-02 10:20:00,success,180,/orders
2020-03-02 11:05:00,failure,4000,/payments
2020-03-02 11:10:00,success,N/A,/payments
";

const BILLING_LOG: &str = "\
api_call,latency_ms,status,timestamp
/invoices,90,success,2020-03-03T08:00:00Z
/invoices,250,error,2020-03-03T09:00:00Z
";

fn parse_json(bytes: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(bytes).map_err(|err| {
        format!(
            "stdout is not JSON ({}): {}",
            err,
            String::from_utf8_lossy(bytes)
        )
    })
}

fn count_at(value: &Value, pointer: &str) -> Result<u64, String> {
    value
        .pointer(pointer)
        .and_then(Value::as_u64)
        .ok_or_else(|| format!("missing {} in {}", pointer, value))
}

#[test]
fn e2e_json_report_over_multiple_files() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("gateway.csv"), GATEWAY_LOG)
        .map_err(|err| format!("write log failed: {}", err))?;
    fs::write(dir.path().join("billing.csv"), BILLING_LOG)
        .map_err(|err| format!("write log failed: {}", err))?;

    let output = run_apistat(dir.path(), ["*.csv", "-o", "json", "--timezone", "utc"])?;
    ensure_success(&output)?;
    let value = parse_json(&output.stdout)?;

    let checks = [
        ("/all_time/total_requests", 5),
        ("/all_time/success_count", 3),
        ("/all_time/failure_count", 2),
        ("/today/total_requests", 0),
        ("/summary/total_records_processed", 5),
        ("/summary/unique_endpoints", 3),
    ];
    for (pointer, expected) in checks {
        let actual = count_at(&value, pointer)?;
        if actual != expected {
            return Err(format!("{}: expected {}, got {}", pointer, expected, actual));
        }
    }

    let earliest = value
        .pointer("/summary/date_range/earliest")
        .and_then(Value::as_str);
    if earliest != Some("2020-03-02 10:00:00") {
        return Err(format!("unexpected earliest timestamp: {:?}", earliest));
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let keys = [
        "\"today\"",
        "\"this_week\"",
        "\"this_month\"",
        "\"last_7_days\"",
        "\"last_30_days\"",
        "\"all_time\"",
        "\"summary\"",
    ];
    let positions: Vec<Option<usize>> = keys.iter().map(|key| text.find(key)).collect();
    if positions.iter().any(Option::is_none) || !positions.is_sorted() {
        return Err(format!("unexpected key order: {}", text));
    }
    Ok(())
}

#[test]
fn e2e_no_matching_files_prints_empty_object() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_apistat(dir.path(), ["logs/*.csv", "-o", "json"])?;
    ensure_success(&output)?;
    if String::from_utf8_lossy(&output.stdout).trim() != "{}" {
        return Err(format!(
            "expected {{}}, got {}",
            String::from_utf8_lossy(&output.stdout)
        ));
    }
    Ok(())
}

#[test]
fn e2e_pretty_report_and_export() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("gateway.csv"), GATEWAY_LOG)
        .map_err(|err| format!("write log failed: {}", err))?;
    fs::write(dir.path().join("broken.csv"), "timestamp,status\n2020-03-02,success\n")
        .map_err(|err| format!("write log failed: {}", err))?;

    let output = run_apistat(
        dir.path(),
        ["*.csv", "--timezone", "utc", "--export-json", "result.json"],
    )?;
    ensure_success(&output)?;

    let report = String::from_utf8_lossy(&output.stdout);
    for expected in ["API LOG ANALYSIS RESULTS", "ALL TIME", "Files Analyzed: 1"] {
        if !report.contains(expected) {
            return Err(format!("missing '{}' in report:\n{}", expected, report));
        }
    }
    if report.contains("TODAY") {
        return Err(format!("empty window was printed:\n{}", report));
    }

    let exported = fs::read(dir.path().join("result.json"))
        .map_err(|err| format!("export missing: {}", err))?;
    let value = parse_json(&exported)?;
    if count_at(&value, "/all_time/total_requests")? != 3 {
        return Err(format!("unexpected export: {}", value));
    }
    Ok(())
}

#[test]
fn e2e_config_file_sets_defaults() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::create_dir_all(dir.path().join("logs"))
        .map_err(|err| format!("create logs dir failed: {}", err))?;
    fs::write(dir.path().join("logs").join("gateway.csv"), GATEWAY_LOG)
        .map_err(|err| format!("write log failed: {}", err))?;
    fs::write(
        dir.path().join("apistat.toml"),
        "pattern = \"logs/*.csv\"\noutput_format = \"json\"\ntimezone = \"utc\"\n",
    )
    .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_apistat(dir.path(), Vec::<&str>::new())?;
    ensure_success(&output)?;
    let value = parse_json(&output.stdout)?;
    if count_at(&value, "/all_time/total_requests")? != 3 {
        return Err(format!("unexpected output: {}", value));
    }
    Ok(())
}

#[test]
fn e2e_chart_question_stays_off_stdout() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(dir.path().join("gateway.csv"), GATEWAY_LOG)
        .map_err(|err| format!("write log failed: {}", err))?;

    let output = run_apistat_with_input(
        dir.path(),
        ["*.csv", "-o", "json", "--ask-charts", "--charts-path", "charts"],
        "n\n",
    )?;
    ensure_success(&output)?;
    let value = parse_json(&output.stdout)?;
    if count_at(&value, "/all_time/total_requests")? != 3 {
        return Err(format!("unexpected output: {}", value));
    }
    if !String::from_utf8_lossy(&output.stderr).contains("(y/N)") {
        return Err(format!(
            "question missing from stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    if dir.path().join("charts").exists() {
        return Err("declined dashboard was drawn".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_invalid_pattern_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_apistat(dir.path(), ["logs/[unclosed"])?;
    if output.status.success() {
        return Err("invalid pattern must fail".to_owned());
    }
    Ok(())
}
