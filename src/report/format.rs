/// Integer with thousands separators.
#[must_use]
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Milliseconds rounded to a whole number, with thousands separators.
#[must_use]
pub fn format_ms(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let grouped = group_thousands(&digits);
    if value.is_sign_negative() && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Percentage with one decimal.
#[must_use]
pub fn format_rate(value: f64) -> String {
    format!("{:.1}", value)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len.saturating_add(len / 3));
    for (idx, ch) in digits.chars().enumerate() {
        let remaining = len.saturating_sub(idx);
        if idx > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
