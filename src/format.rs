// Display helpers shared by the summary header and the entry list

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString as _};

/// `$` followed by the amount with thousands separators and at most three
/// fraction digits, e.g. `$1,234.5`. Negative values render as `$-700`.
pub fn format_amount(value: f64) -> String {
    format!("${}", group_thousands(value))
}

fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // whole thousandths, so rounding happens once
    let milli = (value.abs() * 1000.0).round() as u64;
    let whole = (milli / 1000).to_formatted_string(&Locale::en);
    let fraction = format!("{:03}", milli % 1000);
    let fraction = fraction.trim_end_matches('0');

    let sign = if value < 0.0 && milli != 0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, fraction)
    }
}

/// Short US-style date, e.g. `3/14/2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Cut `s` to `max_len` characters, ending with `...` when shortened
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
