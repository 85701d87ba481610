//! pt-BR number formatting for dashboard and table cells
//!
//! Thousands are grouped with `.`; values are shown without decimals,
//! matching how the production sheets are read on the floor.

/// Formats an integer with `.` as the thousands separator
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::format_int;
/// assert_eq!(format_int(1234567), "1.234.567");
/// ```
pub fn format_int(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if value < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

/// Same as [`format_int`] for unsigned counters
pub fn format_count(value: u64) -> String {
    format_int(i64::try_from(value).unwrap_or(i64::MAX))
}

/// Rounds to the nearest integer (halves away from zero) and groups thousands
pub fn format_rounded(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    format_int(value.round() as i64)
}

/// Percent with no decimals, e.g. `"87%"`
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", value.round() as i64)
}
