//! Parsing of numeric form inputs

/// Parses a quantity typed into a number input.
///
/// Blank text is 0, like an emptied field. Anything that is not a
/// non-negative whole number also becomes 0 so totals never go negative.
pub fn parse_amount(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse::<u64>().unwrap_or(0)
}

/// Value shown in an entry input: blank for 0 so the placeholder is visible
pub fn display_amount(value: Option<u64>) -> String {
    match value {
        Some(v) if v > 0 => v.to_string(),
        _ => String::new(),
    }
}
