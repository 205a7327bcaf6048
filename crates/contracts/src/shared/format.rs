//! Display formatting for amounts, percentages and timestamps

use chrono::{DateTime, NaiveDateTime};

pub const CURRENCY: &str = "KES";

/// Formats a number with a comma thousands separator and the given number of decimals
///
/// # Examples
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money amount with currency prefix and 2 decimals: `KES 1,234,567.89`
pub fn format_money(value: f64) -> String {
    format!("{} {}", CURRENCY, format_number_with_decimals(value, 2))
}

/// Percentage with 2 decimals: `12.50%`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format an ISO timestamp as `YYYY-MM-DD HH:MM`
///
/// Accepts RFC 3339 (`2025-01-01T00:00:00Z`) as well as the naive
/// `datetime-local` form (`2025-01-01T00:00`). Anything else is returned as is.
pub fn format_datetime(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Parse the timestamp shapes the finance API and the forms produce
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Date part of an ISO timestamp: `2025-01-01T10:00:00Z` -> `2025-01-01`
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "KES 1,234.56");
        assert_eq!(format_money(1234567.891), "KES 1,234,567.89");
        assert_eq!(format_money(0.0), "KES 0.00");
        assert_eq!(format_money(-1234.5), "KES -1,234.50");
        assert_eq!(format_money(999.0), "KES 999.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(100000.0, 0), "100,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.5), "12.50%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2025-01-01T00:00:00Z"), "2025-01-01 00:00");
        assert_eq!(format_datetime("2025-03-31T23:59:59.123Z"), "2025-03-31 23:59");
        assert_eq!(format_datetime("2025-04-01T08:30"), "2025-04-01 08:30");
        assert_eq!(format_datetime("not a date"), "not a date");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2025-01-01T00:00:00Z"), "2025-01-01");
        assert_eq!(date_part("2025-01-01"), "2025-01-01");
    }
}
