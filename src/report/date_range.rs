//! Payment range label formatting.

use chrono::NaiveDate;

/// Formats the payment range shown in the report header.
///
/// Both dates are required; when either is missing the label is empty and
/// the header line is omitted.
///
/// # Examples
///
/// ```
/// use settlement_engine::report::format_date_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1);
/// let end = NaiveDate::from_ymd_opt(2025, 6, 30);
/// assert_eq!(format_date_range(start, end), "2025-06-01 to 2025-06-30");
/// assert_eq!(format_date_range(start, None), "");
/// ```
pub fn format_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{} to {}", start, end),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_both_dates_present() {
        assert_eq!(
            format_date_range(date(2024, 1, 1), date(2025, 12, 31)),
            "2024-01-01 to 2025-12-31"
        );
    }

    #[test]
    fn test_missing_start_gives_empty_label() {
        assert_eq!(format_date_range(None, date(2025, 12, 31)), "");
    }

    #[test]
    fn test_both_missing_gives_empty_label() {
        assert_eq!(format_date_range(None, None), "");
    }

    #[test]
    fn test_reversed_dates_are_passed_through() {
        // Ordering is the caller's concern
        assert_eq!(
            format_date_range(date(2025, 2, 1), date(2025, 1, 1)),
            "2025-02-01 to 2025-01-01"
        );
    }
}
