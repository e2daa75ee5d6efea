/// Utilities for date formatting
///
/// Tour dates travel as ISO `YYYY-MM-DD` and are shown in US style.
use chrono::NaiveDate;

/// "Sun, Jun 15, 2025" for date chips
pub fn format_date_chip(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// "June 15, 2025" for confirmations and tables
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Parse an ISO date coming from a query string or a `<select>` value
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_date_chip() {
        assert_eq!(format_date_chip(d(2025, 6, 15)), "Sun, Jun 15, 2025");
        assert_eq!(format_date_chip(d(2025, 9, 5)), "Fri, Sep 5, 2025");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(d(2025, 7, 10)), "July 10, 2025");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-08-05"), Some(d(2025, 8, 5)));
        assert_eq!(parse_iso_date(" 2025-08-05 "), Some(d(2025, 8, 5)));
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("05.08.2025"), None);
    }
}
