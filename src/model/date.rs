use chrono::NaiveDate;

/// Parse a calendar date from a strict `YYYY-MM-DD` string.
///
/// Only the exact zero-padded ISO shape is accepted; chrono's format
/// strings tolerate unpadded components ("2024-2-9"), so the shape is
/// checked by hand before the components are read. Out-of-range
/// components ("2021-02-30", "2024-13-01") are rejected by
/// `from_ymd_opt` rather than normalized. Anything else returns `None`.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| if i == 4 || i == 7 { true } else { b.is_ascii_digit() })
    {
        return None;
    }

    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse an optional date field; empty or malformed input becomes `None`.
pub fn parse_optional_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        parse_calendar_date(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let d = parse_calendar_date("2025-01-10").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(parse_calendar_date("2024-02-29").is_some());
        assert!(parse_calendar_date("2023-02-29").is_none());
    }

    #[test]
    fn test_parse_rejects_out_of_range_components() {
        assert!(parse_calendar_date("2024-13-01").is_none());
        assert!(parse_calendar_date("2021-02-30").is_none());
        assert!(parse_calendar_date("2021-00-10").is_none());
    }

    #[test]
    fn test_parse_rejects_unpadded_or_misshapen() {
        assert!(parse_calendar_date("2024-2-9").is_none());
        assert!(parse_calendar_date("2024/02/09").is_none());
        assert!(parse_calendar_date("2024-02-09T00:00").is_none());
        assert!(parse_calendar_date("").is_none());
        assert!(parse_calendar_date("not-a-date").is_none());
    }

    #[test]
    fn test_parsed_dates_order_chronologically() {
        let a = parse_calendar_date("2024-12-31").unwrap();
        let b = parse_calendar_date("2025-01-01").unwrap();
        assert!(a < b);
        assert_eq!(a, parse_calendar_date("2024-12-31").unwrap());
    }

    #[test]
    fn test_parse_optional_date() {
        assert!(parse_optional_date("  ").is_none());
        assert!(parse_optional_date(" 2025-06-01 ").is_some());
        assert!(parse_optional_date("garbage").is_none());
    }
}
