use chrono::{Datelike, Month, NaiveDateTime, Weekday};
use tracing::warn;

// ── Timestamp parsing ─────────────────────────────────────────────────────────

const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a `Start Time` cell into a naive local [`NaiveDateTime`].
///
/// Trip exports carry wall-clock times without any offset, so no timezone
/// conversion is applied. Returns `None` for empty strings or unrecognised
/// formats.
pub fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    warn!("could not parse timestamp \"{}\"", s);
    None
}

// ── Calendar names ────────────────────────────────────────────────────────────

/// Full English month name, e.g. `"June"`.
pub fn month_name(month: Month) -> &'static str {
    month.name()
}

/// Full English weekday name, e.g. `"Wednesday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Calendar month of `ts`.
pub fn month_of(ts: &NaiveDateTime) -> Month {
    // `month()` is always in 1..=12.
    match Month::try_from(ts.month() as u8) {
        Ok(m) => m,
        Err(_) => Month::January,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_space_separated() {
        let ts = parse_start_time("2017-06-23 15:09:32").unwrap();
        assert_eq!(ts.year(), 2017);
        assert_eq!(ts.month(), 6);
        assert_eq!(ts.hour(), 15);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let ts = parse_start_time("2017-01-01 00:07:57.123").unwrap();
        assert_eq!(ts.minute(), 7);
    }

    #[test]
    fn test_parse_t_separator() {
        assert!(parse_start_time("2017-03-04T08:00:00").is_some());
    }

    #[test]
    fn test_parse_without_seconds() {
        let ts = parse_start_time("2017-03-04 08:15").unwrap();
        assert_eq!(ts.minute(), 15);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_start_time("  2017-03-04 08:00:00 ").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_start_time("").is_none());
        assert!(parse_start_time("not a date").is_none());
        assert!(parse_start_time("2017-13-01 00:00:00").is_none());
    }

    #[test]
    fn test_month_of() {
        let ts = parse_start_time("2017-06-23 15:09:32").unwrap();
        assert_eq!(month_of(&ts), Month::June);
        assert_eq!(month_name(month_of(&ts)), "June");
    }

    #[test]
    fn test_weekday_names() {
        // 2017-06-23 was a Friday.
        let ts = parse_start_time("2017-06-23 15:09:32").unwrap();
        assert_eq!(weekday_name(ts.weekday()), "Friday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }
}
