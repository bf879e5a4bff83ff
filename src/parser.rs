//! Parser for the `Received` timestamp column.
//!
//! Exports stamp each package as `Mon, 03 Jul 2023 09:15 AM`.

use chrono::{NaiveDate, NaiveDateTime, Weekday};

/// Format of everything after the leading weekday abbreviation.
const DATE_TIME_FORMAT: &str = "%d %b %Y %I:%M %p";

/// Earliest timestamp kept by the cleaner: 2023-07-01 00:00.
pub fn cutoff() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 7, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Parses a `Received` value, returning `None` for anything malformed.
///
/// The weekday must be a three-letter abbreviation but is not checked against
/// the date, so a mislabelled weekday still yields the stamped date. Fields
/// after the comma must be separated by whitespace.
pub fn parse_received(raw: &str) -> Option<NaiveDateTime> {
    let (weekday, rest) = raw.trim().split_once(',')?;
    if weekday.len() != 3 || !weekday.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    weekday.parse::<Weekday>().ok()?;

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    // day, month, year, hh:mm, AM/PM
    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.len() != 5 {
        return None;
    }
    NaiveDateTime::parse_from_str(&fields.join(" "), DATE_TIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_morning() {
        let ts = parse_received("Mon, 03 Jul 2023 09:15 AM").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2023, 7, 3).unwrap());
        assert_eq!((ts.hour(), ts.minute()), (9, 15));
    }

    #[test]
    fn test_parse_afternoon_uses_12_hour_clock() {
        let ts = parse_received("Tue, 04 Jul 2023 02:30 PM").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2023, 7, 4).unwrap());
        assert_eq!(ts.hour(), 14);
    }

    #[test]
    fn test_parse_noon_and_midnight() {
        assert_eq!(parse_received("Fri, 01 Sep 2023 12:05 PM").unwrap().hour(), 12);
        assert_eq!(parse_received("Fri, 01 Sep 2023 12:05 AM").unwrap().hour(), 0);
    }

    #[test]
    fn test_parse_lenient_case_and_padding() {
        let ts = parse_received("mon, 3 Jul 2023 9:15 am").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2023, 7, 3).unwrap());
        assert_eq!((ts.hour(), ts.minute()), (9, 15));
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert!(parse_received("  Wed, 10 Jan 2024 08:00 AM ").is_some());
    }

    #[test]
    fn test_parse_mislabelled_weekday_keeps_date() {
        // 2024-06-30 was a Sunday.
        let ts = parse_received("Mon, 30 Jun 2024 10:00 AM").unwrap();
        assert_eq!(ts.day(), 30);
        assert_eq!(ts.month(), 6);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in [
            "",
            "garbage",
            "2023-07-03 09:15",
            "Mon 03 Jul 2023 09:15 AM",
            "Xyz, 03 Jul 2023 09:15 AM",
            "Mon, 32 Jul 2023 09:15 AM",
            "Mon, 03 Jul 2023 13:15 PM",
            "Mon, 03 Jul 2023 09:15",
            "Mon, 03 Jul 2023 09:15 AM extra",
            "Mon, 03 Foo 2023 09:15 AM",
            "Monday, 03 Jul 2023 09:15 AM",
            "Mon, 03 Jul 2023 09:15AM",
            "Mon,03 Jul 2023 09:15 AM",
            "Mo, 03 Jul 2023 09:15 AM",
            "Mon , 03 Jul 2023 09:15 AM",
            "Mon, 03 Jul2023 09:15 AM",
        ] {
            assert!(parse_received(raw).is_none(), "{:?} should not parse", raw);
        }
    }

    #[test]
    fn test_round_trip_to_calendar_date() {
        let mut date = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        while date <= end {
            let raw = date
                .and_hms_opt(15, 45, 0)
                .unwrap()
                .format("%a, %d %b %Y %I:%M %p")
                .to_string();
            assert_eq!(parse_received(&raw).map(|ts| ts.date()), Some(date));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_cutoff() {
        assert_eq!(
            cutoff(),
            NaiveDate::from_ymd_opt(2023, 7, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }
}
