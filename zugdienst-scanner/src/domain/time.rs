//! Timestamp handling for Zusi schedule data.
//!
//! Zusi files carry timestamps as `"YYYY-MM-DD HH:MM:SS"` strings, with a
//! date-only `"YYYY-MM-DD"` form on rows that mark a day boundary rather
//! than a clock time. Anything else is treated as "no time recorded", not
//! as an error, since a single bad attribute must never sink a whole
//! service.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a Zusi timestamp string.
///
/// Accepts `"YYYY-MM-DD HH:MM:SS"` and the date-only fallback
/// `"YYYY-MM-DD"` (midnight). Unparsable input yields `None`.
///
/// # Examples
///
/// ```
/// use zugdienst_scanner::domain::parse_timestamp;
///
/// let full = parse_timestamp("2019-05-01 08:30:00").unwrap();
/// assert_eq!(full.to_string(), "2019-05-01 08:30:00");
///
/// let date_only = parse_timestamp("2019-05-01").unwrap();
/// assert_eq!(date_only.to_string(), "2019-05-01 00:00:00");
///
/// assert!(parse_timestamp("8:30").is_none());
/// assert!(parse_timestamp("").is_none());
/// ```
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Parse an optional timestamp attribute.
///
/// Convenience for DTO fields: absent attribute, empty string, and garbage
/// all collapse to `None`.
pub fn parse_timestamp_opt(s: Option<&str>) -> Option<NaiveDateTime> {
    s.and_then(parse_timestamp)
}

/// Format a duration as `H:MM:SS` running-time text, e.g. `"1:30:00"`.
///
/// Negative durations (malformed source data) render with a leading minus
/// rather than panicking.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use zugdienst_scanner::domain::format_duration;
///
/// assert_eq!(format_duration(Duration::seconds(5400)), "1:30:00");
/// assert_eq!(format_duration(Duration::seconds(-300)), "-0:05:00");
/// assert_eq!(format_duration(Duration::zero()), "0:00:00");
/// ```
pub fn format_duration(d: Duration) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{sign}{hours}:{minutes:02}:{seconds:02}")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every well-formed full timestamp round-trips through parsing.
        #[test]
        fn full_format_roundtrip(
            y in 2000i32..2100,
            mo in 1u32..=12,
            d in 1u32..=28,
            h in 0u32..24,
            mi in 0u32..60,
            s in 0u32..60,
        ) {
            let text = format!("{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}:{s:02}");
            let parsed = parse_timestamp(&text).unwrap();
            prop_assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), text);
        }

        /// Parsing is total: arbitrary strings never panic.
        #[test]
        fn never_panics(s in ".{0,40}") {
            let _ = parse_timestamp(&s);
        }

        /// Duration formatting always re-parses into the same second count.
        #[test]
        fn duration_format_consistent(secs in -200_000i64..200_000) {
            let text = format_duration(Duration::seconds(secs));
            let negative = text.starts_with('-');
            let body = text.trim_start_matches('-');
            let parts: Vec<u64> = body.split(':').map(|p| p.parse().unwrap()).collect();
            prop_assert_eq!(parts.len(), 3);
            let total = (parts[0] * 3600 + parts[1] * 60 + parts[2]) as i64;
            prop_assert_eq!(if negative { -total } else { total }, secs);
        }
    }
}
