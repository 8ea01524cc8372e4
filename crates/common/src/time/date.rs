//! Pattern-based date formatting and parsing
//!
//! Patterns use the tokens described in [`pattern`](super::pattern), for
//! example `yyyy-MM-dd HH:mm:ss` or `'Week of' d/M/yy h:mm a`.

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
#[cfg(feature = "observability")]
use tracing::trace;

use super::pattern::{tokenize, DateToken, PatternPiece};

/// Pattern used by [`format_date_default`].
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

/// Format `value` according to `pattern`.
///
/// Each token is replaced once; characters that are not tokens, and quoted
/// text, are copied unchanged.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use chrono::{TimeZone, Utc};
/// use toolbelt_common::time::format_date;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// assert_eq!(format_date(&at, "yyyy-MM-dd HH:mm:ss"), "2024-03-09 14:05:07");
/// assert_eq!(format_date(&at, "d/M/yy h:mm A"), "9/3/24 2:05 PM");
/// # }
/// ```
pub fn format_date<Tz: TimeZone>(value: &DateTime<Tz>, pattern: &str) -> String {
    format_naive(&value.naive_local(), pattern)
}

/// [`format_date`] with [`DEFAULT_DATE_PATTERN`].
pub fn format_date_default<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format_date(value, DEFAULT_DATE_PATTERN)
}

/// Format a timezone-less date-time according to `pattern`.
pub fn format_naive(value: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);

    for piece in tokenize(pattern) {
        match piece {
            PatternPiece::Literal(text) => out.push_str(&text),
            // Writing into a String cannot fail.
            PatternPiece::Token(token) => {
                let _ = write_token(&mut out, value, token);
            }
        }
    }

    out
}

fn write_token(out: &mut String, value: &NaiveDateTime, token: DateToken) -> std::fmt::Result {
    let (is_pm, hour12) = value.hour12();
    match token {
        DateToken::Year4 => write!(out, "{:04}", value.year()),
        DateToken::Year2 => write!(out, "{:02}", value.year().rem_euclid(100)),
        DateToken::Month2 => write!(out, "{:02}", value.month()),
        DateToken::Month => write!(out, "{}", value.month()),
        DateToken::Day2 => write!(out, "{:02}", value.day()),
        DateToken::Day => write!(out, "{}", value.day()),
        DateToken::Hour24Padded => write!(out, "{:02}", value.hour()),
        DateToken::Hour24 => write!(out, "{}", value.hour()),
        DateToken::Hour12Padded => write!(out, "{:02}", hour12),
        DateToken::Hour12 => write!(out, "{}", hour12),
        DateToken::Minute2 => write!(out, "{:02}", value.minute()),
        DateToken::Minute => write!(out, "{}", value.minute()),
        DateToken::Second2 => write!(out, "{:02}", value.second()),
        DateToken::Second => write!(out, "{}", value.second()),
        // Leap seconds report nanoseconds past 1e9; keep the field 3 digits.
        DateToken::Millis => write!(out, "{:03}", (value.nanosecond() / 1_000_000).min(999)),
        DateToken::MeridiemUpper => out.write_str(if is_pm { "PM" } else { "AM" }),
        DateToken::MeridiemLower => out.write_str(if is_pm { "pm" } else { "am" }),
    }
}

/// Parse `input` according to `pattern`.
///
/// Patterns without time fields yield midnight. Returns `None` when the input
/// does not match the pattern, names an impossible date, or leaves the time
/// incomplete (an hour without minutes, a 12-hour clock without `a`/`A`).
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use chrono::NaiveDate;
/// use toolbelt_common::time::parse_date;
///
/// let parsed = parse_date("2024-03-09 14:05:07", "yyyy-MM-dd HH:mm:ss").unwrap();
/// assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(14, 5, 7).unwrap());
///
/// let midnight = parse_date("09/03/2024", "dd/MM/yyyy").unwrap();
/// assert_eq!(midnight.time(), chrono::NaiveTime::MIN);
///
/// assert!(parse_date("2024-02-30", "yyyy-MM-dd").is_none());
/// # }
/// ```
pub fn parse_date(input: &str, pattern: &str) -> Option<NaiveDateTime> {
    let strftime = to_strftime(pattern);
    let input = input.trim();

    let parsed = NaiveDateTime::parse_from_str(input, &strftime).or_else(|err| {
        if has_time_fields(pattern) {
            return Err(err);
        }
        NaiveDate::parse_from_str(input, &strftime).map(|date| date.and_time(NaiveTime::MIN))
    });

    match parsed {
        Ok(value) => Some(value),
        Err(_err) => {
            #[cfg(feature = "observability")]
            trace!(input, pattern, error = %_err, "date did not match pattern");
            None
        }
    }
}

/// Whether `pattern` names any time-of-day field.
fn has_time_fields(pattern: &str) -> bool {
    tokenize(pattern).iter().any(|piece| {
        matches!(
            piece,
            PatternPiece::Token(
                DateToken::Hour24Padded
                    | DateToken::Hour24
                    | DateToken::Hour12Padded
                    | DateToken::Hour12
                    | DateToken::Minute2
                    | DateToken::Minute
                    | DateToken::Second2
                    | DateToken::Second
                    | DateToken::Millis
                    | DateToken::MeridiemUpper
                    | DateToken::MeridiemLower
            )
        )
    })
}

/// Translate a token pattern into chrono's strftime syntax.
fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for piece in tokenize(pattern) {
        match piece {
            PatternPiece::Literal(text) => out.push_str(&text.replace('%', "%%")),
            PatternPiece::Token(token) => out.push_str(match token {
                DateToken::Year4 => "%Y",
                DateToken::Year2 => "%y",
                DateToken::Month2 | DateToken::Month => "%m",
                DateToken::Day2 | DateToken::Day => "%d",
                DateToken::Hour24Padded | DateToken::Hour24 => "%H",
                DateToken::Hour12Padded | DateToken::Hour12 => "%I",
                DateToken::Minute2 | DateToken::Minute => "%M",
                DateToken::Second2 | DateToken::Second => "%S",
                DateToken::Millis => "%3f",
                DateToken::MeridiemUpper | DateToken::MeridiemLower => "%p",
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::date.
    use chrono::{FixedOffset, Utc};

    use super::*;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 0, 7, 9).unwrap()
            + chrono::Duration::milliseconds(42)
    }

    /// Validates `format_date` behavior for every token.
    ///
    /// Assertions:
    /// - Confirms padded and unpadded fields render as documented.
    /// - Confirms midnight renders as 12 AM on the 12-hour clock.
    #[test]
    fn test_format_all_tokens() {
        let at = sample();
        assert_eq!(format_date(&at, "yyyy yy MM M dd d"), "2024 24 01 1 05 5");
        assert_eq!(format_date(&at, "HH H hh h mm m ss s SSS"), "00 0 12 12 07 7 09 9 042");
        assert_eq!(format_date(&at, "A a"), "AM am");
        assert_eq!(format_date_default(&at), "2024-01-05 00:07:09");
    }

    #[test]
    fn test_format_afternoon_and_quotes() {
        let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(format_date(&at, "'Due' h:mm a"), "Due 11:59 pm");
        assert_eq!(format_date(&at, "yyyy'年'M'月'd'日'"), "2023年12月31日");
        assert_eq!(format_date(&at, "''yy"), "'23");
    }

    #[test]
    fn test_format_uses_local_time_of_offset() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 6, 30, 20, 0, 0).unwrap().with_timezone(&offset);
        assert_eq!(format_date(&at, "yyyy-MM-dd HH"), "2024-07-01 05");
    }

    /// Validates `parse_date` round trips the formatter output.
    ///
    /// Assertions:
    /// - Confirms a 12-hour pattern with meridiem parses back.
    /// - Confirms milliseconds survive the round trip.
    #[test]
    fn test_parse_matches_format() {
        let at = sample().naive_utc();
        for pattern in ["yyyy-MM-dd HH:mm:ss.SSS", "dd/MM/yyyy hh:mm:ss.SSS A"] {
            let text = format_naive(&at, pattern);
            assert_eq!(parse_date(&text, pattern), Some(at), "pattern {pattern}");
        }
    }

    #[test]
    fn test_parse_rejects_mismatch() {
        assert!(parse_date("not a date", DEFAULT_DATE_PATTERN).is_none());
        assert!(parse_date("2024-13-01", "yyyy-MM-dd").is_none());
        assert!(parse_date("", "yyyy").is_none());
    }

    /// Validates `parse_date` never drops time fields it was asked to read.
    ///
    /// Assertions:
    /// - Ensures an hour without minutes is rejected instead of yielding
    ///   midnight.
    /// - Ensures a 12-hour clock without a meridiem is rejected.
    /// - Confirms the same layouts parse once the missing field is present.
    #[test]
    fn test_parse_incomplete_time_is_absent() {
        assert_eq!(parse_date("2024-01-05 17", "yyyy-MM-dd HH"), None);
        assert_eq!(parse_date("2024-01-05 3:04", "yyyy-MM-dd h:mm"), None);

        let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(15, 4, 0).unwrap();
        assert_eq!(parse_date("2024-01-05 15:04", "yyyy-MM-dd HH:mm"), Some(expected));
        assert_eq!(parse_date("2024-01-05 3:04 PM", "yyyy-MM-dd h:mm A"), Some(expected));
    }

    #[test]
    fn test_parse_escapes_percent_literals() {
        let parsed = parse_date("100% 2024-05-06", "'100%' yyyy-MM-dd").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
    }
}
