//! General calendar parsing: the first thing tried on every date string.
//!
//! Clean, whole-string dates ("1920", "1920-05-03", "March 5, 1920",
//! RFC 3339 timestamps) are answered here without touching the grammar.
//! Anything that does not parse as a whole falls through to pattern matching.
//!
//! Two layers:
//!
//! 1. Strict `chrono` formats, tried in order.
//! 2. `chrono-english` for looser English phrasings, only when the input
//!    mentions a month.
//!
//! Either answer is kept only if its year is written out in the input as a
//! 3-4 digit number. `%Y` also takes 1-2 digits ("3/4/5", "19-12"), and a
//! relative phrase ("next friday") would inject the reference year.

use crate::Context;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_english::{Dialect, parse_date_string};

/// Full-date formats, tried in order against the trimmed input.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d %b, %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%A, %B %d, %Y",
];

/// Timestamp formats without an offset.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Month-precision formats; parsed by pinning the day to 1.
const MONTH_FORMATS: &[(&str, &str)] = &[("%Y-%m-%d", "{}-01"), ("%d %b %Y", "1 {}")];

/// Parse `text` as a single calendar date and return its year.
pub(crate) fn calendar_year(text: &str, context: &Context, monthish: bool) -> Option<i32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    strict_year(text)
        .or_else(|| if monthish { english_year(text, context) } else { None })
        .filter(|year| is_written(text, *year))
}

/// Whether `year` appears in `text` as a standalone 3-4 digit number.
fn is_written(text: &str, year: i32) -> bool {
    regex!(r"\b[1-9][0-9]{2,3}\b").find_iter(text).any(|m| m.as_str().parse::<i32>().ok() == Some(year))
}

fn strict_year(text: &str) -> Option<i32> {
    if regex!(r"^[0-9]{4}$").is_match(text) {
        return text.parse().ok();
    }

    if let Some(date) = DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok()) {
        return Some(date.year());
    }

    if let Some(dt) = DATETIME_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok()) {
        return Some(dt.year());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.year());
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.year());
    }

    MONTH_FORMATS.iter().find_map(|(fmt, shape)| {
        let pinned = shape.replace("{}", text);
        NaiveDate::parse_from_str(&pinned, fmt).ok().map(|date| date.year())
    })
}

fn english_year(text: &str, context: &Context) -> Option<i32> {
    let now = Utc.from_utc_datetime(&context.reference_time);
    parse_date_string(text, now, Dialect::Us).ok().map(|dt| dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn context() -> Context {
        let date = NaiveDate::from_ymd_opt(2013, 2, 12).unwrap();
        let time = NaiveTime::from_hms_opt(4, 30, 0).unwrap();
        Context { reference_time: NaiveDateTime::new(date, time) }
    }

    #[test]
    fn strict_formats() {
        let cases: Vec<(i32, &str)> = vec![
            (1920, "1920"),
            (1920, "1920-05-03"),
            (1920, "1920/05/03"),
            (1920, "05/03/1920"),
            (1920, "3 May 1920"),
            (1920, "3 March 1920"),
            (1920, "March 3, 1920"),
            (1920, "Mar 3 1920"),
            (1995, "1995-12"),
            (1995, "December 1995"),
            (1995, "Dec 1995"),
            (2004, "2004-02-29T10:00:00"),
            (2004, "2004-02-29 10:00:00"),
            (2004, "2004-02-29T10:00:00+02:00"),
            (2003, "Tue, 1 Jul 2003 10:52:37 +0200"),
        ];

        for (expected, input) in cases {
            assert_eq!(calendar_year(input, &context(), false), Some(expected), "input: {input}");
        }
    }

    #[test]
    fn rejects_fragments_and_ranges() {
        let cases = vec!["", "   ", "0000", "1920-1935", "1920/35", "500 BC", "19th century", "199-?", "c. 1920", "5"];
        for input in cases {
            assert_eq!(calendar_year(input, &context(), false), None, "input: {input}");
        }
    }

    #[test]
    fn rejects_short_calendar_years() {
        // %Y parses 1-2 digit years; none of these is a year as written
        let cases = vec!["3/4/5", "5-3", "19-12", "1-1-1", "5/6/07", "0999", "3 May 19"];
        for input in cases {
            assert_eq!(calendar_year(input, &context(), false), None, "input: {input}");
        }
    }

    #[test]
    fn english_fallback_needs_written_year() {
        // a relative phrase resolves against the reference time and is refused
        assert_eq!(calendar_year("next march", &context(), true), None);
    }
}
