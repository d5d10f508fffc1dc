//! Date extraction: one raw date string to a set of [`Years`].
//!
//! Stages, first answer wins:
//!
//! ```text
//! (0) trigger scan        no digits          -> empty
//! (1) calendar parse      whole string       -> {year}
//! (2) calendar parse      leading words cut  -> {year}     ("circa 1920")
//! (3) grammar scan        every date match   -> resolve each, drop failures
//! ```

use super::calendar::calendar_year;
use super::resolve::resolve;
use super::trace::{CalendarHit, MatchTrace, TokenTrace};
use super::trigger::{BucketMask, TriggerInfo};
use crate::patterns::library;
use crate::{Alternative, Context};
use tracing::{debug, trace};

pub(crate) fn extract_token(input: &str, context: &Context) -> TokenTrace {
    let trigger = TriggerInfo::scan(input);
    let mut out = TokenTrace { input: input.to_string(), buckets: trigger.buckets, calendar: None, matches: Vec::new() };

    if !trigger.may_contain_date() {
        trace!(input, "no digits, skipping");
        return out;
    }

    let monthish = trigger.buckets.contains(BucketMask::MONTHISH);

    if let Some(year) = calendar_year(input, context, monthish) {
        debug!(input, year, "calendar parse");
        out.calendar = Some(CalendarHit { year, stripped: false });
        return out;
    }

    let stripped = input.trim_start_matches(|c: char| c.is_ascii_alphabetic() || c == ' ');
    if stripped.len() != input.len() {
        if let Some(year) = calendar_year(stripped, context, monthish) {
            debug!(input, year, "calendar parse after stripping leading words");
            out.calendar = Some(CalendarHit { year, stripped: true });
            return out;
        }
    }

    out.matches = scan_matches(input);
    debug!(input, buckets = %trigger.buckets, matches = out.matches.len(), "grammar scan");
    out
}

/// All non-overlapping matches of the composite date matcher, resolved.
fn scan_matches(input: &str) -> Vec<MatchTrace> {
    let mut matches = Vec::new();

    for caps in library().date.captures_iter(input) {
        let Some((alternative, m)) =
            Alternative::ORDERED.iter().find_map(|alt| caps.get(alt.group()).map(|m| (*alt, m)))
        else {
            // every alternative is a capture group, so a match always fires one
            continue;
        };

        let result = resolve(alternative, m.as_str());
        match &result {
            Ok(years) => trace!(text = m.as_str(), alternative = alternative.name(), ?years, "resolved"),
            Err(err) => debug!(text = m.as_str(), alternative = alternative.name(), %err, "dropped match"),
        }

        matches.push(MatchTrace { start: m.start(), end: m.end(), text: m.as_str().to_string(), alternative, result });
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Years;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use std::collections::BTreeSet;

    fn context() -> Context {
        let date = NaiveDate::from_ymd_opt(2013, 2, 12).unwrap();
        let time = NaiveTime::from_hms_opt(4, 30, 0).unwrap();
        Context { reference_time: NaiveDateTime::new(date, time) }
    }

    fn years(input: &str) -> BTreeSet<Years> {
        extract_token(input, &context()).years()
    }

    #[test]
    fn extraction_examples() {
        let cases: Vec<(Vec<Years>, &str)> = vec![
            (vec![Years::Single(1920)], "1920"),
            (vec![Years::Single(1920)], "1920-05-03"),
            (vec![Years::Single(1920)], "circa 1920"),
            (vec![Years::Single(1920)], "Winter 1920"),
            (vec![Years::Range(1800, 1899)], "19th century"),
            (vec![Years::Range(1920, 1935)], "1920-1935"),
            (vec![Years::Range(1850, 1860)], "c. 1850-1860"),
            (vec![Years::Single(-500)], "500 BC"),
            (vec![Years::Single(1990)], "199-?"),
            (vec![Years::Range(-300, -200)], "300-200 BC"),
            (vec![Years::Single(1920)], "1920/35"),
            (vec![Years::Single(1887), Years::Single(1902)], "printed 1887, reissued 1902"),
            (vec![Years::Range(1920, 1935), Years::Single(1950)], "1920-1935, 1950"),
            (vec![Years::Range(1700, 1799), Years::Single(1805)], "18th century; repaired 1805"),
            (vec![], "not a date at all"),
            (vec![], ""),
            (vec![], "vol. 5 no. 12"),
            (vec![], "3/4/5"),
            (vec![], "5-3"),
            (vec![], "1-1-1"),
            (vec![], "5/6/07"),
            (vec![Years::Single(1920)], "1920-1٩35"),
            (vec![], "printed 1٩20"),
        ];

        for (expected, input) in cases {
            let expected: BTreeSet<Years> = expected.into_iter().collect();
            assert_eq!(years(input), expected, "input: {input}");
        }
    }

    #[test]
    fn calendar_stage_is_recorded() {
        let trace = extract_token("circa 1920", &context());
        assert_eq!(trace.calendar, Some(CalendarHit { year: 1920, stripped: true }));
        assert!(trace.matches.is_empty());

        let trace = extract_token("1920", &context());
        assert_eq!(trace.calendar, Some(CalendarHit { year: 1920, stripped: false }));
    }

    #[test]
    fn non_ascii_digits_do_not_hide_siblings() {
        let trace = extract_token("1٩٢٠ and 1930", &context());
        assert_eq!(trace.years(), BTreeSet::from([Years::Single(1930)]));
        assert_eq!(trace.dropped().count(), 0);
        assert_eq!(trace.matches.len(), 1);
        assert_eq!(trace.matches[0].alternative, Alternative::Year);
    }

    #[test]
    fn match_spans_point_into_input() {
        let input = "1920-1935, 1950";
        let trace = extract_token(input, &context());
        for m in &trace.matches {
            assert_eq!(&input[m.start..m.end], m.text);
        }
        assert_eq!(trace.matches[0].alternative, Alternative::YearRange);
        assert_eq!(trace.matches[0].text, "1920-1935");
    }
}
