//! Pattern library: the lexical forms a date takes inside free text.
//!
//! The grammar is a table of named fragments. A fragment may reference any
//! fragment declared *above* it as `<name>`; expansion is a single top-down
//! pass, so the table order is also the dependency order.
//!
//! ```text
//! suffix_bce ─┐
//! suffix_ce  ─┴─ suffix ─┬─ year ─┬─ year_mm ── year_range ─┐
//! short_year ────────────┤        └─ dd_mon_year_time ──────┤
//! long_year  ────────────┘                                   ├─ date
//! century ───── century_suffix ─────────────────────────────┤
//! uncertain_year ───────────────────────────────────────────┘
//! ```
//!
//! The composite `date` matcher tries its alternatives in the order of
//! [`crate::Alternative::ORDERED`]. A plain year is a subset of every other
//! form and must be tried last.
//!
//! ## Boundary after a range
//!
//! The right-hand side of a year range must not be followed by another digit
//! ("1920-19355" is not a range). The `regex` crate has no look-ahead, so the
//! composite matcher consumes one trailing non-digit (or end of input) after
//! the range group instead. Every alternative starts with a digit, so the
//! consumed character can never be the start of the next match.
//!
//! Digits are ASCII `[0-9]` throughout. `\d` would also accept other Unicode
//! digits, which the resolver cannot turn into numbers.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// `(name, template)` pairs, in dependency order.
const FRAGMENTS: &[(&str, &str)] = &[
    // era markers; longest spelling first so the matched text is complete
    ("suffix_bce", r"BCE|B\.C\.E\.|BC|B\.C\."),
    ("suffix_ce", r"AD|A\.D\.|CE|C\.E\."),
    ("suffix", r"(?:<suffix_bce>|<suffix_ce>)"),
    // calendar parts
    ("mm", r"(?:0[1-9]|1[0-2])"),
    ("dd", r"(?:0[1-9]|[1-2][0-9]|3[0-1])"),
    ("mon", r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)"),
    ("time", r"[0-9]{1,2}[.:][0-9]{2}(?:[apAP]\.?[mM]\.?)?"),
    // a 1-2 digit year needs an era suffix, a 3-4 digit year may carry one
    ("short_year", r"[1-9][0-9]?"),
    ("long_year", r"[1-9][0-9]{2,3}"),
    ("year", r"(?:<short_year> <suffix>|<long_year>(?: <suffix>)?)"),
    // last digit unknown: "199-", "199?", "1990*"
    ("uncertain_year", r"[1-9][0-9]{1,2}[0-9]?[-*?]"),
    // a year optionally followed by a 2-digit month or an unknown-digit marker
    ("year_mm", r"<year>(?:[-/]<mm>|[-*?])?"),
    ("year_range", r"<year_mm>\s*[-/]\s*<year_mm>"),
    ("dd_mon_year_time", r"<dd>\s+<mon>\s+<year>(?:\.\s+<time>)?"),
    ("century", r"(?:1st|2nd|3rd|(?:[4-9]|1[0-9]|20)th)\s+[cC](?:entury)?"),
    ("century_suffix", r"<century>(?:\s+<suffix>)?"),
    // the alternatives, in priority order; see the module docs for (?:[^0-9]|$)
    (
        "date",
        r"(<century_suffix>)|(<year_range>)(?:[^0-9]|$)|(<dd_mon_year_time>)|(<uncertain_year>)|(<year>)",
    ),
];

/// Compiled matchers, built once from [`FRAGMENTS`].
#[derive(Debug)]
pub(crate) struct PatternLibrary {
    /// Composite matcher; groups 1..=5 follow [`crate::Alternative::group`].
    pub date: Regex,
    /// Splits a range match into its two sides (groups 1 and 2).
    pub range_split: Regex,
    /// Prefix match of one year: 1 = short digits, 2 = its suffix,
    /// 3 = long digits, 4 = its optional suffix.
    pub year_capture: Regex,
    /// 1 = century ordinal text, 2 = optional suffix.
    pub century_capture: Regex,
    /// 1 = the embedded year of a day-month-year match.
    pub day_month_year_capture: Regex,
    /// Anchored BCE marker test.
    pub suffix_bce: Regex,
}

static LIBRARY: Lazy<PatternLibrary> =
    Lazy::new(|| PatternLibrary::build().expect("built-in date fragments must compile"));

/// The process-wide pattern library.
pub(crate) fn library() -> &'static PatternLibrary {
    &LIBRARY
}

impl PatternLibrary {
    pub(crate) fn build() -> Result<Self, regex::Error> {
        let fragments = expand_fragments(FRAGMENTS);
        let compile = |template: &str| Regex::new(&expand(template, &fragments));

        Ok(PatternLibrary {
            date: compile("<date>")?,
            range_split: compile(r"^(<year_mm>)\s*[-/]\s*(<year_mm>)$")?,
            year_capture: compile(r"^(?:(<short_year>) (<suffix>)|(<long_year>)(?: (<suffix>))?)")?,
            century_capture: compile(r"^(<century>)(?:\s+(<suffix>))?")?,
            day_month_year_capture: compile(r"^<dd>\s+<mon>\s+(<year>)")?,
            suffix_bce: compile(r"^(?:<suffix_bce>)")?,
        })
    }
}

/// Expand every fragment against the ones declared before it.
fn expand_fragments(table: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
    let mut expanded: HashMap<&'static str, String> = HashMap::with_capacity(table.len());
    for (name, template) in table {
        let body = expand(template, &expanded);
        expanded.insert(*name, body);
    }
    expanded
}

/// Replace `<name>` references with their expansion. Unknown names are left
/// untouched so the resulting regex fails loudly instead of matching less.
fn expand(template: &str, fragments: &HashMap<&'static str, String>) -> String {
    regex!(r"<([a-z_]+)>")
        .replace_all(template, |caps: &regex::Captures| match fragments.get(&caps[1]) {
            Some(body) => body.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Alternative;

    fn fired(input: &str) -> Vec<(Alternative, String)> {
        library()
            .date
            .captures_iter(input)
            .filter_map(|caps| {
                Alternative::ORDERED
                    .iter()
                    .find_map(|alt| caps.get(alt.group()).map(|m| (*alt, m.as_str().to_string())))
            })
            .collect()
    }

    #[test]
    fn library_builds() {
        assert!(PatternLibrary::build().is_ok());
    }

    #[test]
    fn every_reference_resolves() {
        let fragments = expand_fragments(FRAGMENTS);
        for (name, body) in &fragments {
            assert!(!regex!(r"<[a-z_]+>").is_match(body), "fragment {name} has an unresolved reference: {body}");
        }
    }

    #[test]
    fn composite_alternatives() {
        let cases: Vec<(&str, Alternative, &str)> = vec![
            ("19th century", Alternative::Century, "19th century"),
            ("3rd c. BC", Alternative::Century, "3rd c"),
            ("1st Century BCE", Alternative::Century, "1st Century BCE"),
            ("1920-1935", Alternative::YearRange, "1920-1935"),
            ("1920 / 1935", Alternative::YearRange, "1920 / 1935"),
            ("300-200 BC", Alternative::YearRange, "300-200 BC"),
            ("1920-05/1921-06", Alternative::YearRange, "1920-05/1921-06"),
            ("05 Jan 1920. 10:30 am", Alternative::DayMonthYear, "05 Jan 1920. 10:30"),
            ("199-?", Alternative::UncertainYear, "199-"),
            ("1990*", Alternative::UncertainYear, "1990*"),
            ("500 BC", Alternative::Year, "500 BC"),
            ("50 AD", Alternative::Year, "50 AD"),
            ("printed 1887", Alternative::Year, "1887"),
        ];

        for (input, alternative, text) in cases {
            let found = fired(input);
            assert_eq!(found.first(), Some(&(alternative, text.to_string())), "input: {input}");
        }
    }

    #[test]
    fn short_years_need_a_suffix() {
        assert!(fired("volume 5, no. 12").is_empty());
        assert_eq!(fired("5 BC"), vec![(Alternative::Year, "5 BC".to_string())]);
    }

    #[test]
    fn range_rejects_trailing_digit() {
        // "1935" followed by a digit is not a range end; the years are read on their own
        let found = fired("1920-19355");
        assert_eq!(found.first(), Some(&(Alternative::UncertainYear, "1920-".to_string())));
    }

    #[test]
    fn range_boundary_does_not_swallow_next_date() {
        let found = fired("1920-1935,1950");
        assert_eq!(
            found,
            vec![(Alternative::YearRange, "1920-1935".to_string()), (Alternative::Year, "1950".to_string())]
        );
    }

    #[test]
    fn only_ascii_digits_count() {
        // "1٩35" is not a year, so the range falls apart and its ASCII side stays
        assert_eq!(fired("1920-1٩35"), vec![(Alternative::UncertainYear, "1920-".to_string())]);
        assert_eq!(fired("printed 1٩20"), vec![]);
        assert_eq!(fired("printed 1٩20, 1930"), vec![(Alternative::Year, "1930".to_string())]);
    }

    #[test]
    fn range_split_sides() {
        let caps = library().range_split.captures("300 BC - 200 BC").unwrap();
        assert_eq!(&caps[1], "300 BC");
        assert_eq!(&caps[2], "200 BC");
    }

    #[test]
    fn bce_marker_is_anchored() {
        let lib = library();
        assert!(lib.suffix_bce.is_match("BC"));
        assert!(lib.suffix_bce.is_match("B.C.E."));
        assert!(!lib.suffix_bce.is_match("AD"));
        assert!(!lib.suffix_bce.is_match("CE"));
    }
}
