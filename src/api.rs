use crate::Years;
use crate::engine::{self, Trace};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::time::Instant;

/// Extraction context.
///
/// Holds the reference instant handed to the natural-language calendar parser.
/// A year is only accepted from that parser when it is written out in the
/// input, so the reference never leaks into facets; it only decides how
/// relative phrases parse before they are rejected.
#[derive(Debug, Clone)]
pub struct Context {
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2013, 2, 12).unwrap();
            let time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// Options that affect reduction.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Keep only evidenced values (`true`, the default) or fill every value
    /// between the earliest and the latest (`false`).
    pub disjoint: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { disjoint: true }
    }
}

/// Input accepted by the facet API: one date string or a collection of them.
///
/// All strings of one input are treated as one record: their extraction
/// results are unioned before reduction.
pub trait DateInput {
    fn date_strings(&self) -> Vec<&str>;
}

impl DateInput for str {
    fn date_strings(&self) -> Vec<&str> {
        vec![self]
    }
}

impl DateInput for String {
    fn date_strings(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<T: AsRef<str>> DateInput for [T] {
    fn date_strings(&self) -> Vec<&str> {
        self.iter().map(AsRef::<str>::as_ref).collect()
    }
}

impl<T: AsRef<str>> DateInput for Vec<T> {
    fn date_strings(&self) -> Vec<&str> {
        self.as_slice().date_strings()
    }
}

impl<T: AsRef<str>, S: BuildHasher> DateInput for HashSet<T, S> {
    fn date_strings(&self) -> Vec<&str> {
        self.iter().map(AsRef::<str>::as_ref).collect()
    }
}

impl<T: AsRef<str>> DateInput for BTreeSet<T> {
    fn date_strings(&self) -> Vec<&str> {
        self.iter().map(AsRef::<str>::as_ref).collect()
    }
}

impl<T: DateInput + ?Sized> DateInput for &T {
    fn date_strings(&self) -> Vec<&str> {
        (**self).date_strings()
    }
}

/// Decade facets for `input`.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
///
/// assert_eq!(datefacet::decades("1920-1935", true), BTreeSet::from([1920, 1930]));
/// assert_eq!(datefacet::decades("500 BC", true), BTreeSet::from([-500]));
/// assert!(datefacet::decades("not a date at all", true).is_empty());
/// ```
pub fn decades<I: DateInput + ?Sized>(input: &I, disjoint: bool) -> BTreeSet<i32> {
    decades_with(input, &Context::default(), &Options { disjoint })
}

/// Year facets for `input`.
///
/// With `disjoint`, every single year and every year inside a range; without,
/// every year from the earliest to the latest.
pub fn years<I: DateInput + ?Sized>(input: &I, disjoint: bool) -> BTreeSet<i32> {
    years_with(input, &Context::default(), &Options { disjoint })
}

/// [`decades`] with an explicit context and options.
pub fn decades_with<I: DateInput + ?Sized>(input: &I, context: &Context, options: &Options) -> BTreeSet<i32> {
    engine::decades(&extract_with(input, context), options.disjoint)
}

/// [`years`] with an explicit context and options.
pub fn years_with<I: DateInput + ?Sized>(input: &I, context: &Context, options: &Options) -> BTreeSet<i32> {
    engine::years(&extract_with(input, context), options.disjoint)
}

/// Earliest decade of `input`, the value a record is sorted by.
pub fn sort_decade<I: DateInput + ?Sized>(input: &I) -> Option<i32> {
    decades(input, true).first().copied()
}

/// Raw extraction result: the union of single years and ranges found in
/// every string of `input`, before reduction.
pub fn extract<I: DateInput + ?Sized>(input: &I) -> BTreeSet<Years> {
    extract_with(input, &Context::default())
}

/// Extract with per-string traces, for debugging and reporting.
pub fn extract_verbose<I: DateInput + ?Sized>(input: &I, context: &Context) -> Trace {
    let started = Instant::now();
    let tokens = input.date_strings().into_iter().map(|s| engine::extract_token(s, context)).collect();
    Trace { tokens, elapsed: started.elapsed() }
}

fn extract_with<I: DateInput + ?Sized>(input: &I, context: &Context) -> BTreeSet<Years> {
    input.date_strings().into_iter().flat_map(|s| engine::extract_token(s, context).years()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strings_and_collections() {
        let expected = BTreeSet::from([1920, 1930, -500]);

        let owned: Vec<String> = vec!["1920-1935".to_string(), "500 BC".to_string()];
        let borrowed: [&str; 2] = ["1920-1935", "500 BC"];
        let hashed: HashSet<String> = owned.iter().cloned().collect();
        let ordered: BTreeSet<&str> = borrowed.iter().copied().collect();

        assert_eq!(decades(&owned, true), expected);
        assert_eq!(decades(&borrowed[..], true), expected);
        assert_eq!(decades(&hashed, true), expected);
        assert_eq!(decades(&ordered, true), expected);
        assert_eq!(decades(&"1920-1935".to_string(), true), BTreeSet::from([1920, 1930]));
    }

    #[test]
    fn options_default_to_disjoint() {
        assert!(Options::default().disjoint);
        let ctx = Context::default();
        assert_eq!(
            decades_with("1905; 1947", &ctx, &Options::default()),
            BTreeSet::from([1900, 1940])
        );
        assert_eq!(
            decades_with("1905; 1947", &ctx, &Options { disjoint: false }),
            BTreeSet::from([1900, 1910, 1920, 1930, 1940])
        );
    }

    #[test]
    fn sort_decade_is_the_earliest() {
        assert_eq!(sort_decade(&["1950", "19th century"][..]), Some(1800));
        assert_eq!(sort_decade("undated"), None);
    }

    #[test]
    fn verbose_trace_matches_plain_extraction() {
        let input = ["circa 1920", "1920-1935", "1٩٢٠", "3/4/5"];
        let trace = extract_verbose(&input[..], &Context::default());

        assert_eq!(trace.tokens.len(), 4);
        assert_eq!(trace.years(), extract(&input[..]));
        assert!(trace.tokens[2].matches.is_empty());
        assert_eq!(trace.tokens[3].calendar, None);
    }
}
