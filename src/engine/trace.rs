//! Extraction traces.
//!
//! [`crate::extract_verbose`] returns one [`TokenTrace`] per input string,
//! recording which stage answered and, for pattern matches, every match with
//! its resolution outcome. Dropped matches stay visible here as `Err`.
//!
//! The plain facet API builds the same traces and only keeps the years; the
//! extra data is a handful of small strings per date.

use super::trigger::BucketMask;
use crate::{Alternative, ResolveError, Years};
use std::collections::BTreeSet;
use std::time::Duration;

/// The calendar parse answered for this string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarHit {
    pub year: i32,
    /// Leading letters and spaces were stripped before it parsed ("circa 1920").
    pub stripped: bool,
}

/// One match of the composite date matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTrace {
    /// Byte offsets of the matched text in the input string.
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub alternative: Alternative,
    pub result: Result<Years, ResolveError>,
}

/// Everything learned about one date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTrace {
    pub input: String,
    pub buckets: BucketMask,
    pub calendar: Option<CalendarHit>,
    pub matches: Vec<MatchTrace>,
}

impl TokenTrace {
    /// The extraction result of this string.
    pub fn years(&self) -> BTreeSet<Years> {
        if let Some(hit) = self.calendar {
            return BTreeSet::from([Years::Single(hit.year)]);
        }
        self.matches.iter().filter_map(|m| m.result.as_ref().ok().copied()).collect()
    }

    /// Matches whose resolution failed.
    pub fn dropped(&self) -> impl Iterator<Item = &MatchTrace> {
        self.matches.iter().filter(|m| m.result.is_err())
    }
}

/// Traces for every string of one input, plus the time it took.
#[derive(Debug, Clone)]
pub struct Trace {
    pub tokens: Vec<TokenTrace>,
    pub elapsed: Duration,
}

impl Trace {
    /// Union of the extraction results of all strings.
    pub fn years(&self) -> BTreeSet<Years> {
        self.tokens.iter().flat_map(TokenTrace::years).collect()
    }
}
