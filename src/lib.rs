use serde::Serialize;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod patterns;


pub use api::{
    Context, DateInput, Options, decades, decades_with, extract, extract_verbose, sort_decade, years, years_with,
};
pub use engine::{BucketMask, CalendarHit, MatchTrace, TokenTrace, Trace};
pub use error::ResolveError;

// --- Core value types -------------------------------------------------------

/// Years extracted from a single date match.
///
/// Years are astronomical-ish signed integers: positive values are CE/AD,
/// negative values are BCE/BC. There is no special handling for year zero.
///
/// Ordering is derived so extraction results can live in a `BTreeSet` and
/// print deterministically; it carries no chronological meaning for ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Years {
    /// A single year, e.g. "1920" or "500 BC".
    Single(i32),
    /// An inclusive `(start, end)` pair in the order it was written.
    ///
    /// `start <= end` is expected but not enforced: "1950-1920" stays as is.
    Range(i32, i32),
}

impl Years {
    /// Lowest and highest year mentioned, regardless of written order.
    pub fn bounds(&self) -> (i32, i32) {
        match *self {
            Years::Single(year) => (year, year),
            Years::Range(start, end) => (start.min(end), start.max(end)),
        }
    }
}

/// Era marker attached to a year ("BC", "A.D.", "BCE", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Bce,
    Ce,
}

impl Era {
    /// Classify a matched suffix. Anything that is not a BCE marker is CE.
    pub(crate) fn classify(suffix: &str) -> Era {
        if patterns::library().suffix_bce.is_match(suffix) { Era::Bce } else { Era::Ce }
    }

    /// Apply this era's sign to an unsigned year.
    pub(crate) fn sign(self, year: i32) -> i32 {
        match self {
            Era::Bce => -year,
            Era::Ce => year,
        }
    }
}

/// The alternatives of the composite date matcher, in priority order.
///
/// Less specific forms (a plain year) are contained in more specific ones (a
/// range, a century), so the first alternative that matches at a position
/// wins and the order below is part of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alternative {
    /// "19th century", "3rd c. BC"
    Century,
    /// "1920-1935", "300 - 200 BC", "1920-05/1921-06"
    YearRange,
    /// "05 Jan 1920. 10:30 am"
    DayMonthYear,
    /// "199-", "199?", "1990*"
    UncertainYear,
    /// "1920", "500 BC", "50 AD"
    Year,
}

impl Alternative {
    pub const ORDERED: [Alternative; 5] = [
        Alternative::Century,
        Alternative::YearRange,
        Alternative::DayMonthYear,
        Alternative::UncertainYear,
        Alternative::Year,
    ];

    /// Capture group of this alternative inside the composite date matcher.
    pub(crate) fn group(self) -> usize {
        match self {
            Alternative::Century => 1,
            Alternative::YearRange => 2,
            Alternative::DayMonthYear => 3,
            Alternative::UncertainYear => 4,
            Alternative::Year => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Alternative::Century => "century",
            Alternative::YearRange => "year-year",
            Alternative::DayMonthYear => "dd-mon-year-time",
            Alternative::UncertainYear => "year?",
            Alternative::Year => "year",
        }
    }
}
