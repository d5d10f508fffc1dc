//! Facet reduction: extraction results to decade or year facets.
//!
//! Two modes, selected by `disjoint`:
//!
//! - **disjoint**: only values evidenced by the input. A single year yields
//!   its own year/decade; a range yields every year/decade it covers.
//! - **spanning**: everything from the earliest to the latest evidenced value,
//!   gaps included.
//!
//! Decades are floor-aligned (`-505` lies in decade `-510`). A range yields
//! decades from the floor of its start up to its raw end, stepping by ten;
//! since the start is aligned, this is the same as stepping to the floor of
//! the end. A range written backwards ("1950-1920") covers nothing in disjoint
//! mode, but its endpoints still bound a spanning set.

use crate::Years;
use std::collections::BTreeSet;

/// Decade containing `year`.
pub(crate) fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

pub(crate) fn decades(values: &BTreeSet<Years>, disjoint: bool) -> BTreeSet<i32> {
    if !disjoint {
        return match span(values) {
            Some((lo, hi)) => (decade_of(lo)..=hi).step_by(10).collect(),
            None => BTreeSet::new(),
        };
    }

    let mut out = BTreeSet::new();
    for value in values {
        match *value {
            Years::Single(year) => {
                out.insert(decade_of(year));
            }
            Years::Range(start, end) => out.extend((decade_of(start)..=end).step_by(10)),
        }
    }
    out
}

pub(crate) fn years(values: &BTreeSet<Years>, disjoint: bool) -> BTreeSet<i32> {
    if !disjoint {
        return match span(values) {
            Some((lo, hi)) => (lo..=hi).collect(),
            None => BTreeSet::new(),
        };
    }

    let mut out = BTreeSet::new();
    for value in values {
        match *value {
            Years::Single(year) => {
                out.insert(year);
            }
            Years::Range(start, end) => out.extend(start..=end),
        }
    }
    out
}

/// Earliest and latest year mentioned anywhere in `values`.
fn span(values: &BTreeSet<Years>) -> Option<(i32, i32)> {
    values.iter().map(Years::bounds).reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
}
