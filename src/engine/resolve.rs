//! Match resolution.
//!
//! Turns one match of the composite date matcher, tagged with the alternative
//! that fired, into [`Years`]. Every failure is an explicit [`ResolveError`];
//! the extractor drops the match and keeps its siblings.
//!
//! ```text
//! Century        "19th century"   -> Range(1800, 1899)
//!                "3rd c. BC"      -> Range(-300, -201)
//! YearRange      "1920-1935"      -> Range(1920, 1935)
//!                "300-200 BC"     -> Range(-300, -200)
//! DayMonthYear   "05 Jan 1920"    -> Single(1920)
//! UncertainYear  "199-"           -> Single(1990)
//! Year           "500 BC"         -> Single(-500)
//! ```

use crate::patterns::library;
use crate::{Alternative, Era, ResolveError, Years};

pub(crate) fn resolve(alternative: Alternative, text: &str) -> Result<Years, ResolveError> {
    match alternative {
        Alternative::Century => century(text),
        Alternative::YearRange => year_range(text),
        Alternative::DayMonthYear => day_month_year(text),
        Alternative::UncertainYear => uncertain_year(text).map(Years::Single),
        Alternative::Year => {
            let (year, era) = year_with_era(text, Alternative::Year)?;
            Ok(Years::Single(era.unwrap_or(Era::Ce).sign(year)))
        }
    }
}

/// Century N spans `100·(N−1) ..= 100·(N−1)+99` CE and `−100·N ..= −100·N+99`
/// BCE. There is no year-zero gap: the 1st century CE starts at 0.
fn century(text: &str) -> Result<Years, ResolveError> {
    let caps = library().century_capture.captures(text).ok_or(ResolveError::MissingCapture {
        alternative: Alternative::Century,
        group: "ordinal",
    })?;

    let ordinal = regex!(r"^[0-9]+").find(text).map(|m| m.as_str()).ok_or(ResolveError::MissingCapture {
        alternative: Alternative::Century,
        group: "ordinal number",
    })?;
    let n: i32 = ordinal.parse().map_err(|e| ResolveError::invalid_number(ordinal, e))?;

    match caps.get(2).map(|m| Era::classify(m.as_str())) {
        Some(Era::Bce) => Ok(Years::Range(-100 * n, -100 * n + 99)),
        _ => Ok(Years::Range(100 * (n - 1), 100 * (n - 1) + 99)),
    }
}

/// Each side carries its own era. When the left side has none and the right
/// side resolves to a BCE year, the left side becomes BCE too ("300-200 BC").
/// Nothing propagates left to right. The pair keeps its written order.
fn year_range(text: &str) -> Result<Years, ResolveError> {
    let caps = library().range_split.captures(text).ok_or(ResolveError::MissingCapture {
        alternative: Alternative::YearRange,
        group: "two sides",
    })?;

    let side = |idx: usize| {
        caps.get(idx).map(|m| m.as_str().trim()).ok_or(ResolveError::MissingCapture {
            alternative: Alternative::YearRange,
            group: if idx == 1 { "start" } else { "end" },
        })
    };

    let (start, start_era) = year_with_era(side(1)?, Alternative::YearRange)?;
    let (end, end_era) = year_with_era(side(2)?, Alternative::YearRange)?;

    let mut start = start_era.unwrap_or(Era::Ce).sign(start);
    let end = end_era.unwrap_or(Era::Ce).sign(end);

    if start_era.is_none() && end <= 0 {
        start = -start;
    }

    Ok(Years::Range(start, end))
}

/// Day, month and time are discarded; the year keeps its era.
fn day_month_year(text: &str) -> Result<Years, ResolveError> {
    let year_text = library()
        .day_month_year_capture
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ResolveError::MissingCapture { alternative: Alternative::DayMonthYear, group: "year" })?;

    let (year, era) = year_with_era(year_text, Alternative::DayMonthYear)?;
    Ok(Years::Single(era.unwrap_or(Era::Ce).sign(year)))
}

/// A full 4-digit prefix is taken as is ("1990?"). Otherwise the trailing
/// marker stands for an unknown last digit, which rounds down to the decade
/// ("199-" -> 1990).
fn uncertain_year(text: &str) -> Result<i32, ResolveError> {
    let text = text.trim();

    if let Some(m) = regex!(r"^[1-9][0-9]{3}").find(text) {
        return m.as_str().parse().map_err(|e| ResolveError::invalid_number(m.as_str(), e));
    }

    resolve_unknown_ones(text)
}

fn resolve_unknown_ones(text: &str) -> Result<i32, ResolveError> {
    if regex!(r"^[0-9]{4}$").is_match(text) {
        return text.parse().map_err(|e| ResolveError::invalid_number(text, e));
    }

    let leading = regex!(r"^([0-9]{1,3})[-*?]$")
        .captures(text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ResolveError::UnresolvedUncertain(text.to_string()))?;

    let rounded = format!("{}0", leading.as_str());
    rounded.parse().map_err(|e| ResolveError::invalid_number(&rounded, e))
}

/// Unsigned digits of one year plus its era marker, if written.
fn year_with_era(text: &str, alternative: Alternative) -> Result<(i32, Option<Era>), ResolveError> {
    let caps = library()
        .year_capture
        .captures(text)
        .ok_or(ResolveError::MissingCapture { alternative, group: "year" })?;

    let digits = caps
        .get(1)
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
        .ok_or(ResolveError::MissingCapture { alternative, group: "year digits" })?;
    let era = caps.get(2).or_else(|| caps.get(4)).map(|m| Era::classify(m.as_str()));

    let year = digits.parse().map_err(|e| ResolveError::invalid_number(digits, e))?;
    Ok((year, era))
}
