//! Trigger scanning (input pre-classification).
//!
//! A cheap pass over a raw date string that records coarse features before
//! any regex work happens. The only hard decision taken from it is the
//! short-circuit: every recognized form, and every accepted calendar format,
//! contains at least one ASCII digit, so a string without digits is empty.
//!
//! The month bucket gates the natural-language calendar fallback. False
//! positives are fine; the calendar year still has to be written out.

use std::fmt;

bitflags::bitflags! {
    /// Coarse features of one date string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS = 1 << 0;
        const MONTHISH   = 1 << 1;
    }
}

impl fmt::Display for BucketMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        f.write_str(&names.join("|"))
    }
}

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    "jan",
    "feb",
    "mar",
    "apr",
    "jun",
    "jul",
    "aug",
    "sep",
    "sept",
    "oct",
    "nov",
    "dec",
];

#[derive(Debug, Clone, Copy)]
pub(crate) struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `input` for coarse buckets. ASCII-only; the grammar is English.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();
        let lower = input.to_ascii_lowercase();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        let monthish = lower
            .split(|c: char| !c.is_ascii_alphabetic())
            .any(|word| MONTHS.contains(&word));
        if monthish {
            buckets |= BucketMask::MONTHISH;
        }

        TriggerInfo { buckets }
    }

    /// Whether any recognized form can possibly occur in the input.
    pub fn may_contain_date(&self) -> bool {
        self.buckets.contains(BucketMask::HAS_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_input() {
        let cases: Vec<(&str, BucketMask)> = vec![
            ("not a date at all", BucketMask::empty()),
            ("1920", BucketMask::HAS_DIGITS),
            ("1920-1935", BucketMask::HAS_DIGITS),
            ("500 B.C.", BucketMask::HAS_DIGITS),
            ("05 Jan 1920", BucketMask::HAS_DIGITS | BucketMask::MONTHISH),
            ("3-May-1920", BucketMask::HAS_DIGITS | BucketMask::MONTHISH),
            ("Spring, March", BucketMask::MONTHISH),
            ("Mayfair 1920", BucketMask::HAS_DIGITS),
            ("1٩٢٠", BucketMask::HAS_DIGITS),
        ];

        for (input, expected) in cases {
            assert_eq!(TriggerInfo::scan(input).buckets, expected, "input: {input}");
        }
    }

    #[test]
    fn no_digits_means_no_date() {
        assert!(!TriggerInfo::scan("circa the late Victorian era").may_contain_date());
        assert!(TriggerInfo::scan("circa 1880").may_contain_date());
    }

    #[test]
    fn display_lists_flag_names() {
        let mask = BucketMask::HAS_DIGITS | BucketMask::MONTHISH;
        assert_eq!(mask.to_string(), "HAS_DIGITS|MONTHISH");
        assert_eq!(BucketMask::empty().to_string(), "-");
    }
}
