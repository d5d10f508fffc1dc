//! Extraction and reduction engine.
//!
//! ## How the parts work together
//!
//! ```text
//! date strings ──┐
//!                │ for each string:
//!                │   TriggerInfo::scan        (trigger.rs)   coarse buckets, no-digit short-circuit
//!                │   calendar_year            (calendar.rs)  whole-string calendar parse
//!                │   scan_matches + resolve   (extract.rs,   grammar scan, one Years per match
//!                │                             resolve.rs)
//!                v
//!          TokenTrace per string              (trace.rs)
//!                │ union
//!                v
//!          BTreeSet<Years> ── decades / years (facet.rs) ──> BTreeSet<i32>
//! ```
//!
//! Everything here is pure: the only shared state is the pattern library,
//! compiled once and never mutated, so calls may run on any number of threads.
//!
//! ## Debugging
//!
//! Stages emit `tracing` events under the `datefacet` target. With the CLI,
//! run with `--verbose` or `RUST_LOG=datefacet=trace`.

#[path = "engine/calendar.rs"]
mod calendar;
#[path = "engine/extract.rs"]
mod extract;
#[path = "engine/facet.rs"]
mod facet;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trace.rs"]
mod trace;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use extract::extract_token;
pub(crate) use facet::{decades, years};
pub use trace::{CalendarHit, MatchTrace, TokenTrace, Trace};
pub use trigger::BucketMask;
