use crate::Alternative;
use std::num::ParseIntError;
use thiserror::Error;

/// Why a single date match could not be turned into years.
///
/// These never reach callers of the facet API: the match is dropped and its
/// siblings are still used. They are kept so a dropped match can be inspected
/// through [`crate::extract_verbose`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("'{text}' is not a valid year number")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot resolve uncertain year '{0}'")]
    UnresolvedUncertain(String),

    #[error("{} match lacks its {group} component", .alternative.name())]
    MissingCapture { alternative: Alternative, group: &'static str },
}

impl ResolveError {
    pub(crate) fn invalid_number(text: &str, source: ParseIntError) -> Self {
        ResolveError::InvalidNumber { text: text.to_string(), source }
    }
}
