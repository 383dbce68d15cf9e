//! Error types
//!
//! Every failure pointdist can report is a construction-time validation
//! error. Sampling never fails; it returns `None` when no pool matches
//! the drawn fraction, which is a defined outcome rather than an error.
//!
//! The message text of each variant is part of the public contract:
//! callers and tests match on it, so it must stay stable.

use thiserror::Error;

/// Validation failure raised while parsing a distribution config string.
///
/// Variants are checked in a fixed order and construction short-circuits
/// at the first failure, so each malformed input maps to exactly one
/// condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The config reference was absent.
    #[error("distribution config string cannot be null")]
    NullConfig,

    /// The config string was empty after whitespace stripping.
    #[error("distribution config string cannot be empty")]
    EmptyConfig,

    /// Splitting the config on `,` produced no entries.
    #[error("distribution entry list cannot be empty")]
    EmptyEntryList,

    /// An individual entry string was empty.
    #[error("distribution entry cannot be empty")]
    EmptyEntry,

    /// Splitting an entry on `=` produced no fragments.
    #[error("distribution entry values cannot be empty")]
    EmptyValueList,

    /// The probability fragment was missing or not a number.
    #[error("probability cannot be parsed")]
    ProbabilityParseError,

    /// The parsed probability was negative.
    #[error("probability cannot be negative")]
    NegativeProbability,

    /// The point fragment was missing or not an integer.
    #[error("point cannot be parsed")]
    PointParseError,

    /// No pairs were stored. Defensive; unreachable through the public
    /// parse path, which rejects empty inputs earlier.
    #[error("distribution map cannot be empty")]
    EmptyDistribution,

    /// The accumulated probability total was not exactly 1.
    #[error("total probability cannot be less or greater than 100%")]
    ProbabilityTotalInvalid,
}
