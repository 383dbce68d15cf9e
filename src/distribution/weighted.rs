//! Weighted distribution over integer points
//!
//! This module provides a finite discrete distribution built from a
//! config string such as `"0.5=1000,0.3=5000,0.15=10000,0.05=1000000"`.
//! Each pair assigns a fractional probability to an integer point; the
//! probabilities must sum to exactly 1.
//!
//! # Sampling
//!
//! Each sample draws one uniform integer in [1, 100], converts it to a
//! fraction in [0.01, 1.00], and scans the pairs accumulating their
//! probabilities. The point of the first pair whose cumulative
//! probability reaches the fraction is returned. The scan is
//! order-independent for correctness: any traversal that visits every
//! pair once gives the configured frequencies, because only the running
//! total is compared against the draw.
//!
//! # Example
//!
//! ```
//! use pointdist::WeightedDistribution;
//!
//! let dist = WeightedDistribution::from_config(Some("1.0=42")).unwrap();
//! assert_eq!(dist.sample(), Some(42));
//! ```

use crate::config;
use crate::error::ConfigError;
use rand::Rng;
use std::str::FromStr;

/// Lower bound of the uniform draw (inclusive)
const RANDOM_NUMBER_MIN: u32 = 1;

/// Upper bound of the uniform draw (inclusive)
const RANDOM_NUMBER_MAX: u32 = 100;

/// Finite discrete probability distribution over integer points.
///
/// Built once from a validated config string and immutable afterwards.
/// Pairs are kept in entry order; a later entry with the same probability
/// key replaces the earlier point during parsing, so the stored keys are
/// unique.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDistribution {
    /// Validated (probability, point) pairs, probabilities summing to 1
    pairs: Vec<(f32, i32)>,
}

impl WeightedDistribution {
    /// Parse and validate a distribution config string.
    ///
    /// `None` models an absent config reference. See
    /// [`parse_config`](crate::config::parse_config) for the grammar and
    /// the validation sequence; any failure aborts construction, so a
    /// partially-built distribution is never observable.
    pub fn from_config(config: Option<&str>) -> Result<Self, ConfigError> {
        let pairs = config::parse_config(config)?;
        Ok(Self { pairs })
    }

    /// Validated (probability, point) pairs in storage order.
    pub fn pairs(&self) -> &[(f32, i32)] {
        &self.pairs
    }

    /// Draw one point using the calling thread's random source.
    ///
    /// Never fails and never panics. Returns `None` only when
    /// floating-point rounding at a pool boundary leaves the drawn
    /// fraction above every cumulative probability; callers must treat
    /// that as a defined outcome, not substitute a default.
    pub fn sample(&self) -> Option<i32> {
        self.sample_with(&mut rand::thread_rng())
    }

    /// Draw one point using a caller-supplied random source.
    ///
    /// Useful for reproducible draws from a seeded generator.
    pub fn sample_with<R: Rng>(&self, rng: &mut R) -> Option<i32> {
        let random_number = rng.gen_range(RANDOM_NUMBER_MIN..=RANDOM_NUMBER_MAX);
        let random_fraction = random_number as f32 / 100.0;

        // Inverse-CDF scan: each pair's pool covers the range between the
        // previous cumulative total and its own.
        let mut probability_max = 0.0f32;
        for &(probability, point) in &self.pairs {
            probability_max += probability;
            if random_fraction <= probability_max {
                return Some(point);
            }
        }

        None
    }
}

impl FromStr for WeightedDistribution {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_config(Some(s))
    }
}
