//! Pointdist - weighted integer distribution parser and sampler
//!
//! Pointdist turns a compact textual distribution spec like
//! `"0.5=1000,0.3=5000,0.15=10000,0.05=1000000"` into an immutable
//! [`WeightedDistribution`] that can repeatedly draw an integer point
//! according to the declared probabilities.
//!
//! # Architecture
//!
//! - **Strict validation**: the config grammar is parsed and validated up
//!   front; every failure is a distinct [`ConfigError`] condition
//! - **Inverse-CDF sampling**: one uniform draw per call, scanned against
//!   cumulative probabilities
//! - **Immutable after construction**: sampling takes `&self`, so a
//!   distribution can be shared across threads without locking

pub mod config;
pub mod distribution;
pub mod error;

// Re-export commonly used types
pub use distribution::weighted::WeightedDistribution;
pub use error::ConfigError;

/// Result type used throughout pointdist
pub type Result<T> = std::result::Result<T, ConfigError>;
