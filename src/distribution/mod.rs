//! Random distribution implementations
//!
//! This module provides distributions that draw integer points according
//! to a configured probability pattern.
//!
//! # Distributions
//!
//! - **Weighted**: finite table of (probability, point) pairs parsed from
//!   a config string; one uniform draw per sample, resolved by an
//!   inverse-CDF scan over cumulative probabilities
//!
//! # Thread Safety
//!
//! Distributions are immutable after construction and sample through
//! `&self`, so one instance can be shared across threads. Each call draws
//! from the calling thread's own random source; there is no shared
//! mutable sampling state.

pub mod weighted;
