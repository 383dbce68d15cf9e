//! Pointdist demo entry point
//!
//! Builds a distribution from a fixed config string and prints one
//! sampled point to stdout with no trailing newline.

use anyhow::{Context, Result};
use pointdist::WeightedDistribution;

fn main() -> Result<()> {
    let config = "0.5=1000,0.3=5000,0.15=10000,0.05=1000000";

    let distribution = WeightedDistribution::from_config(Some(config))
        .context("Distribution config validation failed")?;

    // A fall-through draw is a defined outcome and must be surfaced,
    // never replaced with a default point.
    let point = distribution
        .sample()
        .context("Sampling returned no value")?;

    print!("{}", point);

    Ok(())
}
