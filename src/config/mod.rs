//! Configuration parsing and validation
//!
//! Parses the compact distribution grammar into a validated list of
//! (probability, point) pairs:
//!
//! ```text
//! config      := entry ("," entry)*
//! entry       := probability "=" point
//! probability := decimal number, e.g. "0.5"
//! point       := integer, may be negative
//! ```
//!
//! Whitespace anywhere in the string is stripped before parsing. The
//! validation rules run in a fixed order and stop at the first failure,
//! so each malformed input maps to one [`ConfigError`] condition.
//!
//! # Numeric policy
//!
//! Probabilities are `f32` and the total is accumulated in `f32` in entry
//! order, then compared to 1.0 with strict equality. There is no epsilon:
//! a config whose single-precision sum lands off 1.0 is rejected even if
//! it was meant to total 100%.

use crate::error::ConfigError;

/// Delimiter between entries in the config
const ENTRY_DELIMITER: char = ',';

/// Delimiter between probability and point in an entry
const VALUE_DELIMITER: char = '=';

/// Required probability total (100%)
const PROBABILITY_TOTAL: f32 = 1.0;

/// Parse and validate a distribution config string.
///
/// `None` models an absent config reference and fails with
/// [`ConfigError::NullConfig`].
///
/// Returns the validated pairs in entry order. A later entry whose
/// probability has the same bit pattern as an earlier one overwrites the
/// earlier point (last-write-wins), so the returned list never contains
/// two pairs with the same probability key.
///
/// # Example
///
/// ```
/// use pointdist::config::parse_config;
///
/// let pairs = parse_config(Some("0.5=1000,0.5=2000")).unwrap();
/// assert_eq!(pairs, vec![(0.5, 2000)]);
/// ```
pub fn parse_config(config: Option<&str>) -> Result<Vec<(f32, i32)>, ConfigError> {
    let config = config.ok_or(ConfigError::NullConfig)?;

    // Strip all whitespace, not just leading/trailing
    let stripped: String = config.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(ConfigError::EmptyConfig);
    }

    let entries = split_collapsed(&stripped, ENTRY_DELIMITER);
    if entries.is_empty() {
        return Err(ConfigError::EmptyEntryList);
    }

    let mut pairs: Vec<(f32, i32)> = Vec::with_capacity(entries.len());
    let mut total_probability = 0.0f32;

    for entry in entries {
        if entry.is_empty() {
            return Err(ConfigError::EmptyEntry);
        }

        let values = split_collapsed(entry, VALUE_DELIMITER);
        if values.is_empty() {
            return Err(ConfigError::EmptyValueList);
        }

        // Only the first two fragments are consulted; anything after a
        // second `=` is ignored.
        let probability: f32 = values[0]
            .parse()
            .map_err(|_| ConfigError::ProbabilityParseError)?;
        if probability < 0.0 {
            return Err(ConfigError::NegativeProbability);
        }

        let point: i32 = values
            .get(1)
            .ok_or(ConfigError::PointParseError)?
            .parse()
            .map_err(|_| ConfigError::PointParseError)?;

        store_pair(&mut pairs, probability, point);

        total_probability += probability;
    }

    if pairs.is_empty() {
        return Err(ConfigError::EmptyDistribution);
    }

    if total_probability != PROBABILITY_TOTAL {
        return Err(ConfigError::ProbabilityTotalInvalid);
    }

    Ok(pairs)
}

/// Store a pair keyed by probability bit pattern, last-write-wins.
///
/// Bit-pattern equality makes the key behave like a hash-map float key:
/// `-0.0` and `0.0` are distinct keys and NaN equals itself.
fn store_pair(pairs: &mut Vec<(f32, i32)>, probability: f32, point: i32) {
    match pairs
        .iter_mut()
        .find(|(p, _)| p.to_bits() == probability.to_bits())
    {
        Some(pair) => pair.1 = point,
        None => pairs.push((probability, point)),
    }
}

/// Split on a delimiter, dropping empty trailing fragments.
///
/// A string consisting only of delimiters yields no fragments at all,
/// while empty fragments before the last non-empty one are kept:
/// `","` yields `[]`, `"="` yields `[]`, `"=x"` yields `["", "x"]`,
/// `"0.5="` yields `["0.5"]`.
fn split_collapsed(s: &str, delimiter: char) -> Vec<&str> {
    let mut fragments: Vec<&str> = s.split(delimiter).collect();
    while fragments.last().is_some_and(|f| f.is_empty()) {
        fragments.pop();
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_config() {
        assert_eq!(parse_config(None), Err(ConfigError::NullConfig));
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(parse_config(Some("")), Err(ConfigError::EmptyConfig));
        assert_eq!(parse_config(Some("   \t   ")), Err(ConfigError::EmptyConfig));
        assert_eq!(parse_config(Some(" \n ")), Err(ConfigError::EmptyConfig));
    }

    #[test]
    fn test_empty_entry_list() {
        // Only delimiters: trailing empties collapse away to no entries
        assert_eq!(parse_config(Some(",")), Err(ConfigError::EmptyEntryList));
        assert_eq!(parse_config(Some(",,,")), Err(ConfigError::EmptyEntryList));
    }

    #[test]
    fn test_empty_entry() {
        // Empty fragment before a non-empty one is kept, then rejected
        assert_eq!(
            parse_config(Some(",1=1000")),
            Err(ConfigError::EmptyEntry)
        );
    }

    #[test]
    fn test_empty_value_list() {
        assert_eq!(parse_config(Some("=")), Err(ConfigError::EmptyValueList));
        assert_eq!(
            parse_config(Some("1=1000,=")),
            Err(ConfigError::EmptyValueList)
        );
    }

    #[test]
    fn test_unparsable_probability() {
        assert_eq!(
            parse_config(Some("a=1000")),
            Err(ConfigError::ProbabilityParseError)
        );
        // Leading `=` leaves an empty probability fragment, which does
        // not parse as a number
        assert_eq!(
            parse_config(Some("=1000")),
            Err(ConfigError::ProbabilityParseError)
        );
    }

    #[test]
    fn test_negative_probability() {
        assert_eq!(
            parse_config(Some("-0.5=1000")),
            Err(ConfigError::NegativeProbability)
        );
    }

    #[test]
    fn test_unparsable_point() {
        assert_eq!(
            parse_config(Some("0.5=a")),
            Err(ConfigError::PointParseError)
        );
        // Trailing `=` collapses away, leaving no point fragment
        assert_eq!(
            parse_config(Some("0.5=")),
            Err(ConfigError::PointParseError)
        );
        // Floats are not valid points
        assert_eq!(
            parse_config(Some("0.5=1.5")),
            Err(ConfigError::PointParseError)
        );
    }

    #[test]
    fn test_total_probability_less_than_100() {
        assert_eq!(
            parse_config(Some("0.5=1000")),
            Err(ConfigError::ProbabilityTotalInvalid)
        );
    }

    #[test]
    fn test_total_probability_greater_than_100() {
        assert_eq!(
            parse_config(Some("0.5=1000,0.4=2000,0.3=3000")),
            Err(ConfigError::ProbabilityTotalInvalid)
        );
    }

    #[test]
    fn test_strict_total_rejects_rounding_artifacts() {
        // Ten 0.1 weights accumulate to 1.0000001 in f32, which the
        // strict equality check rejects.
        let config = "0.1=1,0.1=2,0.1=3,0.1=4,0.1=5,0.1=6,0.1=7,0.1=8,0.1=9,0.1=10";
        assert_eq!(
            parse_config(Some(config)),
            Err(ConfigError::ProbabilityTotalInvalid)
        );
    }

    #[test]
    fn test_valid_config() {
        let pairs = parse_config(Some("0.5=1000,0.3=5000,0.15=10000,0.05=1000000")).unwrap();

        assert_eq!(pairs.len(), 4);

        // Content check, independent of storage order
        let lookup = |probability: f32| {
            pairs
                .iter()
                .find(|(p, _)| *p == probability)
                .map(|(_, point)| *point)
        };
        assert_eq!(lookup(0.5), Some(1000));
        assert_eq!(lookup(0.3), Some(5000));
        assert_eq!(lookup(0.15), Some(10000));
        assert_eq!(lookup(0.05), Some(1000000));
    }

    #[test]
    fn test_whitespace_is_stripped_everywhere() {
        let pairs = parse_config(Some(" 0.5 = 1000 ,\t0.3 = 5000 ,\n0.2 = 777 ")).unwrap();
        assert_eq!(pairs, vec![(0.5, 1000), (0.3, 5000), (0.2, 777)]);
    }

    #[test]
    fn test_negative_point_is_accepted() {
        let pairs = parse_config(Some("1.0=-5")).unwrap();
        assert_eq!(pairs, vec![(1.0, -5)]);
    }

    #[test]
    fn test_duplicate_probability_last_write_wins() {
        let pairs = parse_config(Some("0.5=1000,0.5=2000")).unwrap();
        assert_eq!(pairs, vec![(0.5, 2000)]);
    }

    #[test]
    fn test_extra_value_fragments_are_ignored() {
        let pairs = parse_config(Some("1.0=42=99")).unwrap();
        assert_eq!(pairs, vec![(1.0, 42)]);
    }

    #[test]
    fn test_repeated_parse_is_deterministic() {
        let config = Some("0.5=1000,0.3=5000,0.15=10000,0.05=1000000");
        assert_eq!(parse_config(config).unwrap(), parse_config(config).unwrap());
    }

    #[test]
    fn test_split_collapsed() {
        assert_eq!(split_collapsed(",", ','), Vec::<&str>::new());
        assert_eq!(split_collapsed("=", '='), Vec::<&str>::new());
        assert_eq!(split_collapsed("=x", '='), vec!["", "x"]);
        assert_eq!(split_collapsed("0.5=", '='), vec!["0.5"]);
        assert_eq!(split_collapsed("a,b,", ','), vec!["a", "b"]);
        assert_eq!(split_collapsed(",a", ','), vec!["", "a"]);
    }
}
