//! Symbol error rate and word accuracy over a collection of records

mod edit_distance;

pub use edit_distance::{edit_distance, tokenize, ErrorTally};

use crate::record::{Record, GLOBAL};
use serde::Serialize;
use std::collections::BTreeSet;

/// Decimal places kept in a computed [`Metrics`] value
pub const METRICS_PRECISION: u32 = 5;

/// Round to `places` decimals, ties to even
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    (value * factor).round_ties_even() / factor
}

/// Scores for one group of records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// Corpus-level token edit rate; may exceed 1.0
    pub symbol_error_rate: f64,
    /// Percentage of exact matches, 0-100 (NaN for an empty group)
    pub word_accuracy: f64,
    /// Single language of the group, or `global` when mixed
    pub language: String,
}

impl Metrics {
    /// Build from raw values, rounding both to [`METRICS_PRECISION`] places
    pub fn new(symbol_error_rate: f64, word_accuracy: f64, language: impl Into<String>) -> Self {
        Self {
            symbol_error_rate: round_to(symbol_error_rate, METRICS_PRECISION),
            word_accuracy: round_to(word_accuracy, METRICS_PRECISION),
            language: language.into(),
        }
    }

    /// Score `records`, labelling the result with their shared language, or
    /// `global` if they span several.
    pub fn compute(records: &[&Record]) -> Self {
        let languages: BTreeSet<&str> = records.iter().map(|r| r.language()).collect();
        let language = match (languages.len(), languages.first()) {
            (1, Some(only)) => *only,
            _ => GLOBAL,
        };
        Self::compute_as(records, language)
    }

    /// Score `records` under an explicit label
    pub fn compute_as(records: &[&Record], language: &str) -> Self {
        Self::new(
            symbol_error_rate(records),
            100.0 * word_accuracy(records),
            language,
        )
    }
}

/// Token edit operations across all records over total reference tokens
pub fn symbol_error_rate(records: &[&Record]) -> f64 {
    let mut tally = ErrorTally::default();
    for record in records {
        tally.add(record.reference(), record.hypothesis());
    }
    tally.rate()
}

/// Fraction of records whose hypothesis equals the reference exactly
pub fn word_accuracy(records: &[&Record]) -> f64 {
    // Mean of an empty set
    if records.is_empty() {
        return f64::NAN;
    }
    let matches = records.iter().filter(|r| r.is_exact_match()).count();
    matches as f64 / records.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(language: &str, reference: &str, hypothesis: &str) -> Record {
        Record::without_source(language, reference, hypothesis)
    }

    #[test]
    fn test_perfect_match() {
        let r = rec("en", "a b c", "a b c");
        let metrics = Metrics::compute(&[&r]);
        assert_eq!(metrics.symbol_error_rate, 0.0);
        assert_eq!(metrics.word_accuracy, 100.0);
        assert_eq!(metrics.language, "en");
    }

    #[test]
    fn test_single_substitution() {
        let r = rec("en", "a b c", "a b d");
        let metrics = Metrics::compute(&[&r]);
        assert_eq!(metrics.symbol_error_rate, 0.33333);
        assert_eq!(metrics.word_accuracy, 0.0);
    }

    #[test]
    fn test_mixed_languages_labelled_global() {
        let a = rec("en", "a", "a");
        let b = rec("fr", "b", "c");
        let metrics = Metrics::compute(&[&a, &b]);
        assert_eq!(metrics.language, "global");
        assert_eq!(metrics.word_accuracy, 50.0);
        assert_eq!(metrics.symbol_error_rate, 0.5);
    }

    #[test]
    fn test_compute_as_overrides_label() {
        let a = rec("en", "a", "a");
        assert_eq!(Metrics::compute_as(&[&a], GLOBAL).language, "global");
    }

    #[test]
    fn test_accuracy_uses_full_string() {
        // Token sequences match, strings do not
        let spaced = rec("en", "a b", "a  b");
        let metrics = Metrics::compute(&[&spaced]);
        assert_eq!(metrics.symbol_error_rate, 0.0);
        assert_eq!(metrics.word_accuracy, 0.0);
    }

    #[test]
    fn test_accuracy_bounds() {
        let records = [
            rec("en", "a", "a"),
            rec("en", "b", "x"),
            rec("en", "c", "c"),
        ];
        let refs: Vec<&Record> = records.iter().collect();
        let metrics = Metrics::compute(&refs);
        assert!(metrics.word_accuracy >= 0.0 && metrics.word_accuracy <= 100.0);
        assert_eq!(metrics.word_accuracy, 66.66667);
    }

    #[test]
    fn test_empty_group_accuracy_is_nan() {
        let metrics = Metrics::compute(&[]);
        assert!(metrics.word_accuracy.is_nan());
        assert_eq!(metrics.symbol_error_rate, 0.0);
        assert_eq!(metrics.language, "global");
    }

    #[test]
    fn test_recompute_is_identical() {
        let records = [rec("en", "a b c d e f g", "a c d x f g h"), rec("en", "q", "q")];
        let refs: Vec<&Record> = records.iter().collect();
        let first = Metrics::compute(&refs);
        let second = Metrics::compute(&refs);
        assert_eq!(first.symbol_error_rate.to_bits(), second.symbol_error_rate.to_bits());
        assert_eq!(first.word_accuracy.to_bits(), second.word_accuracy.to_bits());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.0 / 3.0, 5), 0.33333);
        assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
        assert_eq!(round_to(100.0, 3), 100.0);
        assert!(round_to(f64::NAN, 3).is_nan());
    }

    #[test]
    fn test_round_to_ties_go_to_even() {
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(0.3125, 3), 0.312);
        assert_eq!(round_to(0.390625, 5), 0.39062);
        assert_eq!(round_to(0.1875, 3), 0.188);
    }

    #[test]
    fn test_stored_accuracy_tie_rounds_to_even() {
        // 1 exact match in 256 records is exactly 0.390625%
        let mut records = vec![rec("en", "a", "a")];
        records.extend((0..255).map(|_| rec("en", "a", "b")));
        let refs: Vec<&Record> = records.iter().collect();
        assert_eq!(Metrics::compute(&refs).word_accuracy, 0.39062);
    }
}
