//! decipher-eval core - scoring for decipherment and transliteration outputs
//!
//! This library provides:
//! - Ingestion of four line-aligned files or one combined TSV into a corpus
//! - Symbol error rate (token-level WER) and exact-match word accuracy
//! - Per-language grouping with an aggregate `global` group
//! - Text, TSV and JSON reports

pub mod config;
pub mod grouping;
pub mod ingest;
pub mod metrics;
pub mod record;
pub mod report;

mod error;

pub use config::Config;
pub use error::EvalError;
pub use grouping::{Group, GroupedResults};
pub use ingest::{AlignedPaths, AlignmentPolicy, Corpus};
pub use metrics::Metrics;
pub use record::{Record, GLOBAL};
pub use report::{OutputFormat, OutputTarget};

/// Score a corpus and write the report.
///
/// This is the main entry point for the library.
pub fn evaluate(
    corpus: &Corpus,
    format: OutputFormat,
    target: &OutputTarget,
) -> Result<(), EvalError> {
    let results = GroupedResults::compute(corpus);
    report::write_report(&results, format, target)
}
