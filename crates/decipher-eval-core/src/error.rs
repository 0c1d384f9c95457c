//! Error type shared by ingestion, scoring and report rendering

use std::io;
use std::path::PathBuf;

/// Evaluation error with enough context to locate the offending input
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("Failed to open {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to read {stream} input: {source}")]
    Read { stream: String, source: io::Error },

    #[error("Malformed row {line} in combined TSV: {source}")]
    Tsv { line: u64, source: csv::Error },

    #[error("Schema mismatch at row {line}: expected 4 columns (reference, hypothesis, source, language), found {found}")]
    SchemaMismatch { line: u64, found: usize },

    #[error("Input files have unequal line counts: reference={reference}, hypothesis={hypothesis}, source={src}, languages={languages}")]
    MisalignedInputs {
        reference: usize,
        hypothesis: usize,
        src: usize,
        languages: usize,
    },

    #[error("Empty language label at line {line}")]
    EmptyLanguage { line: u64 },

    #[error("Language label \"global\" at line {line} is reserved for the aggregate group")]
    ReservedLanguage { line: u64 },

    #[error("Failed to write report: {0}")]
    Write(#[from] io::Error),

    #[error("Failed to encode TSV report: {0}")]
    Table(csv::Error),

    #[error("Failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
}
