//! Input readers that turn aligned text files or a combined TSV into a [`Corpus`]
//!
//! Both readers produce the same thing: every record in input order plus the
//! set of distinct language labels seen while reading.

mod aligned;
mod combined;

pub use aligned::AlignedPaths;

use crate::error::EvalError;
use crate::record::{Record, GLOBAL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What to do when the four aligned input files have different line counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentPolicy {
    /// Stop at the end of the shortest file (zip semantics)
    #[default]
    Truncate,
    /// Fail with [`EvalError::MisalignedInputs`]
    Strict,
}

impl AlignmentPolicy {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Truncate => "truncate",
            Self::Strict => "strict",
        }
    }
}

impl std::str::FromStr for AlignmentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "truncate" | "zip" => Ok(Self::Truncate),
            "strict" => Ok(Self::Strict),
            _ => Err(format!("Unknown alignment policy '{}'. Available: truncate, strict", s)),
        }
    }
}

/// All records of one evaluation run and the language labels they carry
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<Record>,
    languages: BTreeSet<String>,
}

impl Corpus {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct language labels, sorted
    pub fn languages(&self) -> &BTreeSet<String> {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record, rejecting empty or reserved language labels.
    /// `line` is the 1-based input line used in error messages.
    fn push(&mut self, record: Record, line: u64) -> Result<(), EvalError> {
        if record.language().is_empty() {
            return Err(EvalError::EmptyLanguage { line });
        }
        if record.language() == GLOBAL {
            return Err(EvalError::ReservedLanguage { line });
        }
        if !self.languages.contains(record.language()) {
            self.languages.insert(record.language().to_string());
        }
        self.records.push(record);
        Ok(())
    }
}

impl FromIterator<Record> for Corpus {
    /// Build a corpus from already-validated records (mostly useful in tests)
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut corpus = Corpus::default();
        for record in iter {
            corpus.languages.insert(record.language().to_string());
            corpus.records.push(record);
        }
        corpus
    }
}
