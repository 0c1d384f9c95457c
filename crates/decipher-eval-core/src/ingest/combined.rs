//! Combined TSV input with four positional columns:
//! reference, hypothesis, source, language.
//!
//! Every cell is read as raw text. Tokens such as `NA`, `NULL` or `#N/A` are
//! ordinary data here, and quote characters have no special meaning.

use super::Corpus;
use crate::error::EvalError;
use crate::record::Record;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of columns every row must carry
pub const COLUMN_COUNT: usize = 4;

impl Corpus {
    /// Read a combined TSV file from disk
    pub fn from_combined_tsv_path(path: &Path, has_header: bool) -> Result<Self, EvalError> {
        let file = File::open(path).map_err(|source| EvalError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = Self::from_combined_tsv_reader(file, has_header)?;
        tracing::info!(
            "Read {} records ({} languages) from {:?}",
            corpus.len(),
            corpus.languages().len(),
            path
        );
        Ok(corpus)
    }

    /// Read combined TSV rows. With `has_header` the first row is skipped;
    /// columns are positional either way.
    pub fn from_combined_tsv_reader<R: Read>(reader: R, has_header: bool) -> Result<Self, EvalError> {
        let mut tsv = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(has_header)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut corpus = Corpus::default();

        for (idx, result) in tsv.records().enumerate() {
            let fallback_line = idx as u64 + 1 + u64::from(has_header);
            let row = result.map_err(|source| {
                let line = source
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                EvalError::Tsv { line, source }
            })?;
            let line = row.position().map(|p| p.line()).unwrap_or(fallback_line);

            if row.len() != COLUMN_COUNT {
                return Err(EvalError::SchemaMismatch {
                    line,
                    found: row.len(),
                });
            }

            corpus.push(Record::new(&row[3], &row[0], &row[1], &row[2]), line)?;
        }

        Ok(corpus)
    }
}
