//! Rendering grouped results as text blocks, TSV rows or JSON
//!
//! Rendering happens entirely in memory; the destination is only opened once
//! the full report exists, so a failed render never leaves a partial file.

mod json;
mod tabular;
mod text;

pub use tabular::{TableRow, TABLE_PRECISION};
pub use text::{format_block, TEXT_PRECISION};

use crate::error::EvalError;
use crate::grouping::GroupedResults;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Report encoding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-language `Word Accuracy` / `SER` blocks
    #[default]
    Text,
    /// One row per language with `Language`, `SER`, `Accuracy` columns
    Tsv,
    /// Object keyed by language
    Json,
}

impl OutputFormat {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "tsv" | "table" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format '{}'. Available: text, tsv, json", s)),
        }
    }
}

/// Where the rendered report goes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `None`, an empty path and `-` all mean stdout
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if !p.as_os_str().is_empty() && p.as_os_str() != "-" => Self::File(p),
            _ => Self::Stdout,
        }
    }

    /// Write `contents` in full and flush. File handles are closed on return,
    /// including on error.
    pub fn write_all(&self, contents: &[u8]) -> Result<(), EvalError> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(contents)?;
                out.flush()?;
            }
            Self::File(path) => {
                let file = File::create(path).map_err(|source| EvalError::Open {
                    path: path.clone(),
                    source,
                })?;
                let mut out = BufWriter::new(file);
                out.write_all(contents)?;
                out.flush()?;
                tracing::info!("Wrote {} bytes to {:?}", contents.len(), path);
            }
        }
        Ok(())
    }
}

/// Render `results` in the given encoding
pub fn render(results: &GroupedResults<'_>, format: OutputFormat) -> Result<Vec<u8>, EvalError> {
    match format {
        OutputFormat::Text => Ok(text::render(results).into_bytes()),
        OutputFormat::Tsv => tabular::render(results),
        OutputFormat::Json => json::render(results),
    }
}

/// Render and write to `target`
pub fn write_report(
    results: &GroupedResults<'_>,
    format: OutputFormat,
    target: &OutputTarget,
) -> Result<(), EvalError> {
    let contents = render(results, format)?;
    target.write_all(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Corpus;
    use crate::record::Record;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_target_from_path() {
        assert_eq!(OutputTarget::from_path(None), OutputTarget::Stdout);
        assert_eq!(OutputTarget::from_path(Some(PathBuf::from("-"))), OutputTarget::Stdout);
        assert_eq!(OutputTarget::from_path(Some(PathBuf::new())), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_path(Some(PathBuf::from("scores.tsv"))),
            OutputTarget::File(PathBuf::from("scores.tsv"))
        );
    }

    #[test]
    fn test_three_rounding_points_from_one_value() {
        // SER = 1/3 before any rounding
        let corpus: Corpus = vec![Record::without_source("en", "a b c", "a b d")]
            .into_iter()
            .collect();
        let results = GroupedResults::compute(&corpus);

        assert_eq!(results.global().metrics.symbol_error_rate, 0.33333);

        let text = String::from_utf8(render(&results, OutputFormat::Text).unwrap()).unwrap();
        assert!(text.contains("SER\t0.3333\n"));

        let tsv = String::from_utf8(render(&results, OutputFormat::Tsv).unwrap()).unwrap();
        assert!(tsv.contains("global\t0.333\t0.0\n"));
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        let corpus: Corpus = vec![Record::without_source("en", "a", "a")].into_iter().collect();
        let results = GroupedResults::compute(&corpus);

        write_report(&results, OutputFormat::Text, &OutputTarget::File(path.clone())).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("en:\nWord Accuracy\t100.0000\n"));
        assert!(written.ends_with("global:\nWord Accuracy\t100.0000\nSER\t0.0000\n\n"));
    }

    #[test]
    fn test_unwritable_destination_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scores.txt");
        let corpus: Corpus = vec![Record::without_source("en", "a", "a")].into_iter().collect();
        let results = GroupedResults::compute(&corpus);

        let err = write_report(&results, OutputFormat::Json, &OutputTarget::File(path)).unwrap_err();
        assert!(matches!(err, EvalError::Open { .. }));
    }
}
