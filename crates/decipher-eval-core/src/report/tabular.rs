//! Tab-separated report with a `Language`, `SER`, `Accuracy` header

use crate::error::EvalError;
use crate::grouping::GroupedResults;
use crate::metrics::round_to;
use serde::Serialize;

/// Decimal places kept in TSV cells
pub const TABLE_PRECISION: u32 = 3;

/// One output row. NaN cells are `None` and written empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow<'a> {
    #[serde(rename = "Language")]
    pub language: &'a str,
    #[serde(rename = "SER")]
    pub symbol_error_rate: Option<f64>,
    #[serde(rename = "Accuracy")]
    pub word_accuracy: Option<f64>,
}

fn cell(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(round_to(value, TABLE_PRECISION))
    }
}

pub(super) fn rows<'r>(results: &'r GroupedResults<'_>) -> Vec<TableRow<'r>> {
    results
        .iter()
        .map(|(name, group)| TableRow {
            language: name,
            symbol_error_rate: cell(group.metrics.symbol_error_rate),
            word_accuracy: cell(group.metrics.word_accuracy),
        })
        .collect()
}

pub(super) fn render(results: &GroupedResults<'_>) -> Result<Vec<u8>, EvalError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());

    for row in rows(results) {
        writer.serialize(row).map_err(EvalError::Table)?;
    }

    writer
        .into_inner()
        .map_err(|err| EvalError::Write(err.into_error()))
}
