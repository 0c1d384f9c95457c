//! Line-oriented report: one `<language>:` block per group, `global` last

use crate::grouping::GroupedResults;
use crate::metrics::Metrics;

/// Decimal places shown in text blocks
pub const TEXT_PRECISION: usize = 4;

fn fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.prec$}", value, prec = TEXT_PRECISION)
    }
}

/// The two-line score block that follows each `<language>:` header
pub fn format_block(metrics: &Metrics) -> String {
    format!(
        "Word Accuracy\t{}\nSER\t{}\n\n",
        fixed(metrics.word_accuracy),
        fixed(metrics.symbol_error_rate)
    )
}

pub(super) fn render(results: &GroupedResults<'_>) -> String {
    let mut out = String::new();
    for (name, group) in results.iter() {
        out.push_str(name);
        out.push_str(":\n");
        out.push_str(&format_block(&group.metrics));
    }
    out
}
