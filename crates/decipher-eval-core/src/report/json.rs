//! JSON report: an object keyed by group name, `global` included

use crate::error::EvalError;
use crate::grouping::GroupedResults;
use crate::metrics::Metrics;
use std::collections::BTreeMap;

/// Keys come out sorted. Non-finite numbers are written as `null`.
pub(super) fn render(results: &GroupedResults<'_>) -> Result<Vec<u8>, EvalError> {
    let groups: BTreeMap<&str, &Metrics> = results
        .iter()
        .map(|(name, group)| (name, &group.metrics))
        .collect();

    let mut out = serde_json::to_vec_pretty(&groups)?;
    out.push(b'\n');
    Ok(out)
}
