//! Top-N categorical rankings by make and by model.

use std::collections::BTreeMap;

use evp_model::record::VehicleRecord;
use evp_utils::math;
use serde::Serialize;

/// Default number of makes to report.
pub const DEFAULT_MAKE_LIMIT: usize = 10;

/// Default number of models to report.
pub const DEFAULT_MODEL_LIMIT: usize = 10;

/// One make with its count and share of the full record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MakeShare {
    pub make: String,
    pub count: u64,
    /// Integer percent of the total record count.
    pub percentage: i64,
}

/// One (make, model) pair with its count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCount {
    /// Combined "make model" display key.
    pub model: String,
    pub count: u64,
    /// Display make, re-derived by splitting the combined key on its first
    /// space. Multi-word makes mis-split here; the original dashboard did
    /// the same and the behavior is kept, not fixed.
    pub make: String,
}

fn ranked<K: Ord + Clone>(counts: BTreeMap<K, u64>, limit: usize) -> Vec<(K, u64)> {
    let mut entries: Vec<(K, u64)> = counts.into_iter().collect();
    // count descending, key ascending as tie-break
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}

/// Group by make, rank descending by count, truncate to `limit`.
///
/// Percentages use the total record count as denominator.
pub fn top_makes(records: &[VehicleRecord], limit: usize) -> Vec<MakeShare> {
    let total = records.len() as u64;
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.make.as_str()).or_insert(0) += 1;
    }
    ranked(counts, limit)
        .into_iter()
        .map(|(make, count)| MakeShare {
            make: make.to_string(),
            count,
            percentage: math::percent_of(count, total),
        })
        .collect()
}

/// Group by the combined "make model" key, rank descending by count,
/// truncate to `limit`.
pub fn top_models(records: &[VehicleRecord], limit: usize) -> Vec<ModelCount> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        let key = format!("{} {}", record.make, record.model);
        *counts.entry(key).or_insert(0) += 1;
    }
    ranked(counts, limit)
        .into_iter()
        .map(|(model, count)| {
            let make = model
                .split(' ')
                .next()
                .unwrap_or(model.as_str())
                .to_string();
            ModelCount { model, count, make }
        })
        .collect()
}
