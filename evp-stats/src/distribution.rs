//! Fixed-category and fixed-bin histograms: EV type and electric range.

use std::collections::BTreeMap;

use evp_model::record::VehicleRecord;
use evp_utils::math;
use serde::Serialize;

/// The fixed range histogram bins: (label, inclusive lower, inclusive
/// upper). Exhaustive and non-overlapping over all known ranges.
pub const RANGE_BINS: [(&str, u32, u32); 7] = [
    ("0-50", 0, 50),
    ("51-100", 51, 100),
    ("101-150", 101, 150),
    ("151-200", 151, 200),
    ("201-250", 201, 250),
    ("251-300", 251, 300),
    ("301+", 301, u32::MAX),
];

/// Label of the longest-range bin, referenced by the insight rules.
pub const LONG_RANGE_BIN: &str = "301+";

/// One EV-type slice of the donut chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeShare {
    /// Display label with the parenthetical qualifier stripped.
    pub label: String,
    pub count: u64,
    /// Integer percent of the total record count.
    pub percentage: i64,
}

/// One fixed range bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeBin {
    pub range: &'static str,
    pub count: u64,
    /// Integer percent of the known-range subset, NOT the full record set.
    pub percentage: i64,
}

/// Group records by stripped EV-type label with shares of the total record
/// count, sorted count-descending then label-ascending.
pub fn ev_type_distribution(records: &[VehicleRecord]) -> Vec<TypeShare> {
    let total = records.len() as u64;
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.type_label()).or_insert(0) += 1;
    }
    let mut shares: Vec<TypeShare> = counts
        .into_iter()
        .map(|(label, count)| TypeShare {
            label,
            count,
            percentage: math::percent_of(count, total),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    shares
}

/// Histogram of known electric ranges over the fixed bin table.
///
/// All seven bins are always present, in table order. Percentages are
/// computed against the known-range subset size; that denominator choice is
/// load-bearing for parity with the published dashboard figures.
pub fn range_distribution(records: &[VehicleRecord]) -> Vec<RangeBin> {
    let mut counts = [0u64; RANGE_BINS.len()];
    let mut ranged_records: u64 = 0;
    for record in records {
        if let Some(range) = record.electric_range {
            ranged_records += 1;
            let slot = RANGE_BINS
                .iter()
                .position(|&(_, low, high)| range >= low && range <= high)
                .unwrap_or(RANGE_BINS.len() - 1);
            counts[slot] += 1;
        }
    }
    RANGE_BINS
        .iter()
        .zip(counts.iter())
        .map(|(&(range, _, _), &count)| RangeBin {
            range,
            count,
            percentage: math::percent_of(count, ranged_records),
        })
        .collect()
}
