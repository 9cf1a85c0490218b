//! Country-level aggregation for the world map view.
//!
//! Registrations are bucketed by mapping each US state abbreviation to
//! "USA"; any unmapped state code passes through verbatim as its own bucket
//! key, so foreign registrations in the extract still land somewhere
//! visible.

use std::collections::{BTreeMap, BTreeSet};

use evp_model::category::{CafvStatus, EvCategory};
use evp_model::record::VehicleRecord;
use evp_utils::math;
use serde::Serialize;

/// The 50 US state abbreviations that bucket to "USA".
const US_STATES: [&str; 50] = [
    "WA", "CA", "NY", "TX", "FL", "IL", "PA", "OH", "GA", "NC", "MI", "NJ",
    "VA", "AZ", "MA", "TN", "IN", "MO", "MD", "WI", "MN", "CO", "AL", "SC",
    "LA", "KY", "OR", "OK", "CT", "UT", "IA", "NV", "AR", "MS", "KS", "NM",
    "NE", "WV", "ID", "HI", "NH", "ME", "MT", "RI", "DE", "SD", "ND", "AK",
    "VT", "WY",
];

/// Map a state code to its country bucket key.
pub fn country_for_state(state: &str) -> &str {
    if US_STATES.contains(&state) {
        "USA"
    } else {
        state
    }
}

/// One country bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryStats {
    pub country: String,
    pub total: u64,
    pub bev_count: u64,
    /// Everything that is not a BEV, matching the source dashboard's
    /// two-way split; `bev_count + phev_count == total`.
    pub phev_count: u64,
    /// Mean electric range over this bucket's known-range records; 0 when
    /// the bucket has no known ranges.
    pub average_range: f64,
    pub eligible_count: u64,
    /// Distinct contributing state codes.
    pub states: BTreeSet<String>,
    /// Registration count per known model year.
    pub by_year: BTreeMap<i32, u64>,
    /// `(latest active year count - earliest active year count) / earliest
    /// active year count`; 0 when the earliest count is 0 or fewer than two
    /// active years exist.
    pub growth: f64,
}

#[derive(Default)]
struct Accumulator {
    total: u64,
    bev_count: u64,
    phev_count: u64,
    eligible_count: u64,
    range_sum: u64,
    ranged_count: u64,
    states: BTreeSet<String>,
    by_year: BTreeMap<i32, u64>,
}

fn growth_from_years(by_year: &BTreeMap<i32, u64>) -> f64 {
    if by_year.len() < 2 {
        return 0.0;
    }
    // BTreeMap keeps years sorted; first/last are the earliest/latest
    // active years.
    let first = by_year.values().next().copied().unwrap_or(0);
    let last = by_year.values().next_back().copied().unwrap_or(0);
    math::growth_ratio(first, last)
}

/// Bucket records by country, sorted descending by total then ascending by
/// country key.
pub fn country_aggregation(records: &[VehicleRecord]) -> Vec<CountryStats> {
    let mut buckets: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for record in records {
        let entry = buckets.entry(country_for_state(&record.state)).or_default();
        entry.total += 1;
        entry.states.insert(record.state.clone());
        if record.category == EvCategory::Bev {
            entry.bev_count += 1;
        } else {
            entry.phev_count += 1;
        }
        if record.cafv == CafvStatus::Eligible {
            entry.eligible_count += 1;
        }
        if let Some(range) = record.electric_range {
            entry.range_sum += u64::from(range);
            entry.ranged_count += 1;
        }
        if let Some(year) = record.model_year {
            *entry.by_year.entry(year).or_insert(0) += 1;
        }
    }

    let mut stats: Vec<CountryStats> = buckets
        .into_iter()
        .map(|(country, acc)| {
            let average_range = if acc.ranged_count == 0 {
                0.0
            } else {
                acc.range_sum as f64 / acc.ranged_count as f64
            };
            let growth = growth_from_years(&acc.by_year);
            CountryStats {
                country: country.to_string(),
                total: acc.total,
                bev_count: acc.bev_count,
                phev_count: acc.phev_count,
                average_range,
                eligible_count: acc.eligible_count,
                states: acc.states,
                by_year: acc.by_year,
                growth,
            }
        })
        .collect();
    stats.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.country.cmp(&b.country)));
    log::debug!("bucketed {} records into {} countries", records.len(), stats.len());
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bev, record};
    use evp_model::category::{CafvStatus, EvCategory};

    fn in_state(state: &str, year: i32) -> evp_model::record::VehicleRecord {
        record("TESLA", "MODEL 3", "King", state, Some(year), Some(200), EvCategory::Bev)
    }

    #[test]
    fn test_us_states_bucket_to_usa() {
        // WA and CA both map to USA; XX passes through
        let records = vec![in_state("WA", 2020), in_state("CA", 2021), in_state("XX", 2020)];
        let stats = country_aggregation(&records);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].country, "USA");
        assert_eq!(stats[0].total, 2);
        assert_eq!(stats[0].states.len(), 2);
        assert_eq!(stats[1].country, "XX");
        assert_eq!(stats[1].total, 1);
    }

    #[test]
    fn test_country_for_state() {
        assert_eq!(country_for_state("WA"), "USA");
        assert_eq!(country_for_state("WY"), "USA");
        assert_eq!(country_for_state("BC"), "BC");
        assert_eq!(country_for_state(""), "");
    }

    #[test]
    fn test_non_bev_counts_as_phev() {
        let records = vec![
            record("TESLA", "M3", "King", "WA", Some(2020), Some(200), EvCategory::Bev),
            record("CHEVROLET", "VOLT", "King", "WA", Some(2020), Some(38), EvCategory::Phev),
            record("OTHER", "X", "King", "WA", Some(2020), None, EvCategory::Unknown),
        ];
        let stats = country_aggregation(&records);
        assert_eq!(stats[0].bev_count, 1);
        assert_eq!(stats[0].phev_count, 2);
        assert_eq!(stats[0].bev_count + stats[0].phev_count, stats[0].total);
    }

    #[test]
    fn test_growth_first_vs_last_active_year() {
        let mut records = Vec::new();
        for _ in 0..4 {
            records.push(in_state("WA", 2018));
        }
        for _ in 0..6 {
            records.push(in_state("WA", 2022));
        }
        let stats = country_aggregation(&records);
        assert_eq!(stats[0].growth, 0.5); // (6-4)/4
    }

    #[test]
    fn test_growth_zero_with_single_active_year() {
        let records = vec![in_state("WA", 2020), in_state("WA", 2020)];
        let stats = country_aggregation(&records);
        assert_eq!(stats[0].growth, 0.0);
    }

    #[test]
    fn test_average_range_over_known_subset() {
        let records = vec![
            record("A", "M", "King", "WA", Some(2020), Some(300), EvCategory::Bev),
            record("B", "M", "King", "WA", Some(2020), None, EvCategory::Bev),
        ];
        let stats = country_aggregation(&records);
        assert_eq!(stats[0].average_range, 300.0);
    }

    #[test]
    fn test_all_unknown_ranges_yield_zero_mean() {
        let records = vec![
            record("A", "M", "King", "WA", Some(2020), None, EvCategory::Bev),
        ];
        let stats = country_aggregation(&records);
        assert_eq!(stats[0].average_range, 0.0);
    }

    #[test]
    fn test_eligible_count() {
        let mut eligible = bev("TESLA", "King", 2020, 200);
        eligible.cafv = CafvStatus::Eligible;
        let mut not_eligible = bev("TESLA", "King", 2020, 200);
        not_eligible.cafv = CafvStatus::NotEligible;
        let stats = country_aggregation(&[eligible, not_eligible]);
        assert_eq!(stats[0].eligible_count, 1);
    }

    #[test]
    fn test_by_year_histogram() {
        let records = vec![in_state("WA", 2019), in_state("WA", 2019), in_state("WA", 2021)];
        let stats = country_aggregation(&records);
        assert_eq!(stats[0].by_year.get(&2019), Some(&2));
        assert_eq!(stats[0].by_year.get(&2021), Some(&1));
    }
}
