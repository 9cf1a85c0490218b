//! Per-county rollups for the heatmap and the county table.

use std::collections::{BTreeMap, BTreeSet};

use evp_model::category::EvCategory;
use evp_model::record::VehicleRecord;
use evp_utils::math;
use serde::Serialize;

/// Default number of counties to report.
pub const DEFAULT_COUNTY_LIMIT: usize = 15;

/// One county's rollup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyStats {
    pub county: String,
    pub count: u64,
    /// BEV share of this county's record count, integer percent.
    pub bev_percentage: i64,
    pub unique_makes: u64,
    /// Mean electric range over this county's known-range records; 0 when
    /// the county has no known ranges. The denominator is the known-range
    /// subset, not the county total.
    pub average_range: u64,
}

#[derive(Default)]
struct Accumulator<'a> {
    count: u64,
    bev_count: u64,
    makes: BTreeSet<&'a str>,
    range_sum: u64,
    ranged_count: u64,
}

/// Roll up records per county (blank county -> "Unknown"), ranked
/// descending by count and truncated to `limit`.
pub fn county_analysis(records: &[VehicleRecord], limit: usize) -> Vec<CountyStats> {
    let mut counties: BTreeMap<&str, Accumulator<'_>> = BTreeMap::new();
    for record in records {
        let entry = counties.entry(record.county_or_unknown()).or_default();
        entry.count += 1;
        if record.category == EvCategory::Bev {
            entry.bev_count += 1;
        }
        entry.makes.insert(record.make.as_str());
        if let Some(range) = record.electric_range {
            entry.range_sum += u64::from(range);
            entry.ranged_count += 1;
        }
    }

    let mut stats: Vec<CountyStats> = counties
        .into_iter()
        .map(|(county, acc)| CountyStats {
            county: county.to_string(),
            count: acc.count,
            bev_percentage: math::percent_of(acc.bev_count, acc.count),
            unique_makes: acc.makes.len() as u64,
            average_range: math::mean_rounded(acc.range_sum, acc.ranged_count),
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.county.cmp(&b.county)));
    log::debug!("rolled up {} counties, reporting {}", stats.len(), limit.min(stats.len()));
    stats.truncate(limit);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bev, phev};

    #[test]
    fn test_county_rollup() {
        let records = vec![
            bev("TESLA", "King", 2020, 200),
            bev("NISSAN", "King", 2019, 150),
            phev("CHEVROLET", "King", 2019, 38),
            bev("TESLA", "Pierce", 2020, 250),
        ];
        let stats = county_analysis(&records, DEFAULT_COUNTY_LIMIT);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].county, "King");
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[0].bev_percentage, 67);
        assert_eq!(stats[0].unique_makes, 3);
        assert_eq!(stats[0].average_range, 129); // (200+150+38)/3 = 129.33
    }

    #[test]
    fn test_average_range_uses_known_range_subset() {
        // two records, only one with a known range: denominator must be 1
        let records = vec![
            bev("TESLA", "King", 2020, 200),
            bev("TESLA", "King", 2020, 0),
        ];
        let stats = county_analysis(&records, DEFAULT_COUNTY_LIMIT);
        assert_eq!(stats[0].average_range, 200);
    }

    #[test]
    fn test_all_unknown_ranges_yield_zero_mean() {
        let records = vec![
            bev("TESLA", "King", 2020, 0),
            bev("TESLA", "King", 2020, 0),
        ];
        let stats = county_analysis(&records, DEFAULT_COUNTY_LIMIT);
        assert_eq!(stats[0].average_range, 0);
        assert_eq!(stats[0].count, 2);
    }

    #[test]
    fn test_blank_county_becomes_unknown() {
        let records = vec![bev("TESLA", "", 2020, 200)];
        let stats = county_analysis(&records, DEFAULT_COUNTY_LIMIT);
        assert_eq!(stats[0].county, "Unknown");
    }

    #[test]
    fn test_limit_and_order() {
        let records = vec![
            bev("TESLA", "King", 2020, 200),
            bev("TESLA", "King", 2020, 200),
            bev("TESLA", "Pierce", 2020, 200),
            bev("TESLA", "Clark", 2020, 200),
        ];
        let stats = county_analysis(&records, 2);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].county, "King");
        // Clark and Pierce tie at 1; Clark sorts first
        assert_eq!(stats[1].county, "Clark");
    }
}
