//! Single-pass summary statistics for the dashboard's stat-card row.

use std::collections::{BTreeMap, BTreeSet};

use evp_model::category::EvCategory;
use evp_model::record::VehicleRecord;
use evp_utils::math;
use serde::Serialize;

use crate::{StatsError, TREND_FLOOR_YEAR};

/// The county leading the registration count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCounty {
    pub name: String,
    pub count: u64,
    /// Share of the full record set, integer percent.
    pub percentage: i64,
}

/// Headline statistics over the full record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_vehicles: u64,
    pub total_makes: u64,
    pub total_models: u64,
    pub total_counties: u64,
    /// Mean electric range over records with a known range; 0 when none.
    pub average_range: u64,
    /// Highest known model year; 0 when no record has a known year.
    pub newest_year: i32,
    /// Lowest known model year; 0 when no record has a known year.
    pub oldest_year: i32,
    pub bev_count: u64,
    pub phev_count: u64,
    /// BEV share of the full record set, integer percent.
    pub bev_percentage: i64,
    /// Growth between the two most recent model years above the trend
    /// floor; 0 with fewer than two such years.
    pub yoy_growth: i64,
    pub top_county: TopCounty,
}

/// Compute the headline statistics in one pass over the record set.
///
/// Fails fast on an empty record set; every downstream figure would be
/// undefined, so the error belongs here at the boundary rather than as
/// seven NaN-shaped outputs.
pub fn dashboard_stats(records: &[VehicleRecord]) -> Result<DashboardStats, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let total_vehicles = records.len() as u64;
    let mut makes: BTreeSet<&str> = BTreeSet::new();
    let mut models: BTreeSet<&str> = BTreeSet::new();
    let mut counties: BTreeSet<&str> = BTreeSet::new();
    let mut range_sum: u64 = 0;
    let mut range_count: u64 = 0;
    let mut newest_year = 0;
    let mut oldest_year = 0;
    let mut bev_count = 0;
    let mut phev_count = 0;
    let mut year_counts: BTreeMap<i32, u64> = BTreeMap::new();
    let mut county_counts: BTreeMap<&str, u64> = BTreeMap::new();

    for record in records {
        makes.insert(record.make.as_str());
        models.insert(record.model.as_str());
        counties.insert(record.county.as_str());
        if let Some(range) = record.electric_range {
            range_sum += u64::from(range);
            range_count += 1;
        }
        if let Some(year) = record.model_year {
            if newest_year == 0 || year > newest_year {
                newest_year = year;
            }
            if oldest_year == 0 || year < oldest_year {
                oldest_year = year;
            }
            if year > TREND_FLOOR_YEAR {
                *year_counts.entry(year).or_insert(0) += 1;
            }
        }
        match record.category {
            EvCategory::Bev => bev_count += 1,
            EvCategory::Phev => phev_count += 1,
            EvCategory::Unknown => {}
        }
        *county_counts.entry(record.county_or_unknown()).or_insert(0) += 1;
    }

    // Two most recent qualifying years; BTreeMap iterates ascending.
    let recent: Vec<(&i32, &u64)> = year_counts.iter().rev().take(2).collect();
    let yoy_growth = match recent.as_slice() {
        [(_, &current), (_, &previous)] => math::growth_percent(current, previous),
        _ => 0,
    };

    // Highest count wins; on a tie the lexicographically smallest county
    // wins because BTreeMap iterates keys in order and `>` keeps the first.
    let (top_name, top_count) = county_counts
        .iter()
        .fold(("Unknown", 0), |(best_name, best_count), (name, &count)| {
            if count > best_count {
                (*name, count)
            } else {
                (best_name, best_count)
            }
        });

    Ok(DashboardStats {
        total_vehicles,
        total_makes: makes.len() as u64,
        total_models: models.len() as u64,
        total_counties: counties.len() as u64,
        average_range: math::mean_rounded(range_sum, range_count),
        newest_year,
        oldest_year,
        bev_count,
        phev_count,
        bev_percentage: math::percent_of(bev_count, total_vehicles),
        yoy_growth,
        top_county: TopCounty {
            name: top_name.to_string(),
            count: top_count,
            percentage: math::percent_of(top_count, total_vehicles),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bev, phev, record};
    use evp_model::category::EvCategory;

    #[test]
    fn test_empty_dataset_fails_fast() {
        assert_eq!(dashboard_stats(&[]), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn test_bev_share_scenario() {
        // 7 BEV + 3 PHEV over 10 records -> 70% BEV
        let mut records = Vec::new();
        for _ in 0..7 {
            records.push(bev("TESLA", "King", 2020, 200));
        }
        for _ in 0..3 {
            records.push(phev("CHEVROLET", "Pierce", 2020, 38));
        }
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.bev_count, 7);
        assert_eq!(stats.phev_count, 3);
        assert_eq!(stats.bev_percentage, 70);
        assert_eq!(stats.total_vehicles, 10);
    }

    #[test]
    fn test_average_range_ignores_unknown() {
        let records = vec![
            bev("TESLA", "King", 2020, 200),
            bev("TESLA", "King", 2020, 100),
            bev("TESLA", "King", 2020, 0), // unknown range
        ];
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.average_range, 150);
    }

    #[test]
    fn test_average_range_zero_when_all_unknown() {
        let records = vec![bev("TESLA", "King", 2020, 0)];
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.average_range, 0);
    }

    #[test]
    fn test_yoy_growth_two_most_recent_years() {
        let mut records = Vec::new();
        for _ in 0..5 {
            records.push(bev("TESLA", "King", 2019, 200));
        }
        for _ in 0..8 {
            records.push(bev("TESLA", "King", 2020, 200));
        }
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.yoy_growth, 60);
    }

    #[test]
    fn test_yoy_growth_needs_two_years() {
        let records = vec![bev("TESLA", "King", 2020, 200)];
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.yoy_growth, 0);
    }

    #[test]
    fn test_yoy_ignores_years_at_or_below_floor() {
        let records = vec![
            bev("NISSAN", "King", 2010, 73),
            bev("NISSAN", "King", 2011, 73),
            bev("NISSAN", "King", 2011, 73),
        ];
        // only 2011 qualifies, so there is no prior year to grow from
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.yoy_growth, 0);
    }

    #[test]
    fn test_top_county_with_share() {
        let records = vec![
            bev("TESLA", "King", 2020, 200),
            bev("TESLA", "King", 2020, 200),
            bev("TESLA", "King", 2020, 200),
            bev("TESLA", "Pierce", 2020, 200),
        ];
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.top_county.name, "King");
        assert_eq!(stats.top_county.count, 3);
        assert_eq!(stats.top_county.percentage, 75);
    }

    #[test]
    fn test_top_county_tie_breaks_lexicographically() {
        let records = vec![
            bev("TESLA", "Pierce", 2020, 200),
            bev("TESLA", "King", 2020, 200),
        ];
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.top_county.name, "King");
    }

    #[test]
    fn test_blank_county_counts_as_unknown() {
        let records = vec![
            bev("TESLA", "", 2020, 200),
            bev("TESLA", "", 2020, 200),
            bev("TESLA", "King", 2020, 200),
        ];
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.top_county.name, "Unknown");
        // distinct counties still counts the raw blank value once
        assert_eq!(stats.total_counties, 2);
    }

    #[test]
    fn test_year_bounds_skip_unknown_years() {
        let records = vec![
            record("TESLA", "MODEL 3", "King", "WA", None, Some(200), EvCategory::Bev),
            bev("NISSAN", "King", 2014, 84),
            bev("TESLA", "King", 2021, 250),
        ];
        let stats = dashboard_stats(&records).unwrap();
        assert_eq!(stats.oldest_year, 2014);
        assert_eq!(stats.newest_year, 2021);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            bev("TESLA", "King", 2020, 200),
            phev("CHEVROLET", "Pierce", 2019, 38),
        ];
        let first = dashboard_stats(&records).unwrap();
        let second = dashboard_stats(&records).unwrap();
        assert_eq!(first, second);
    }
}
