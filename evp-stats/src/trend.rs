//! Per-year registration counts with consecutive-year growth.

use std::collections::BTreeMap;

use evp_model::record::VehicleRecord;
use evp_utils::math;
use serde::Serialize;

use crate::TREND_FLOOR_YEAR;

/// One chronological trend point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
    /// Integer percent growth relative to the immediately preceding point;
    /// 0 for the first point (no baseline).
    pub growth: i64,
}

/// Count registrations per model year above the trend floor, ascending by
/// year, with consecutive growth rates.
///
/// A preceding count of 0 cannot occur (years only appear once counted),
/// but the growth helper guards the division anyway.
pub fn yearly_trend(records: &[VehicleRecord]) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for record in records {
        if let Some(year) = record.model_year {
            if year > TREND_FLOOR_YEAR {
                *counts.entry(year).or_insert(0) += 1;
            }
        }
    }

    let mut trend = Vec::with_capacity(counts.len());
    let mut previous: Option<u64> = None;
    for (year, count) in counts {
        let growth = match previous {
            Some(prev) => math::growth_percent(count, prev),
            None => 0,
        };
        trend.push(YearCount { year, count, growth });
        previous = Some(count);
    }
    trend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bev;

    fn records_for_years(year_counts: &[(i32, usize)]) -> Vec<evp_model::record::VehicleRecord> {
        let mut records = Vec::new();
        for &(year, count) in year_counts {
            for _ in 0..count {
                records.push(bev("TESLA", "King", year, 200));
            }
        }
        records
    }

    #[test]
    fn test_growth_walk() {
        // {2019:5, 2020:8, 2021:3}
        let records = records_for_years(&[(2019, 5), (2020, 8), (2021, 3)]);
        let trend = yearly_trend(&records);
        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0], YearCount { year: 2019, count: 5, growth: 0 });
        assert_eq!(trend[1], YearCount { year: 2020, count: 8, growth: 60 });
        // (3-8)/8*100 = -62.5, rounded JS-style
        assert_eq!(trend[2], YearCount { year: 2021, count: 3, growth: -62 });
    }

    #[test]
    fn test_first_point_growth_is_zero() {
        let records = records_for_years(&[(2015, 4)]);
        let trend = yearly_trend(&records);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].growth, 0);
    }

    #[test]
    fn test_floor_year_excluded() {
        let records = records_for_years(&[(2009, 3), (2010, 3), (2011, 3)]);
        let trend = yearly_trend(&records);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].year, 2011);
    }

    #[test]
    fn test_unknown_years_excluded() {
        let mut records = records_for_years(&[(2020, 2)]);
        let mut unknown = bev("TESLA", "King", 2020, 200);
        unknown.model_year = None;
        records.push(unknown);
        let trend = yearly_trend(&records);
        assert_eq!(trend[0].count, 2);
    }

    #[test]
    fn test_empty_records_yield_empty_trend() {
        assert!(yearly_trend(&[]).is_empty());
    }

    #[test]
    fn test_counts_sum_to_qualifying_records() {
        let records = records_for_years(&[(2018, 2), (2019, 3), (2021, 4)]);
        let trend = yearly_trend(&records);
        let total: u64 = trend.iter().map(|p| p.count).sum();
        assert_eq!(total, 9);
    }
}
