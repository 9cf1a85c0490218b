//! Threshold-triggered narrative findings over the aggregate outputs.
//!
//! This is a fixed, ordered table of (predicate, formatter) rules, not a
//! statistical model. Each rule reads the already-computed aggregates
//! (never raw records), fires independently when its condition holds, and
//! carries static confidence/impact metadata. Output order is table order;
//! no rule suppresses another.

use evp_stats::distribution::{RangeBin, LONG_RANGE_BIN};
use evp_stats::rankings::MakeShare;
use evp_stats::summary::DashboardStats;
use evp_stats::trend::YearCount;
use serde::Serialize;

/// Growth above this percent reads as "rapid acceleration".
const RAPID_GROWTH_PCT: i64 = 20;
/// Growth above this percent (and at most [`RAPID_GROWTH_PCT`]) reads as
/// "steady growth".
const STEADY_GROWTH_PCT: i64 = 10;
/// Mean range above this many miles triggers the technology finding.
const LONG_RANGE_MILES: u64 = 200;
/// Top-county share above this percent triggers the geography finding.
const COUNTY_HUB_SHARE_PCT: i64 = 30;
/// BEV share above this percent triggers the preference finding.
const BEV_PREFERENCE_PCT: i64 = 70;
/// 301+ bin share above this percent triggers the long-range finding.
const LONG_RANGE_BIN_SHARE_PCT: i64 = 20;

/// Category tag for an emitted insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Trend,
    Market,
    Technology,
    Geography,
    Preference,
    Consumer,
}

impl InsightCategory {
    /// Every category, in panel filter order.
    pub const ALL: [InsightCategory; 6] = [
        InsightCategory::Trend,
        InsightCategory::Market,
        InsightCategory::Technology,
        InsightCategory::Geography,
        InsightCategory::Preference,
        InsightCategory::Consumer,
    ];

    /// Lowercase tag, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Trend => "trend",
            InsightCategory::Market => "market",
            InsightCategory::Technology => "technology",
            InsightCategory::Geography => "geography",
            InsightCategory::Preference => "preference",
            InsightCategory::Consumer => "consumer",
        }
    }
}

/// Static impact label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Impact {
    High,
    Medium,
}

/// Direction tag rendered as an arrow in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stable,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
        }
    }
}

impl Direction {
    /// Arrow glyph for panel rendering.
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "\u{2191}",
            Direction::Down => "\u{2193}",
            Direction::Stable => "\u{2192}",
        }
    }
}

/// One narrative finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub title: String,
    pub narrative: String,
    /// Static, illustrative confidence label rather than a computed figure.
    pub confidence: &'static str,
    pub impact: Impact,
    pub direction: Direction,
}

/// Borrowed view of the aggregate outputs the rules read.
pub struct InsightInputs<'a> {
    pub stats: &'a DashboardStats,
    pub top_makes: &'a [MakeShare],
    pub trend: &'a [YearCount],
    pub range_bins: &'a [RangeBin],
}

type Rule = fn(&InsightInputs<'_>) -> Option<Insight>;

/// The rule table, in emission order.
const RULES: [Rule; 6] = [
    growth_rule,
    market_rule,
    technology_rule,
    geography_rule,
    preference_rule,
    long_range_rule,
];

/// Evaluate every rule in order against the aggregate outputs.
pub fn generate_insights(inputs: &InsightInputs<'_>) -> Vec<Insight> {
    let insights: Vec<Insight> = RULES.iter().filter_map(|rule| rule(inputs)).collect();
    log::debug!("{} of {} insight rules fired", insights.len(), RULES.len());
    insights
}

fn growth_rule(inputs: &InsightInputs<'_>) -> Option<Insight> {
    if inputs.trend.len() < 2 {
        return None;
    }
    let latest = inputs.trend.last()?;
    let growth = latest.growth;
    let label = if growth > RAPID_GROWTH_PCT {
        "rapid acceleration"
    } else if growth > STEADY_GROWTH_PCT {
        "steady growth"
    } else {
        "moderate growth"
    };
    Some(Insight {
        category: InsightCategory::Trend,
        title: format!("{} detected", label.to_uppercase()),
        narrative: format!(
            "EV registrations changed by {}% in {}, indicating {}.",
            growth, latest.year, label
        ),
        confidence: "92%",
        impact: Impact::High,
        direction: if growth > 0 { Direction::Up } else { Direction::Down },
    })
}

fn market_rule(inputs: &InsightInputs<'_>) -> Option<Insight> {
    let leader = inputs.top_makes.first()?;
    Some(Insight {
        category: InsightCategory::Market,
        title: format!("{} leads the market", leader.make.to_uppercase()),
        narrative: format!(
            "{} holds {}% market share with {} vehicles, indicating strong brand preference.",
            leader.make, leader.percentage, leader.count
        ),
        confidence: "88%",
        impact: Impact::Medium,
        direction: Direction::Stable,
    })
}

fn technology_rule(inputs: &InsightInputs<'_>) -> Option<Insight> {
    let average_range = inputs.stats.average_range;
    if average_range <= LONG_RANGE_MILES {
        return None;
    }
    Some(Insight {
        category: InsightCategory::Technology,
        title: "Range improvements".to_string(),
        narrative: format!(
            "Average EV range of {} miles reflects significant battery advancements.",
            average_range
        ),
        confidence: "85%",
        impact: Impact::High,
        direction: Direction::Up,
    })
}

fn geography_rule(inputs: &InsightInputs<'_>) -> Option<Insight> {
    let top_county = &inputs.stats.top_county;
    if top_county.percentage <= COUNTY_HUB_SHARE_PCT {
        return None;
    }
    Some(Insight {
        category: InsightCategory::Geography,
        title: format!("{} hub", top_county.name.to_uppercase()),
        narrative: format!(
            "{} county accounts for {}% of all registrations ({} vehicles).",
            top_county.name, top_county.percentage, top_county.count
        ),
        confidence: "90%",
        impact: Impact::Medium,
        direction: Direction::Stable,
    })
}

fn preference_rule(inputs: &InsightInputs<'_>) -> Option<Insight> {
    let bev_percentage = inputs.stats.bev_percentage;
    if bev_percentage <= BEV_PREFERENCE_PCT {
        return None;
    }
    Some(Insight {
        category: InsightCategory::Preference,
        title: "BEV preference strong".to_string(),
        narrative: format!(
            "BEVs represent {}% of the fleet, suggesting confidence in charging infrastructure.",
            bev_percentage
        ),
        confidence: "87%",
        impact: Impact::High,
        direction: Direction::Up,
    })
}

fn long_range_rule(inputs: &InsightInputs<'_>) -> Option<Insight> {
    let bin = inputs
        .range_bins
        .iter()
        .find(|bin| bin.range == LONG_RANGE_BIN)?;
    if bin.percentage <= LONG_RANGE_BIN_SHARE_PCT {
        return None;
    }
    Some(Insight {
        category: InsightCategory::Consumer,
        title: "Long-range adoption".to_string(),
        narrative: format!(
            "{}% of EVs exceed 300 miles of range, a preference for longer ranges despite cost.",
            bin.percentage
        ),
        confidence: "83%",
        impact: Impact::Medium,
        direction: Direction::Up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use evp_stats::summary::TopCounty;

    fn stats() -> DashboardStats {
        DashboardStats {
            total_vehicles: 100,
            total_makes: 3,
            total_models: 3,
            total_counties: 2,
            average_range: 180,
            newest_year: 2021,
            oldest_year: 2014,
            bev_count: 60,
            phev_count: 40,
            bev_percentage: 60,
            yoy_growth: 12,
            top_county: TopCounty {
                name: "King".to_string(),
                count: 25,
                percentage: 25,
            },
        }
    }

    fn makes() -> Vec<MakeShare> {
        vec![
            MakeShare { make: "Tesla".to_string(), count: 60, percentage: 60 },
            MakeShare { make: "Nissan".to_string(), count: 25, percentage: 25 },
            MakeShare { make: "Chevrolet".to_string(), count: 15, percentage: 15 },
        ]
    }

    fn trend() -> Vec<YearCount> {
        vec![
            YearCount { year: 2019, count: 40, growth: 0 },
            YearCount { year: 2020, count: 60, growth: 50 },
        ]
    }

    fn bins(long_range_pct: i64) -> Vec<RangeBin> {
        vec![
            RangeBin { range: "0-50", count: 10, percentage: 10 },
            RangeBin { range: "301+", count: 10, percentage: long_range_pct },
        ]
    }

    #[test]
    fn test_market_rule_fires_with_leader_share() {
        let stats = stats();
        let makes = makes();
        let trend = trend();
        let bins = bins(10);
        let inputs = InsightInputs {
            stats: &stats,
            top_makes: &makes,
            trend: &trend,
            range_bins: &bins,
        };
        let insights = generate_insights(&inputs);
        let market = insights
            .iter()
            .find(|i| i.category == InsightCategory::Market)
            .unwrap();
        assert!(market.narrative.contains("Tesla"));
        assert!(market.narrative.contains("60%"));
    }

    #[test]
    fn test_growth_rule_labels() {
        let stats = stats();
        let makes = makes();
        let bins = bins(10);
        let rapid = vec![
            YearCount { year: 2019, count: 10, growth: 0 },
            YearCount { year: 2020, count: 13, growth: 30 },
        ];
        let inputs = InsightInputs {
            stats: &stats,
            top_makes: &makes,
            trend: &rapid,
            range_bins: &bins,
        };
        let insight = growth_rule(&inputs).unwrap();
        assert!(insight.title.contains("RAPID ACCELERATION"));
        assert_eq!(insight.direction, Direction::Up);

        let moderate = vec![
            YearCount { year: 2019, count: 10, growth: 0 },
            YearCount { year: 2020, count: 10, growth: 0 },
        ];
        let inputs = InsightInputs {
            stats: &stats,
            top_makes: &makes,
            trend: &moderate,
            range_bins: &bins,
        };
        let insight = growth_rule(&inputs).unwrap();
        assert!(insight.title.contains("MODERATE GROWTH"));
        assert_eq!(insight.direction, Direction::Down);
    }

    #[test]
    fn test_growth_rule_needs_two_points() {
        let stats = stats();
        let makes = makes();
        let bins = bins(10);
        let single = vec![YearCount { year: 2020, count: 10, growth: 0 }];
        let inputs = InsightInputs {
            stats: &stats,
            top_makes: &makes,
            trend: &single,
            range_bins: &bins,
        };
        assert!(growth_rule(&inputs).is_none());
    }

    #[test]
    fn test_threshold_rules_gate_correctly() {
        let mut stats = stats();
        stats.average_range = 200; // at the threshold: must not fire
        stats.bev_percentage = 70;
        stats.top_county.percentage = 30;
        let makes = makes();
        let trend = trend();
        let at_threshold = bins(20);
        let inputs = InsightInputs {
            stats: &stats,
            top_makes: &makes,
            trend: &trend,
            range_bins: &at_threshold,
        };
        assert!(technology_rule(&inputs).is_none());
        assert!(preference_rule(&inputs).is_none());
        assert!(geography_rule(&inputs).is_none());
        assert!(long_range_rule(&inputs).is_none());

        stats.average_range = 201;
        stats.bev_percentage = 71;
        stats.top_county.percentage = 31;
        let above_threshold = bins(21);
        let inputs = InsightInputs {
            stats: &stats,
            top_makes: &makes,
            trend: &trend,
            range_bins: &above_threshold,
        };
        assert!(technology_rule(&inputs).is_some());
        assert!(preference_rule(&inputs).is_some());
        assert!(geography_rule(&inputs).is_some());
        assert!(long_range_rule(&inputs).is_some());
    }

    #[test]
    fn test_emission_order_is_table_order() {
        let mut stats = stats();
        stats.average_range = 250;
        stats.bev_percentage = 80;
        stats.top_county.percentage = 40;
        let makes = makes();
        let trend = trend();
        let bins = bins(25);
        let inputs = InsightInputs {
            stats: &stats,
            top_makes: &makes,
            trend: &trend,
            range_bins: &bins,
        };
        let insights = generate_insights(&inputs);
        let categories: Vec<InsightCategory> = insights.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![
                InsightCategory::Trend,
                InsightCategory::Market,
                InsightCategory::Technology,
                InsightCategory::Geography,
                InsightCategory::Preference,
                InsightCategory::Consumer,
            ]
        );
    }

    #[test]
    fn test_no_rules_fire_on_quiet_inputs() {
        let stats = stats();
        let trend: Vec<YearCount> = Vec::new();
        let makes: Vec<MakeShare> = Vec::new();
        let bins = bins(0);
        let inputs = InsightInputs {
            stats: &stats,
            top_makes: &makes,
            trend: &trend,
            range_bins: &bins,
        };
        // stats() has mid-level figures: nothing crosses a threshold
        assert!(generate_insights(&inputs).is_empty());
    }
}
