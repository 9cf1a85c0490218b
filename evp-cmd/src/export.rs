//! JSON export of the full aggregate bundle.

use anyhow::Context;
use evp_insights::{generate_insights, Insight, InsightInputs};
use evp_model::record::{parse_population_csv, VehicleRecord};
use evp_stats::country::{country_aggregation, CountryStats};
use evp_stats::county::{county_analysis, CountyStats, DEFAULT_COUNTY_LIMIT};
use evp_stats::distribution::{ev_type_distribution, range_distribution, RangeBin, TypeShare};
use evp_stats::rankings::{top_makes, top_models, MakeShare, ModelCount};
use evp_stats::rankings::{DEFAULT_MAKE_LIMIT, DEFAULT_MODEL_LIMIT};
use evp_stats::summary::{dashboard_stats, DashboardStats};
use evp_stats::trend::{yearly_trend, YearCount};
use log::info;
use serde::Serialize;

/// Every derived view, computed once from the same record set.
///
/// The insight list is derived from the other members, so it is computed
/// last; the record-set aggregates themselves are order-independent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateBundle {
    pub stats: DashboardStats,
    pub top_makes: Vec<MakeShare>,
    pub top_models: Vec<ModelCount>,
    pub yearly_trend: Vec<YearCount>,
    pub ev_types: Vec<TypeShare>,
    pub range_bins: Vec<RangeBin>,
    pub counties: Vec<CountyStats>,
    pub countries: Vec<CountryStats>,
    pub insights: Vec<Insight>,
}

impl AggregateBundle {
    /// Compute all seven derived views plus insights from a record slice.
    pub fn compute(
        records: &[VehicleRecord],
        make_limit: usize,
        county_limit: usize,
    ) -> Result<Self, evp_stats::StatsError> {
        let stats = dashboard_stats(records)?;
        let top_makes = top_makes(records, make_limit);
        let top_models = top_models(records, DEFAULT_MODEL_LIMIT);
        let yearly_trend = yearly_trend(records);
        let ev_types = ev_type_distribution(records);
        let range_bins = range_distribution(records);
        let counties = county_analysis(records, county_limit);
        let countries = country_aggregation(records);
        let insights = generate_insights(&InsightInputs {
            stats: &stats,
            top_makes: &top_makes,
            trend: &yearly_trend,
            range_bins: &range_bins,
        });
        Ok(AggregateBundle {
            stats,
            top_makes,
            top_models,
            yearly_trend,
            ev_types,
            range_bins,
            counties,
            countries,
            insights,
        })
    }
}

/// Load a population CSV and write the aggregate bundle as pretty JSON to
/// `out`, or stdout when `out` is `None`.
pub fn run_export(csv_path: &str, out: Option<&str>) -> anyhow::Result<()> {
    let csv_object = std::fs::read_to_string(csv_path)
        .with_context(|| format!("failed to read {csv_path}"))?;
    let records = parse_population_csv(&csv_object)
        .with_context(|| format!("failed to parse {csv_path}"))?;
    let bundle = AggregateBundle::compute(&records, DEFAULT_MAKE_LIMIT, DEFAULT_COUNTY_LIMIT)
        .context("aggregate computation failed")?;
    let json = serde_json::to_string_pretty(&bundle)?;
    match out {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("failed to write {path}"))?;
            info!("wrote aggregate bundle to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}
