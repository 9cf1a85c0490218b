//! Console report: summary block plus tabled aggregate views.

use anyhow::Context;
use evp_model::record::parse_population_csv;
use log::info;
use num_format::{Locale, ToFormattedString};
use tabled::{settings::Style, Table, Tabled};

use crate::export::AggregateBundle;

#[derive(Tabled)]
struct MakeRow {
    #[tabled(rename = "Make")]
    make: String,
    #[tabled(rename = "Vehicles")]
    count: String,
    #[tabled(rename = "Share %")]
    percentage: i64,
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Model Year")]
    year: i32,
    #[tabled(rename = "Vehicles")]
    count: String,
    #[tabled(rename = "Growth %")]
    growth: i64,
}

#[derive(Tabled)]
struct CountyRow {
    #[tabled(rename = "County")]
    county: String,
    #[tabled(rename = "Vehicles")]
    count: String,
    #[tabled(rename = "BEV %")]
    bev_percentage: i64,
    #[tabled(rename = "Makes")]
    unique_makes: u64,
    #[tabled(rename = "Avg Range")]
    average_range: u64,
}

#[derive(Tabled)]
struct CountryRow {
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Vehicles")]
    total: String,
    #[tabled(rename = "BEV")]
    bev_count: String,
    #[tabled(rename = "PHEV")]
    phev_count: String,
    #[tabled(rename = "Avg Range")]
    average_range: String,
    #[tabled(rename = "Growth %")]
    growth: String,
    #[tabled(rename = "States")]
    states: usize,
}

fn fmt_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en)
}

fn print_table<T: Tabled>(title: &str, rows: Vec<T>) {
    println!("\n{title}");
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }
    println!("{}", Table::new(rows).with(Style::markdown()));
}

/// Load a population CSV and print the full console report.
pub fn run_report(csv_path: &str, make_limit: usize, county_limit: usize) -> anyhow::Result<()> {
    let csv_object = std::fs::read_to_string(csv_path)
        .with_context(|| format!("failed to read {csv_path}"))?;
    let records = parse_population_csv(&csv_object)
        .with_context(|| format!("failed to parse {csv_path}"))?;
    info!("loaded {} records from {}", records.len(), csv_path);

    let bundle = AggregateBundle::compute(&records, make_limit, county_limit)
        .context("aggregate computation failed")?;
    let stats = &bundle.stats;

    println!("EV Population Report");
    println!("====================");
    println!("Total vehicles:    {}", fmt_count(stats.total_vehicles));
    println!("Distinct makes:    {}", fmt_count(stats.total_makes));
    println!("Distinct models:   {}", fmt_count(stats.total_models));
    println!("Distinct counties: {}", fmt_count(stats.total_counties));
    println!("Average range:     {} mi", stats.average_range);
    println!("Model years:       {} - {}", stats.oldest_year, stats.newest_year);
    println!(
        "BEV / PHEV:        {} / {} ({}% BEV)",
        fmt_count(stats.bev_count),
        fmt_count(stats.phev_count),
        stats.bev_percentage
    );
    println!("YoY growth:        {}%", stats.yoy_growth);
    println!(
        "Top county:        {} ({} vehicles, {}%)",
        stats.top_county.name,
        fmt_count(stats.top_county.count),
        stats.top_county.percentage
    );

    print_table(
        "Top Makes",
        bundle
            .top_makes
            .iter()
            .map(|m| MakeRow {
                make: m.make.clone(),
                count: fmt_count(m.count),
                percentage: m.percentage,
            })
            .collect(),
    );

    print_table(
        "Yearly Trend",
        bundle
            .yearly_trend
            .iter()
            .map(|p| TrendRow {
                year: p.year,
                count: fmt_count(p.count),
                growth: p.growth,
            })
            .collect(),
    );

    print_table(
        "Counties",
        bundle
            .counties
            .iter()
            .map(|c| CountyRow {
                county: c.county.clone(),
                count: fmt_count(c.count),
                bev_percentage: c.bev_percentage,
                unique_makes: c.unique_makes,
                average_range: c.average_range,
            })
            .collect(),
    );

    print_table(
        "Countries",
        bundle
            .countries
            .iter()
            .map(|c| CountryRow {
                country: c.country.clone(),
                total: fmt_count(c.total),
                bev_count: fmt_count(c.bev_count),
                phev_count: fmt_count(c.phev_count),
                average_range: format!("{:.0}", c.average_range),
                growth: format!("{:.1}", c.growth * 100.0),
                states: c.states.len(),
            })
            .collect(),
    );

    println!("\nInsights ({})", bundle.insights.len());
    for insight in &bundle.insights {
        println!(
            "- [{:?}/{:?}] {}: {}",
            insight.category, insight.impact, insight.title, insight.narrative
        );
    }

    Ok(())
}
