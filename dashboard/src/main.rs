//! Electric Vehicle Population Dashboard
//!
//! Single-page Dioxus app over the Washington EV registration extract.
//!
//! Data flow:
//! 1. `include_str!` (via `evp_model::record::CSV_SAMPLE`) embeds the
//!    registration CSV into the WASM binary.
//! 2. On mount: parse the CSV into `VehicleRecord`s and init D3 scripts.
//! 3. On limit/filter change: recompute the derived views and re-render
//!    the D3 charts and tables.

use dioxus::prelude::*;
use evp_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, InsightCard, InsightFilter, LimitSelector,
    LoadingSpinner, StatCard,
};
use evp_chart_ui::js_bridge;
use evp_chart_ui::state::AppState;
use evp_insights::{generate_insights, Insight, InsightInputs};
use evp_model::record::{parse_population_csv, VehicleRecord, CSV_SAMPLE};
use evp_stats::country::country_aggregation;
use evp_stats::county::county_analysis;
use evp_stats::distribution::{ev_type_distribution, range_distribution};
use evp_stats::rankings::{top_makes, top_models, DEFAULT_MODEL_LIMIT};
use evp_stats::summary::{dashboard_stats, DashboardStats};
use evp_stats::trend::yearly_trend;
use num_format::{Locale, ToFormattedString};

const MAKES_CHART_ID: &str = "makes-chart";
const MODELS_CHART_ID: &str = "models-chart";
const TREND_CHART_ID: &str = "trend-chart";
const TYPES_CHART_ID: &str = "types-chart";
const RANGE_CHART_ID: &str = "range-chart";
const COUNTY_TABLE_ID: &str = "county-table";
const COUNTRY_TABLE_ID: &str = "country-table";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

fn format_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut all_records: Signal<Vec<VehicleRecord>> = use_signal(Vec::new);
    let mut stats: Signal<Option<DashboardStats>> = use_signal(|| None);
    let mut insights: Signal<Vec<Insight>> = use_signal(Vec::new);

    // ─── Effect 1: Parse CSV once on mount ───
    use_effect(move || {
        match parse_population_csv(CSV_SAMPLE) {
            Ok(records) if !records.is_empty() => {
                log::info!("dashboard loaded {} vehicle records", records.len());
                all_records.set(records);
                state.loading.set(false);
            }
            Ok(_) => {
                state.error_msg.set(Some("No vehicle records available.".to_string()));
                state.loading.set(false);
            }
            Err(e) => {
                state.error_msg.set(Some(format!("Failed to parse registration data: {e}")));
                state.loading.set(false);
            }
        }

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Recompute views and render charts ───
    // Re-runs whenever loading, make_limit, or county_limit change.
    use_effect(move || {
        let loading = (state.loading)();
        let make_limit = (state.make_limit)();
        let county_limit = (state.county_limit)();

        if loading {
            return;
        }

        // Clone data out of the signal immediately so the read borrow
        // doesn't interfere with Dioxus signal tracking.
        let records: Vec<VehicleRecord> = all_records.read().clone();
        if records.is_empty() {
            return;
        }

        let summary = match dashboard_stats(&records) {
            Ok(s) => s,
            Err(e) => {
                state.error_msg.set(Some(e.to_string()));
                return;
            }
        };
        let makes = top_makes(&records, make_limit);
        let models = top_models(&records, DEFAULT_MODEL_LIMIT);
        let trend = yearly_trend(&records);
        let types = ev_type_distribution(&records);
        let bins = range_distribution(&records);
        let counties = county_analysis(&records, county_limit);
        let countries = country_aggregation(&records);

        let findings = generate_insights(&InsightInputs {
            stats: &summary,
            top_makes: &makes,
            trend: &trend,
            range_bins: &bins,
        });

        render_makes_chart(&makes);
        render_models_chart(&models);
        render_trend_chart(&trend);
        render_types_chart(&types);
        render_range_chart(&bins);
        render_county_table(&counties);
        render_country_table(&countries);

        stats.set(Some(summary));
        insights.set(findings);
    });

    let filter = (state.insight_filter)();
    let visible_insights: Vec<Insight> = insights
        .read()
        .iter()
        .filter(|i| filter == "all" || i.category.as_str() == filter)
        .cloned()
        .collect();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 8px 0;",
                "Electric Vehicle Population Dashboard"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                if let Some(s) = stats.read().as_ref() {
                    StatsRow { stats: s.clone() }
                }

                LimitSelector {}

                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-top: 16px;",

                    div {
                        ChartHeader {
                            title: "Top Makes".to_string(),
                            subtitle: "Registered vehicles by manufacturer".to_string(),
                        }
                        ChartContainer { id: MAKES_CHART_ID.to_string() }
                    }
                    div {
                        ChartHeader {
                            title: "Top Models".to_string(),
                            subtitle: "Registered vehicles by make and model".to_string(),
                        }
                        ChartContainer { id: MODELS_CHART_ID.to_string() }
                    }
                    div {
                        ChartHeader {
                            title: "Adoption Trend".to_string(),
                            subtitle: "Registrations by model year (2011 onward)".to_string(),
                        }
                        ChartContainer { id: TREND_CHART_ID.to_string() }
                    }
                    div {
                        ChartHeader {
                            title: "Vehicle Types".to_string(),
                            subtitle: "BEV vs PHEV share".to_string(),
                        }
                        ChartContainer { id: TYPES_CHART_ID.to_string(), min_height: 280 }
                    }
                    div {
                        ChartHeader {
                            title: "Electric Range".to_string(),
                            subtitle: "Share of vehicles with a known range, by mileage band".to_string(),
                        }
                        ChartContainer { id: RANGE_CHART_ID.to_string(), min_height: 280 }
                    }
                }

                ChartHeader {
                    title: "County Analysis".to_string(),
                    subtitle: "Top counties by registered vehicles".to_string(),
                }
                ChartContainer { id: COUNTY_TABLE_ID.to_string(), min_height: 200 }

                ChartHeader {
                    title: "Country Aggregation".to_string(),
                    subtitle: "Registrations grouped by country of the registering state".to_string(),
                }
                ChartContainer { id: COUNTRY_TABLE_ID.to_string(), min_height: 120 }

                div {
                    style: "margin-top: 16px; display: flex; justify-content: space-between; align-items: center;",
                    h3 {
                        style: "margin: 0; font-size: 16px;",
                        "Insights"
                    }
                    InsightFilter {}
                }
                if visible_insights.is_empty() {
                    p {
                        style: "font-size: 13px; color: #888;",
                        "No insights for this category."
                    }
                }
                for insight in visible_insights {
                    InsightCard { insight }
                }
            }
        }
    }
}

/// Headline stat cards across the top of the dashboard.
#[component]
fn StatsRow(stats: DashboardStats) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap;",
            StatCard {
                label: "Total Vehicles".to_string(),
                value: format_count(stats.total_vehicles),
                detail: format!("{} makes, {} models", stats.total_makes, stats.total_models),
            }
            StatCard {
                label: "BEV Share".to_string(),
                value: format!("{}%", stats.bev_percentage),
                detail: format!("{} BEV / {} PHEV", format_count(stats.bev_count), format_count(stats.phev_count)),
            }
            StatCard {
                label: "Average Range".to_string(),
                value: format!("{} mi", stats.average_range),
                detail: format!("model years {} to {}", stats.oldest_year, stats.newest_year),
            }
            StatCard {
                label: "YoY Growth".to_string(),
                value: format!("{}%", stats.yoy_growth),
                detail: "latest model year vs prior".to_string(),
            }
            StatCard {
                label: "Top County".to_string(),
                value: stats.top_county.name.clone(),
                detail: format!("{} vehicles ({}%)", format_count(stats.top_county.count), stats.top_county.percentage),
            }
        }
    }
}

fn render_makes_chart(makes: &[evp_stats::rankings::MakeShare]) {
    let data: Vec<serde_json::Value> = makes
        .iter()
        .map(|m| {
            serde_json::json!({
                "label": m.make,
                "value": m.count,
                "detail": format!("{}%", m.percentage),
            })
        })
        .collect();
    let config = serde_json::json!({
        "color": "#2196F3",
        "valueLabel": "vehicles",
    });
    js_bridge::render_bar_chart(
        MAKES_CHART_ID,
        &serde_json::to_string(&data).unwrap_or_default(),
        &config.to_string(),
    );
}

fn render_models_chart(models: &[evp_stats::rankings::ModelCount]) {
    let data: Vec<serde_json::Value> = models
        .iter()
        .map(|m| {
            serde_json::json!({
                "label": m.model,
                "value": m.count,
            })
        })
        .collect();
    let config = serde_json::json!({
        "color": "#7E57C2",
        "valueLabel": "vehicles",
    });
    js_bridge::render_bar_chart(
        MODELS_CHART_ID,
        &serde_json::to_string(&data).unwrap_or_default(),
        &config.to_string(),
    );
}

fn render_trend_chart(trend: &[evp_stats::trend::YearCount]) {
    let data: Vec<serde_json::Value> = trend
        .iter()
        .map(|p| {
            serde_json::json!({
                "year": p.year,
                "value": p.count,
                "growth": p.growth,
            })
        })
        .collect();
    let config = serde_json::json!({
        "color": "#4CAF50",
        "valueLabel": "vehicles",
    });
    js_bridge::render_line_chart(
        TREND_CHART_ID,
        &serde_json::to_string(&data).unwrap_or_default(),
        &config.to_string(),
    );
}

fn render_types_chart(types: &[evp_stats::distribution::TypeShare]) {
    let data: Vec<serde_json::Value> = types
        .iter()
        .map(|t| {
            serde_json::json!({
                "label": t.label,
                "value": t.count,
                "percentage": t.percentage,
            })
        })
        .collect();
    let config = serde_json::json!({
        "colors": ["#2196F3", "#FF9800", "#9E9E9E"],
    });
    js_bridge::render_donut_chart(
        TYPES_CHART_ID,
        &serde_json::to_string(&data).unwrap_or_default(),
        &config.to_string(),
    );
}

fn render_range_chart(bins: &[evp_stats::distribution::RangeBin]) {
    let data: Vec<serde_json::Value> = bins
        .iter()
        .map(|b| {
            serde_json::json!({
                "label": b.range,
                "value": b.count,
                "percentage": b.percentage,
            })
        })
        .collect();
    let config = serde_json::json!({
        "colors": ["#E3F2FD", "#90CAF9", "#42A5F5", "#1E88E5", "#1565C0", "#0D47A1", "#002171"],
    });
    js_bridge::render_donut_chart(
        RANGE_CHART_ID,
        &serde_json::to_string(&data).unwrap_or_default(),
        &config.to_string(),
    );
}

fn render_county_table(counties: &[evp_stats::county::CountyStats]) {
    let data: Vec<serde_json::Value> = counties
        .iter()
        .map(|c| {
            serde_json::json!({
                "county": c.county,
                "count": c.count,
                "bev_percentage": c.bev_percentage,
                "unique_makes": c.unique_makes,
                "average_range": c.average_range,
            })
        })
        .collect();
    let config = serde_json::json!({
        "columns": [
            { "key": "county", "label": "County" },
            { "key": "count", "label": "Vehicles" },
            { "key": "bev_percentage", "label": "BEV %" },
            { "key": "unique_makes", "label": "Makes" },
            { "key": "average_range", "label": "Avg Range (mi)" },
        ],
    });
    js_bridge::render_data_table(
        COUNTY_TABLE_ID,
        &serde_json::to_string(&data).unwrap_or_default(),
        &config.to_string(),
    );
}

fn render_country_table(countries: &[evp_stats::country::CountryStats]) {
    let data: Vec<serde_json::Value> = countries
        .iter()
        .map(|c| {
            serde_json::json!({
                "country": c.country,
                "total": c.total,
                "bev_count": c.bev_count,
                "phev_count": c.phev_count,
                "average_range": format!("{:.0}", c.average_range),
                "growth": format!("{:.1}%", c.growth * 100.0),
                "states": c.states.len(),
            })
        })
        .collect();
    let config = serde_json::json!({
        "columns": [
            { "key": "country", "label": "Country" },
            { "key": "total", "label": "Vehicles" },
            { "key": "bev_count", "label": "BEV" },
            { "key": "phev_count", "label": "PHEV" },
            { "key": "average_range", "label": "Avg Range (mi)" },
            { "key": "growth", "label": "Growth" },
            { "key": "states", "label": "States" },
        ],
    });
    js_bridge::render_data_table(
        COUNTRY_TABLE_ID,
        &serde_json::to_string(&data).unwrap_or_default(),
        &config.to_string(),
    );
}
