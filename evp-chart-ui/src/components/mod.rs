//! Reusable Dioxus RSX components for EVP dashboard apps.

mod chart_container;
mod chart_header;
mod error_display;
mod insight_card;
mod insight_filter;
mod limit_selector;
mod loading_spinner;
mod stat_card;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use insight_card::InsightCard;
pub use insight_filter::InsightFilter;
pub use limit_selector::LimitSelector;
pub use loading_spinner::LoadingSpinner;
pub use stat_card::StatCard;
