//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;

/// Shared application state for the EVP dashboard apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// How many makes to show in the rankings ("10", "15", ...)
    pub make_limit: Signal<usize>,
    /// How many counties to show in the analysis table
    pub county_limit: Signal<usize>,
    /// Insight category filter ("all", "trend", "market", ...)
    pub insight_filter: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            make_limit: Signal::new(10),
            county_limit: Signal::new(15),
            insight_filter: Signal::new("all".to_string()),
        }
    }
}
