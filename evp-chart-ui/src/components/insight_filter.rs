//! Category filter for the insight panel.

use crate::state::AppState;
use dioxus::prelude::*;
use evp_insights::InsightCategory;

/// Dropdown selector for insight category filtering.
#[component]
pub fn InsightFilter() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.insight_filter)();

    let on_change = move |evt: Event<FormData>| {
        state.insight_filter.set(evt.value());
    };

    rsx! {
        label {
            style: "font-weight: bold; font-size: 13px;",
            "Category: "
            select {
                onchange: on_change,
                option {
                    value: "all",
                    selected: current == "all",
                    "All"
                }
                for category in InsightCategory::ALL {
                    option {
                        value: "{category.as_str()}",
                        selected: current == category.as_str(),
                        "{category.as_str()}"
                    }
                }
            }
        }
    }
}
