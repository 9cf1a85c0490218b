//! Row limit controls for the rankings and county views.

use crate::state::AppState;
use dioxus::prelude::*;

/// Numeric inputs for how many makes and counties to display.
#[component]
pub fn LimitSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current_makes = (state.make_limit)();
    let current_counties = (state.county_limit)();

    let on_make_change = move |evt: Event<FormData>| {
        if let Ok(count) = evt.value().parse::<usize>() {
            state.make_limit.set(count.clamp(1, 50));
        }
    };

    let on_county_change = move |evt: Event<FormData>| {
        if let Ok(count) = evt.value().parse::<usize>() {
            state.county_limit.set(count.clamp(1, 50));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Makes: "
                input {
                    r#type: "number",
                    value: "{current_makes}",
                    min: "1",
                    max: "50",
                    style: "width: 60px;",
                    onchange: on_make_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "Counties: "
                input {
                    r#type: "number",
                    value: "{current_counties}",
                    min: "1",
                    max: "50",
                    style: "width: 60px;",
                    onchange: on_county_change,
                }
            }
        }
    }
}
