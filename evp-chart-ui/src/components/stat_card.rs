//! Headline stat card for the dashboard summary row.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    /// Short label, e.g. "Total Vehicles"
    pub label: String,
    /// Pre-formatted value, e.g. "1,234" or "72%"
    pub value: String,
    /// Optional secondary line under the value
    #[props(default = String::new())]
    pub detail: String,
}

/// A single headline-figure card.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 140px; padding: 12px 16px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 6px;",
            p {
                style: "margin: 0; font-size: 12px; color: #666; text-transform: uppercase;",
                "{props.label}"
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 22px; font-weight: bold;",
                "{props.value}"
            }
            if !props.detail.is_empty() {
                p {
                    style: "margin: 2px 0 0 0; font-size: 12px; color: #888;",
                    "{props.detail}"
                }
            }
        }
    }
}
