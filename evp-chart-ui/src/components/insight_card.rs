//! Card rendering one generated insight.

use dioxus::prelude::*;
use evp_insights::{Impact, Insight};

#[derive(Props, Clone, PartialEq)]
pub struct InsightCardProps {
    pub insight: Insight,
}

/// One narrative finding with its category, impact and direction tags.
#[component]
pub fn InsightCard(props: InsightCardProps) -> Element {
    let insight = &props.insight;
    let impact_color = match insight.impact {
        Impact::High => "#C62828",
        Impact::Medium => "#EF6C00",
    };

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF; border: 1px solid #E0E0E0; border-left: 4px solid {impact_color}; border-radius: 4px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h4 {
                    style: "margin: 0; font-size: 14px;",
                    "{insight.direction.arrow()} {insight.title}"
                }
                span {
                    style: "font-size: 11px; color: #888;",
                    "{insight.category.as_str()} | {insight.impact.as_str()} impact | {insight.confidence}"
                }
            }
            p {
                style: "margin: 6px 0 0 0; font-size: 13px; color: #444;",
                "{insight.narrative}"
            }
        }
    }
}
