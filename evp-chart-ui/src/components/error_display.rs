//! Error banner for dataset load and aggregation failures.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Short heading above the detail line.
    #[props(default = String::from("Data error"))]
    pub title: String,
    pub message: String,
}

/// Banner shown when the registration data cannot be loaded or summarized.
///
/// The dashboard keeps rendering whatever views it already has; this banner
/// sits above them rather than replacing the page.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FDECEA; border-left: 4px solid #C62828; border-radius: 4px;",
            p {
                style: "margin: 0; font-size: 13px; font-weight: bold; color: #C62828;",
                "{props.title}"
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 13px; color: #444;",
                "{props.message}"
            }
        }
    }
}
