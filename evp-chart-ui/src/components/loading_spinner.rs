//! Loading indicator shown while the registration extract is parsed.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Status line under the spinner; defaults to the dataset-parse message.
    #[props(default = String::from("Loading registration data..."))]
    pub message: String,
}

/// Centered loading indicator with a pulsing dot row.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: center; align-items: center; padding: 48px; color: #666;",
            div {
                style: "font-size: 24px; letter-spacing: 4px; color: #2196F3;",
                "\u{25cf} \u{25cf} \u{25cf}"
            }
            p {
                style: "margin: 12px 0 0 0; font-size: 13px;",
                "{props.message}"
            }
        }
    }
}
