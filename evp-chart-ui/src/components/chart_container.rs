//! Card-styled container div that D3 renders into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the matching `js_bridge::render_*` call targets.
    pub id: String,
    /// Whether the underlying data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 360)]
    pub min_height: u32,
}

/// A bordered card wrapping one D3 chart or table.
///
/// The inner div carries the id; D3 owns everything below it, so Dioxus
/// never writes inside.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; padding: 8px; background: #FFF; border: 1px solid #E0E0E0; border-radius: 6px; box-sizing: border-box;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666; font-size: 13px;",
                    "Rendering chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
