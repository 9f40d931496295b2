use dioxus::prelude::*;

use crate::features::auth::element_ids;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingOverlayProps {
    pub visible: bool,
    pub message: String,
}

#[component]
pub fn LoadingOverlay(props: LoadingOverlayProps) -> Element {
    rsx! {
        div {
            id: element_ids::LOADING_OVERLAY,
            class: if props.visible { "loading-overlay" } else { "loading-overlay hidden" },
            div {
                class: "loading-indicator",
                div { class: "spinner" }
                p { "{props.message}" }
            }
        }
    }
}
