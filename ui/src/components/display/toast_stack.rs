use dioxus::prelude::*;

use crate::features::auth::{element_ids, OverlayEvent, ToastNotification};
use crate::utils::validation::toast_class;

#[derive(Props, PartialEq, Clone)]
pub struct ToastStackProps {
    pub toasts: Vec<ToastNotification>,
    pub dispatch: EventHandler<OverlayEvent>,
}

#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    let dispatch = props.dispatch;

    rsx! {
        div {
            id: element_ids::TOAST_CONTAINER,
            class: "fixed top-6 right-6 z-50 space-y-3",
            for toast in props.toasts {
                div {
                    key: "{toast.id}",
                    class: toast_class(&toast),
                    onclick: move |_| dispatch.call(OverlayEvent::DismissToast(toast.id)),
                    div {
                        class: "flex items-center",
                        span {
                            class: "material-symbols-outlined mr-3 text-xl",
                            {toast.severity.icon()}
                        }
                        span {
                            class: "flex-1",
                            "{toast.message}"
                        }
                    }
                }
            }
        }
    }
}
