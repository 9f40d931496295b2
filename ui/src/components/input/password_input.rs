use dioxus::prelude::*;

use crate::utils::validation::{password_input_type, password_toggle_icon};

#[derive(Props, PartialEq, Clone)]
pub struct PasswordInputProps {
    pub id: String,
    /// Id of the show/hide button; `None` renders no toggle
    pub toggle_id: Option<String>,
    pub value: String,
    pub placeholder: String,
    pub visible: bool,
    pub input_class: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn PasswordInput(props: PasswordInputProps) -> Element {
    rsx! {
        div {
            class: "relative",
            span {
                class: "material-symbols-outlined input-icon",
                "lock"
            }
            input {
                id: "{props.id}",
                class: "{props.input_class}",
                r#type: password_input_type(props.visible),
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                disabled: props.disabled,
                oninput: move |event| props.on_change.call(event.value())
            }
            if let Some(toggle_id) = props.toggle_id.clone() {
                button {
                    id: "{toggle_id}",
                    class: "password-toggle",
                    r#type: "button",
                    onclick: move |_| props.on_toggle.call(()),
                    span {
                        class: "material-symbols-outlined",
                        {password_toggle_icon(props.visible)}
                    }
                }
            }
        }
    }
}
