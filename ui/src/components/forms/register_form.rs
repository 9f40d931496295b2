use dioxus::prelude::*;

use crate::components::input::{InputType, PasswordInput, ValidatedInput};
use crate::features::auth::{
    element_ids, AuthState, FormMode, OverlayEvent, PasswordField, RegisterField,
};
use crate::utils::validation::{form_container_class, form_element_class, marker_class};

#[derive(Props, PartialEq, Clone)]
pub struct RegisterFormProps {
    pub state: AuthState,
    pub dispatch: EventHandler<OverlayEvent>,
}

#[component]
pub fn RegisterForm(props: RegisterFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let loading = state.is_loading();

    rsx! {
        div {
            id: element_ids::REGISTER_FORM,
            class: form_container_class(FormMode::Register, state.mode),

            form {
                id: element_ids::REGISTER_FORM_ELEMENT,
                class: form_element_class(loading),
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    dispatch.call(OverlayEvent::SubmitRegister);
                },

                ValidatedInput {
                    id: element_ids::REGISTER_USERNAME.to_string(),
                    value: state.register.username.clone(),
                    placeholder: "Username".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field".to_string(),
                    icon: "badge".to_string(),
                    disabled: loading,
                    on_change: move |value: String| {
                        dispatch.call(OverlayEvent::EditRegister(RegisterField::Username, value));
                    }
                }

                ValidatedInput {
                    id: element_ids::REGISTER_EMAIL.to_string(),
                    value: state.register.email.clone(),
                    placeholder: "Email address".to_string(),
                    input_type: InputType::Email,
                    input_class: "input-field".to_string(),
                    icon: "mail".to_string(),
                    disabled: loading,
                    on_change: move |value: String| {
                        dispatch.call(OverlayEvent::EditRegister(RegisterField::Email, value));
                    }
                }

                PasswordInput {
                    id: element_ids::REGISTER_PASSWORD.to_string(),
                    toggle_id: Some(element_ids::TOGGLE_REGISTER_PASSWORD.to_string()),
                    value: state.register.password.clone(),
                    placeholder: "Password (min. 6 characters)".to_string(),
                    visible: state.register_password_visible,
                    input_class: "input-field".to_string(),
                    disabled: loading,
                    on_change: move |value: String| {
                        dispatch.call(OverlayEvent::EditRegister(RegisterField::Password, value));
                    },
                    on_toggle: move |_| {
                        dispatch.call(OverlayEvent::TogglePassword(PasswordField::Register));
                    }
                }

                // Always masked; only the first password field has a toggle
                PasswordInput {
                    id: element_ids::REGISTER_CONFIRM_PASSWORD.to_string(),
                    toggle_id: None,
                    value: state.register.confirm_password.clone(),
                    placeholder: "Confirm password".to_string(),
                    visible: false,
                    input_class: marker_class(state.confirm_marker).to_string(),
                    disabled: loading,
                    on_change: move |value: String| {
                        dispatch.call(OverlayEvent::EditRegister(RegisterField::ConfirmPassword, value));
                    },
                    on_toggle: move |_| {}
                }

                button {
                    class: "submit-button",
                    r#type: "submit",
                    disabled: loading,
                    "Create Account"
                }
            }

            div {
                class: "form-switch",
                span { "Already have an account? " }
                button {
                    id: element_ids::SHOW_LOGIN,
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| dispatch.call(OverlayEvent::SwitchForm(FormMode::Login)),
                    "Sign in"
                }
            }
        }
    }
}
