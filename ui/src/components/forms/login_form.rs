use dioxus::prelude::*;

use crate::components::input::{InputType, PasswordInput, ValidatedInput};
use crate::features::auth::{
    element_ids, AuthState, FormMode, LoginField, OverlayEvent, PasswordField,
};
use crate::utils::validation::{form_container_class, form_element_class};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    pub state: AuthState,
    pub dispatch: EventHandler<OverlayEvent>,
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let loading = state.is_loading();

    rsx! {
        div {
            id: element_ids::LOGIN_FORM,
            class: form_container_class(FormMode::Login, state.mode),

            form {
                id: element_ids::LOGIN_FORM_ELEMENT,
                class: form_element_class(loading),
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    dispatch.call(OverlayEvent::SubmitLogin);
                },

                ValidatedInput {
                    id: element_ids::LOGIN_IDENTIFIER.to_string(),
                    value: state.login.identifier.clone(),
                    placeholder: "Email or username".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field".to_string(),
                    icon: "person".to_string(),
                    disabled: loading,
                    on_change: move |value: String| {
                        dispatch.call(OverlayEvent::EditLogin(LoginField::Identifier, value));
                    }
                }

                PasswordInput {
                    id: element_ids::LOGIN_PASSWORD.to_string(),
                    toggle_id: Some(element_ids::TOGGLE_LOGIN_PASSWORD.to_string()),
                    value: state.login.password.clone(),
                    placeholder: "Password".to_string(),
                    visible: state.login_password_visible,
                    input_class: "input-field".to_string(),
                    disabled: loading,
                    on_change: move |value: String| {
                        dispatch.call(OverlayEvent::EditLogin(LoginField::Password, value));
                    },
                    on_toggle: move |_| {
                        dispatch.call(OverlayEvent::TogglePassword(PasswordField::Login));
                    }
                }

                button {
                    class: "submit-button",
                    r#type: "submit",
                    disabled: loading,
                    "Sign In"
                }
            }

            div {
                class: "form-switch",
                span { "Don't have an account? " }
                button {
                    id: element_ids::SHOW_REGISTER,
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| dispatch.call(OverlayEvent::SwitchForm(FormMode::Register)),
                    "Create one"
                }
            }
        }
    }
}
