//! DOM ids the embedding page and its stylesheets rely on

pub const LOGIN_APP: &str = "login-app";
pub const LOGIN_FORM: &str = "login-form";
pub const REGISTER_FORM: &str = "register-form";
pub const LOGIN_FORM_ELEMENT: &str = "login-form-element";
pub const REGISTER_FORM_ELEMENT: &str = "register-form-element";

pub const LOGIN_IDENTIFIER: &str = "login-email";
pub const LOGIN_PASSWORD: &str = "login-password";
pub const REGISTER_USERNAME: &str = "register-username";
pub const REGISTER_EMAIL: &str = "register-email";
pub const REGISTER_PASSWORD: &str = "register-password";
pub const REGISTER_CONFIRM_PASSWORD: &str = "register-confirm-password";

pub const TOGGLE_LOGIN_PASSWORD: &str = "toggle-login-password";
pub const TOGGLE_REGISTER_PASSWORD: &str = "toggle-register-password";
pub const SHOW_REGISTER: &str = "show-register";
pub const SHOW_LOGIN: &str = "show-login";

pub const LOADING_OVERLAY: &str = "loading-overlay";
pub const TOAST_CONTAINER: &str = "toast-container";
