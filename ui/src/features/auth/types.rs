// Core types for the login overlay - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Which of the two forms is presented
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Login => "login",
            FormMode::Register => "register",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastSeverity {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastSeverity::Info => "info",
            ToastSeverity::Success => "success",
            ToastSeverity::Warning => "warning",
            ToastSeverity::Error => "error",
        }
    }

    /// Material Symbols glyph shown next to the message
    pub fn icon(&self) -> &'static str {
        match self {
            ToastSeverity::Info => "info",
            ToastSeverity::Success => "check_circle",
            ToastSeverity::Warning => "warning",
            ToastSeverity::Error => "error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ToastNotification {
    pub id: u64,
    pub message: String,
    pub severity: ToastSeverity,
    pub created_at_ms: f64,
    /// Set once the exit animation has started
    pub leaving: bool,
}

/// Cosmetic per-field validation marker
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FieldMarker {
    #[default]
    None,
    Success,
    Error,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PasswordField {
    Login,
    Register,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OverlayPhase {
    #[default]
    Visible,
    /// Exit transition running after a successful login
    Closing,
    Hidden,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PendingKind {
    Login,
    /// Email is kept so the login form can be pre-filled once the account exists
    Register { email: String },
}

/// The single in-flight request slot. The wire protocol carries no correlation
/// id, so at most one of these may exist at a time.
#[derive(Clone, PartialEq, Debug)]
pub struct PendingRequest {
    pub seq: u64,
    pub kind: PendingKind,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginFields {
    pub identifier: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegisterFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginField {
    Identifier,
    Password,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RegisterField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum AuthAction {
    SetMode(FormMode),
    ClearForms,

    SetLoginField(LoginField, String),
    SetRegisterField(RegisterField, String),
    SetConfirmMarker(FieldMarker),
    TogglePasswordVisibility(PasswordField),

    BeginRequest(PendingRequest),
    FinishRequest,

    PushToast(ToastNotification),
    MarkToastLeaving(u64),
    RemoveToast(u64),

    SetOverlayPhase(OverlayPhase),
    RequestFocus(&'static str),
    ClearFocusRequest,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthState {
    pub mode: FormMode,
    pub login: LoginFields,
    pub register: RegisterFields,
    pub confirm_marker: FieldMarker,
    pub login_password_visible: bool,
    pub register_password_visible: bool,
    pub toasts: VecDeque<ToastNotification>,
    pub pending: Option<PendingRequest>,
    pub overlay: OverlayPhase,
    /// DOM id the view should focus on its next render
    pub focus_request: Option<&'static str>,
}

impl AuthState {
    pub fn reduce_in_place(&mut self, action: AuthAction) {
        match action {
            AuthAction::SetMode(mode) => {
                self.mode = mode;
            }
            AuthAction::ClearForms => {
                self.login = LoginFields::default();
                self.register = RegisterFields::default();
                self.confirm_marker = FieldMarker::None;
            }

            AuthAction::SetLoginField(field, value) => match field {
                LoginField::Identifier => self.login.identifier = value,
                LoginField::Password => self.login.password = value,
            },
            AuthAction::SetRegisterField(field, value) => match field {
                RegisterField::Username => self.register.username = value,
                RegisterField::Email => self.register.email = value,
                RegisterField::Password => self.register.password = value,
                RegisterField::ConfirmPassword => self.register.confirm_password = value,
            },
            AuthAction::SetConfirmMarker(marker) => {
                self.confirm_marker = marker;
            }
            AuthAction::TogglePasswordVisibility(field) => match field {
                PasswordField::Login => {
                    self.login_password_visible = !self.login_password_visible
                }
                PasswordField::Register => {
                    self.register_password_visible = !self.register_password_visible
                }
            },

            AuthAction::BeginRequest(request) => {
                self.pending = Some(request);
            }
            AuthAction::FinishRequest => {
                self.pending = None;
            }

            AuthAction::PushToast(toast) => {
                self.toasts.push_back(toast);
            }
            AuthAction::MarkToastLeaving(id) => {
                if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
                    toast.leaving = true;
                }
            }
            AuthAction::RemoveToast(id) => {
                self.toasts.retain(|t| t.id != id);
            }

            AuthAction::SetOverlayPhase(phase) => {
                self.overlay = phase;
            }
            AuthAction::RequestFocus(element_id) => {
                self.focus_request = Some(element_id);
            }
            AuthAction::ClearFocusRequest => {
                self.focus_request = None;
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// New submissions are only accepted while idle and on screen
    pub fn accepts_submissions(&self) -> bool {
        !self.is_loading() && self.overlay == OverlayPhase::Visible
    }

    pub fn toast(&self, id: u64) -> Option<&ToastNotification> {
        self.toasts.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_login_and_idle() {
        let state = AuthState::default();
        assert_eq!(state.mode, FormMode::Login);
        assert!(!state.is_loading());
        assert!(state.accepts_submissions());
        assert_eq!(state.overlay, OverlayPhase::Visible);
    }

    #[test]
    fn test_clear_forms_resets_fields_and_marker() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::SetLoginField(
            LoginField::Identifier,
            "player".to_string(),
        ));
        state.reduce_in_place(AuthAction::SetRegisterField(
            RegisterField::ConfirmPassword,
            "secret".to_string(),
        ));
        state.reduce_in_place(AuthAction::SetConfirmMarker(FieldMarker::Error));

        state.reduce_in_place(AuthAction::ClearForms);

        assert_eq!(state.login, LoginFields::default());
        assert_eq!(state.register, RegisterFields::default());
        assert_eq!(state.confirm_marker, FieldMarker::None);
    }

    #[test]
    fn test_toast_lifecycle_actions() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::PushToast(ToastNotification {
            id: 7,
            message: "hello".to_string(),
            severity: ToastSeverity::Info,
            created_at_ms: 0.0,
            leaving: false,
        }));

        state.reduce_in_place(AuthAction::MarkToastLeaving(7));
        assert!(state.toast(7).map(|t| t.leaving).unwrap_or(false));

        state.reduce_in_place(AuthAction::RemoveToast(7));
        assert!(state.toasts.is_empty());

        // Unknown ids are ignored
        state.reduce_in_place(AuthAction::MarkToastLeaving(99));
        state.reduce_in_place(AuthAction::RemoveToast(99));
    }

    #[test]
    fn test_pending_slot_blocks_submissions() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::BeginRequest(PendingRequest {
            seq: 1,
            kind: PendingKind::Login,
        }));
        assert!(state.is_loading());
        assert!(!state.accepts_submissions());

        state.reduce_in_place(AuthAction::FinishRequest);
        assert!(state.accepts_submissions());

        state.reduce_in_place(AuthAction::SetOverlayPhase(OverlayPhase::Closing));
        assert!(!state.accepts_submissions());
    }

    #[test]
    fn test_password_toggles_are_independent() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::TogglePasswordVisibility(PasswordField::Login));
        assert!(state.login_password_visible);
        assert!(!state.register_password_visible);
    }
}
