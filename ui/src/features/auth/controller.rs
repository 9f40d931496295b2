//! Login overlay controller
//!
//! Owns all form and toast state and mediates between user input, local
//! validation and the host reached through [`HostBridge`]. Operations never
//! touch browser timers themselves: anything that must happen later is
//! returned as a [`Scheduled`] entry, which the view sleeps on and feeds back
//! through [`LoginFormController::fire`].

use crate::features::auth::element_ids;
use crate::features::auth::form_validation::{
    password_match_marker, validate_login_form, validate_register_form,
};
use crate::features::auth::types::*;
use crate::services::config::OverlayConfig;
use crate::services::host::{AuthOutcome, HostBridge, HostRequest, HostResponse};
use crate::utils::now_ms;
use crate::{console_debug, console_error, console_info, console_warn};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Welcome back! Loading your characters...";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Account created successfully! You can now sign in.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try again.";
pub const REQUEST_TIMEOUT_MESSAGE: &str = "The server did not respond. Please try again.";

/// Work that has to run after a delay
#[derive(Clone, PartialEq, Debug)]
pub enum Deferred {
    /// Toast display time elapsed
    ExpireToast(u64),
    /// Toast exit animation finished
    RemoveToast(u64),
    /// Start the overlay exit transition after a successful login
    BeginTeardown,
    /// Overlay exit transition finished
    HideOverlay,
    /// Return to the login form after an account was created
    CompleteRegistration { email: String },
    /// Pending request window elapsed (only when a timeout is configured)
    RequestTimeout { seq: u64 },
}

#[derive(Clone, PartialEq, Debug)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub deferred: Deferred,
}

impl Scheduled {
    pub fn after(delay_ms: u32, deferred: Deferred) -> Self {
        Self { delay_ms, deferred }
    }
}

/// Everything the view can ask the controller to do
#[derive(Clone, Debug)]
pub enum OverlayEvent {
    SwitchForm(FormMode),
    EditLogin(LoginField, String),
    EditRegister(RegisterField, String),
    TogglePassword(PasswordField),
    SubmitLogin,
    SubmitRegister,
    HostReply(HostResponse),
    DismissToast(u64),
    Deferred(Deferred),
    FocusHandled,
}

pub struct LoginFormController<B: HostBridge> {
    state: AuthState,
    bridge: B,
    config: OverlayConfig,
    next_toast_id: u64,
    next_request_seq: u64,
    clock: fn() -> f64,
}

impl<B: HostBridge> LoginFormController<B> {
    pub fn new(bridge: B, config: OverlayConfig) -> Self {
        Self {
            state: AuthState::default(),
            bridge,
            config,
            next_toast_id: 1,
            next_request_seq: 1,
            clock: now_ms,
        }
    }

    /// Replaces the timestamp source used for toasts
    pub fn with_clock(mut self, clock: fn() -> f64) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    fn dispatch(&mut self, action: AuthAction) {
        self.state.reduce_in_place(action);
    }

    /// Single entry point for the view
    pub fn handle(&mut self, event: OverlayEvent) -> Vec<Scheduled> {
        match event {
            OverlayEvent::SwitchForm(target) => {
                self.switch_form(target);
                Vec::new()
            }
            OverlayEvent::EditLogin(field, value) => {
                self.dispatch(AuthAction::SetLoginField(field, value));
                Vec::new()
            }
            OverlayEvent::EditRegister(field, value) => {
                self.dispatch(AuthAction::SetRegisterField(field, value));
                if matches!(field, RegisterField::Password | RegisterField::ConfirmPassword) {
                    let password = self.state.register.password.clone();
                    let confirm = self.state.register.confirm_password.clone();
                    self.validate_password_match_live(&password, &confirm);
                }
                Vec::new()
            }
            OverlayEvent::TogglePassword(field) => {
                self.dispatch(AuthAction::TogglePasswordVisibility(field));
                Vec::new()
            }
            OverlayEvent::SubmitLogin => {
                let LoginFields {
                    identifier,
                    password,
                } = self.state.login.clone();
                self.submit_login(&identifier, &password)
            }
            OverlayEvent::SubmitRegister => {
                let RegisterFields {
                    username,
                    email,
                    password,
                    confirm_password,
                } = self.state.register.clone();
                self.submit_register(&username, &email, &password, &confirm_password)
            }
            OverlayEvent::HostReply(response) => self.on_auth_result(response),
            OverlayEvent::DismissToast(id) => self.dismiss_toast(id),
            OverlayEvent::Deferred(deferred) => self.fire(deferred),
            OverlayEvent::FocusHandled => {
                self.dispatch(AuthAction::ClearFocusRequest);
                Vec::new()
            }
        }
    }

    /// Shows `target`, clearing both forms and their validation markers.
    /// Switching to the form already shown is allowed and just clears it.
    pub fn switch_form(&mut self, target: FormMode) {
        console_debug!(
            "[Login Overlay] Switching form {} -> {}",
            self.state.mode.as_str(),
            target.as_str()
        );
        self.dispatch(AuthAction::SetMode(target));
        self.dispatch(AuthAction::ClearForms);
    }

    pub fn submit_login(&mut self, identifier: &str, password: &str) -> Vec<Scheduled> {
        if !self.state.accepts_submissions() {
            console_debug!("[Login Overlay] Login ignored: request already in flight");
            return Vec::new();
        }

        match validate_login_form(identifier, password) {
            Ok(payload) => {
                console_info!("[Login Overlay] Submitting login for '{}'", payload.email);
                self.send_request(HostRequest::Login(payload), PendingKind::Login)
            }
            Err(e) => self.show_toast(&e.to_string(), ToastSeverity::Warning),
        }
    }

    pub fn submit_register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Vec<Scheduled> {
        if !self.state.accepts_submissions() {
            console_debug!("[Login Overlay] Registration ignored: request already in flight");
            return Vec::new();
        }

        match validate_register_form(username, email, password, confirm_password) {
            Ok(payload) => {
                console_info!(
                    "[Login Overlay] Submitting registration for '{}'",
                    payload.username
                );
                let kind = PendingKind::Register {
                    email: payload.email.clone(),
                };
                self.send_request(HostRequest::Register(payload), kind)
            }
            Err(e) => self.show_toast(&e.to_string(), ToastSeverity::Warning),
        }
    }

    fn send_request(&mut self, request: HostRequest, kind: PendingKind) -> Vec<Scheduled> {
        let seq = self.next_request_seq;
        self.next_request_seq += 1;
        self.dispatch(AuthAction::BeginRequest(PendingRequest { seq, kind }));

        if let Err(e) = self.bridge.send(&request) {
            console_error!("[Login Overlay] Failed to send '{}' request: {}", request.kind(), e);
            self.dispatch(AuthAction::FinishRequest);
            return self.show_toast(CONNECTION_ERROR_MESSAGE, ToastSeverity::Error);
        }

        match self.config.request_timeout_ms {
            Some(timeout) => vec![Scheduled::after(timeout, Deferred::RequestTimeout { seq })],
            None => Vec::new(),
        }
    }

    /// Reacts to a result message from the host
    pub fn on_auth_result(&mut self, response: HostResponse) -> Vec<Scheduled> {
        if self.state.pending.is_none() {
            console_warn!("[Login Overlay] Result received with no request in flight");
        }

        match response {
            HostResponse::LoginResult(AuthOutcome { success: true, .. }) => {
                console_info!("[Login Overlay] Login accepted by host");
                // The pending slot is kept until the overlay is gone so the
                // forms stay locked during the exit transition.
                let mut scheduled = self.show_toast(LOGIN_SUCCESS_MESSAGE, ToastSeverity::Success);
                scheduled.push(Scheduled::after(
                    self.config.result_transition_ms,
                    Deferred::BeginTeardown,
                ));
                scheduled
            }
            HostResponse::LoginResult(AuthOutcome { message, .. }) => {
                console_info!("[Login Overlay] Login rejected by host: {}", message);
                self.dispatch(AuthAction::FinishRequest);
                self.show_toast(&message, ToastSeverity::Error)
            }
            HostResponse::RegisterResult(AuthOutcome { success: true, .. }) => {
                console_info!("[Login Overlay] Registration accepted by host");
                let email = match &self.state.pending {
                    Some(PendingRequest {
                        kind: PendingKind::Register { email },
                        ..
                    }) => email.clone(),
                    _ => self.state.register.email.trim().to_string(),
                };
                let mut scheduled =
                    self.show_toast(REGISTER_SUCCESS_MESSAGE, ToastSeverity::Success);
                scheduled.push(Scheduled::after(
                    self.config.result_transition_ms,
                    Deferred::CompleteRegistration { email },
                ));
                scheduled
            }
            HostResponse::RegisterResult(AuthOutcome { message, .. }) => {
                console_info!("[Login Overlay] Registration rejected by host: {}", message);
                self.dispatch(AuthAction::FinishRequest);
                self.show_toast(&message, ToastSeverity::Error)
            }
        }
    }

    /// Cosmetic confirm-password marker; submission re-validates regardless
    pub fn validate_password_match_live(&mut self, password: &str, confirm_password: &str) {
        let marker = password_match_marker(password, confirm_password);
        self.dispatch(AuthAction::SetConfirmMarker(marker));
    }

    pub fn show_toast(&mut self, message: &str, severity: ToastSeverity) -> Vec<Scheduled> {
        let id = self.next_toast_id;
        self.next_toast_id += 1;

        self.dispatch(AuthAction::PushToast(ToastNotification {
            id,
            message: message.to_string(),
            severity,
            created_at_ms: (self.clock)(),
            leaving: false,
        }));

        vec![Scheduled::after(
            self.config.toast_duration_ms,
            Deferred::ExpireToast(id),
        )]
    }

    /// Starts the exit animation of a toast. Repeated calls are no-ops.
    pub fn dismiss_toast(&mut self, id: u64) -> Vec<Scheduled> {
        let showing = self.state.toast(id).map_or(false, |t| !t.leaving);
        if !showing {
            return Vec::new();
        }

        self.dispatch(AuthAction::MarkToastLeaving(id));
        vec![Scheduled::after(
            self.config.toast_exit_ms,
            Deferred::RemoveToast(id),
        )]
    }

    /// Runs a deferred step returned by an earlier operation
    pub fn fire(&mut self, deferred: Deferred) -> Vec<Scheduled> {
        match deferred {
            Deferred::ExpireToast(id) => self.dismiss_toast(id),
            Deferred::RemoveToast(id) => {
                self.dispatch(AuthAction::RemoveToast(id));
                Vec::new()
            }
            Deferred::BeginTeardown => {
                self.dispatch(AuthAction::SetOverlayPhase(OverlayPhase::Closing));
                vec![Scheduled::after(
                    self.config.overlay_exit_ms,
                    Deferred::HideOverlay,
                )]
            }
            Deferred::HideOverlay => {
                console_info!("[Login Overlay] Overlay hidden");
                self.dispatch(AuthAction::SetOverlayPhase(OverlayPhase::Hidden));
                self.dispatch(AuthAction::FinishRequest);
                Vec::new()
            }
            Deferred::CompleteRegistration { email } => {
                self.dispatch(AuthAction::FinishRequest);
                self.switch_form(FormMode::Login);
                self.dispatch(AuthAction::SetLoginField(LoginField::Identifier, email));
                self.dispatch(AuthAction::RequestFocus(element_ids::LOGIN_IDENTIFIER));
                Vec::new()
            }
            Deferred::RequestTimeout { seq } => {
                let still_pending = self.state.pending.as_ref().map_or(false, |p| p.seq == seq);
                if !still_pending {
                    return Vec::new();
                }

                console_warn!("[Login Overlay] Request {} timed out", seq);
                self.dispatch(AuthAction::FinishRequest);
                self.show_toast(REQUEST_TIMEOUT_MESSAGE, ToastSeverity::Error)
            }
        }
    }
}
