use dioxus::prelude::*;
use futures::StreamExt;
use gloo_timers::future::TimeoutFuture;

use crate::components::display::{LoadingOverlay, ToastStack};
use crate::components::forms::{LoginForm, RegisterForm};
use crate::features::auth::{
    element_ids, FormMode, LoginFormController, OverlayEvent, OverlayPhase, Scheduled,
};
use crate::services::config::OverlayConfig;
use crate::services::host::{listen_for_host_messages, HostResponse, ParentFrameBridge};
use crate::utils::validation::overlay_class;
use crate::utils::{focus_element, hide_document_body};
use crate::{console_error, console_info};

const LOGIN_OVERLAY_CSS: Asset = asset!("/assets/styling/login_overlay.css");

type OverlayController = LoginFormController<ParentFrameBridge>;

/// Sleeps on each scheduled step and feeds it back into the controller,
/// following up on whatever that step schedules in turn
fn run_scheduled(mut controller: Signal<OverlayController>, scheduled: Vec<Scheduled>) {
    for Scheduled { delay_ms, deferred } in scheduled {
        spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            let more = controller.with_mut(|c| c.fire(deferred));
            run_scheduled(controller, more);
        });
    }
}

#[component]
pub fn LoginApp() -> Element {
    let mut controller = use_signal(|| {
        let config = OverlayConfig::load();
        let bridge = ParentFrameBridge::new(config.target_origin.clone());
        console_info!(
            "[Login Overlay] Starting (target origin '{}')",
            bridge.target_origin()
        );
        LoginFormController::new(bridge, config)
    });

    // Dispatch function for overlay events
    let dispatch = EventHandler::new(move |event: OverlayEvent| {
        let scheduled = controller.with_mut(|c| c.handle(event));
        run_scheduled(controller, scheduled);
    });

    // Host replies arrive from a raw DOM listener outside the Dioxus runtime,
    // so they are queued here and handled inside it
    let host_inbox = use_coroutine(move |mut rx: UnboundedReceiver<HostResponse>| async move {
        while let Some(response) = rx.next().await {
            dispatch.call(OverlayEvent::HostReply(response));
        }
    });

    use_hook(move || {
        if let Err(e) = listen_for_host_messages(move |response| host_inbox.send(response)) {
            console_error!("[Login Overlay] Cannot receive host messages: {}", e);
        }
    });

    // Track specific fields to avoid re-running effects on every keystroke
    let focus_request = use_memo(move || controller.read().state().focus_request);
    let overlay_phase = use_memo(move || controller.read().state().overlay);

    use_effect(move || {
        if let Some(element_id) = focus_request() {
            focus_element(element_id);
            dispatch.call(OverlayEvent::FocusHandled);
        }
    });

    use_effect(move || {
        if overlay_phase() == OverlayPhase::Hidden {
            hide_document_body();
        }
    });

    let state = controller.read().state().clone();

    if state.overlay == OverlayPhase::Hidden {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_OVERLAY_CSS }

        div {
            id: element_ids::LOGIN_APP,
            class: overlay_class(state.overlay),

            div {
                class: "auth-card",

                div {
                    class: "auth-header",
                    h1 {
                        class: "auth-title",
                        if state.mode == FormMode::Login { "Welcome Back" } else { "Create Account" }
                    }
                    p {
                        class: "auth-subtitle",
                        if state.mode == FormMode::Login {
                            "Sign in to continue your adventure"
                        } else {
                            "Join the server and create your first character"
                        }
                    }
                }

                LoginForm {
                    state: state.clone(),
                    dispatch: dispatch
                }

                RegisterForm {
                    state: state.clone(),
                    dispatch: dispatch
                }
            }
        }

        LoadingOverlay {
            visible: state.is_loading(),
            message: "Connecting to server...".to_string()
        }

        ToastStack {
            toasts: state.toasts.iter().cloned().collect::<Vec<_>>(),
            dispatch: dispatch
        }
    }
}
