//! `postMessage` transport between the overlay frame and its host page

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{window, MessageEvent};

use crate::services::errors::{BridgeError, BridgeResult};
use crate::services::host::{HostBridge, HostRequest, HostResponse};
use crate::{console_debug, console_info};

/// Posts requests to `window.parent`
#[derive(Debug, Clone, PartialEq)]
pub struct ParentFrameBridge {
    target_origin: String,
}

impl ParentFrameBridge {
    pub fn new(target_origin: impl Into<String>) -> Self {
        Self {
            target_origin: target_origin.into(),
        }
    }

    pub fn target_origin(&self) -> &str {
        &self.target_origin
    }
}

impl Default for ParentFrameBridge {
    fn default() -> Self {
        Self::new("*")
    }
}

/// Encodes a request as a plain JS object (no `Map`s) so the host can read it
/// like any other message payload.
pub fn encode_host_request(request: &HostRequest) -> BridgeResult<JsValue> {
    request
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| BridgeError::Encoding {
            message: e.to_string(),
        })
}

/// Decodes `MessageEvent::data()`. Messages meant for someone else decode to `None`.
pub fn decode_host_message(data: JsValue) -> Option<HostResponse> {
    match serde_wasm_bindgen::from_value::<HostResponse>(data) {
        Ok(response) => Some(response),
        Err(e) => {
            console_debug!("[Host Bridge] Ignoring unrecognised message: {}", e);
            None
        }
    }
}

impl HostBridge for ParentFrameBridge {
    fn send(&self, request: &HostRequest) -> BridgeResult<()> {
        let window = window().ok_or_else(|| BridgeError::HostUnavailable {
            reason: "no global window".to_string(),
        })?;

        let parent = window
            .parent()
            .map_err(|e| BridgeError::HostUnavailable {
                reason: format!("{:?}", e),
            })?
            .ok_or_else(|| BridgeError::HostUnavailable {
                reason: "window has no parent".to_string(),
            })?;

        let message = encode_host_request(request)?;

        parent
            .post_message(&message, &self.target_origin)
            .map_err(|e| BridgeError::PostMessage {
                message: format!("{:?}", e),
            })?;

        console_info!(
            "[Host Bridge] Sent '{}' request to parent frame",
            request.kind()
        );
        Ok(())
    }
}

/// Registers a window `message` listener that forwards recognised result
/// messages to `on_response`. The listener lives for the rest of the page.
pub fn listen_for_host_messages<F>(mut on_response: F) -> BridgeResult<()>
where
    F: FnMut(HostResponse) + 'static,
{
    let window = window().ok_or_else(|| BridgeError::HostUnavailable {
        reason: "no global window".to_string(),
    })?;

    let listener = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        if let Some(response) = decode_host_message(event.data()) {
            on_response(response);
        }
    });

    window
        .add_event_listener_with_callback("message", listener.as_ref().unchecked_ref())
        .map_err(|e| BridgeError::HostUnavailable {
            reason: format!("{:?}", e),
        })?;

    listener.forget();
    Ok(())
}
