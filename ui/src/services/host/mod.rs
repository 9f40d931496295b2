//! Host Messaging
//!
//! The overlay talks to its embedding application through one-way messages:
//!
//! - **messages**: wire shapes for outbound requests and inbound results
//! - **parent_frame**: `postMessage` transport to `window.parent` plus the
//!   inbound `message` listener
//!
//! There is no request id on the wire. Callers must keep at most one request
//! in flight.

pub mod messages;
pub mod parent_frame;

pub use messages::*;
pub use parent_frame::{
    decode_host_message, encode_host_request, listen_for_host_messages, ParentFrameBridge,
};

use crate::services::errors::BridgeResult;

/// Fire-and-forget request channel to the host
pub trait HostBridge {
    fn send(&self, request: &HostRequest) -> BridgeResult<()>;
}
