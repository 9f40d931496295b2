//! Login / Registration Overlay
//!
//! - **types**: form state, toast and pending-request types plus the reducer
//! - **form_validation**: client-side rules for both forms
//! - **controller**: the `LoginFormController` driving state, validation and
//!   host messaging
//! - **element_ids**: DOM ids exposed to the embedding page

pub mod controller;
pub mod element_ids;
pub mod form_validation;
pub mod types;

pub use controller::*;
pub use form_validation::*;
pub use types::*;
