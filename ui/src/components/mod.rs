//! User Interface Components
//!
//! Dioxus components for the login overlay:
//!
//! - **forms**: the login and registration forms
//! - **display**: toast stack and loading overlay
//! - **input**: text and password inputs with validation styling
//!
//! Components only render state and forward user intent as `OverlayEvent`s;
//! all decisions live in `features::auth`.

pub mod display;
pub mod forms;
pub mod input;
