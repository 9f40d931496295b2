//! This crate contains the login / registration overlay shown inside an
//! embedded game UI frame, and the bridge it uses to talk to its host page.

pub mod app;
pub use app::LoginApp;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
