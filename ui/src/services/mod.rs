//! Infrastructure Services
//!
//! - **host**: one-way messaging with the embedding page (`postMessage`)
//! - **config**: overlay timings and transport settings
//! - **errors**: error types shared by the overlay
//!
//! The services are designed to be WASM-first, using browser APIs directly
//! without Send/Sync bounds.

pub mod config;
pub mod errors;
pub mod host;
