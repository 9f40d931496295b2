//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **platform**: clock, focus and document helpers with native fallbacks
//! - **validation**: mapping from overlay state to CSS classes

pub mod console_macros;
pub mod platform;
pub mod validation;

pub use platform::*;
pub use validation::*;
