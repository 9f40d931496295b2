pub mod loading_overlay;
pub mod toast_stack;

pub use loading_overlay::*;
pub use toast_stack::*;
