pub mod password_input;
pub mod validated_input;

pub use password_input::*;
pub use validated_input::*;
