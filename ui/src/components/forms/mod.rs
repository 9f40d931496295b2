pub mod login_form;
pub mod register_form;

pub use login_form::*;
pub use register_form::*;
