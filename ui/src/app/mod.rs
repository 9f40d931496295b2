pub mod login_app;

pub use login_app::LoginApp;
