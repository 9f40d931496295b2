/// Macros for properly formatted console logging
/// In the browser these wrap gloo_console and prefix each line with a
/// millisecond timestamp. Native builds (unit tests) go through `tracing`
/// instead, since the JS console does not exist there.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::console_info!("{}", $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!("{}", format!($fmt, $($arg)*));
    }};
}

#[macro_export]
macro_rules! console_log {
    ($fmt:expr) => {
        $crate::console_log!("{}", $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::log!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!("{}", format!($fmt, $($arg)*));
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::console_warn!("{}", $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("{}", format!($fmt, $($arg)*));
    }};
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::console_error!("{}", $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::error!("{}", format!($fmt, $($arg)*));
    }};
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::console_debug!("{}", $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!("{}", format!($fmt, $($arg)*));
    }};
}
