//! Browser console logging
//!
//! On wasm32 these forward to `console.log` / `console.warn`. Native builds
//! (tests, tools) have no console to talk to, so messages are dropped.

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}

/// `format!`-style `console.log`
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::console::log(&format!($($arg)*))
    };
}

/// `format!`-style `console.warn`
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::console::warn(&format!($($arg)*))
    };
}
