//! Browser console logging.
//!
//! `console_log!` and `console_warn!` take `format!` arguments. On wasm32 they
//! write to the browser console; elsewhere they compile to nothing so native
//! tests stay quiet.

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::console::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console::warn(&format!($($arg)*))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

/// Route panics to `console.error` so failed assertions are visible.
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}
