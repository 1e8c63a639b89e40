use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Schedule a one-shot callback and return its timer handle, if the
/// browser accepted it. The handle feeds [`cancel_timeout`].
#[cfg(target_arch = "wasm32")]
pub fn schedule_timeout(delay_ms: i32, callback: impl FnOnce() + 'static) -> Option<i32> {
    let closure = wasm_bindgen::closure::Closure::once(callback);
    match window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        Ok(handle) => {
            closure.forget();
            Some(handle)
        }
        Err(err) => {
            console_error(&format!(
                "failed to schedule timeout: {}",
                js_error_message(&err)
            ));
            None
        }
    }
}

/// Cancel a pending timeout scheduled with [`schedule_timeout`].
#[cfg(target_arch = "wasm32")]
pub fn cancel_timeout(handle: i32) {
    window().clear_timeout_with_handle(handle);
}
