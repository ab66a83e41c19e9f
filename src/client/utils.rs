/// Logs a message to the browser console.
///
/// Outside the browser there is no console to write to, so the message goes
/// through tracing instead.
pub fn log_to_console(message: impl std::fmt::Debug) {
    let message = format!("{:?}", message);

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&message));

    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("{}", message);
}
