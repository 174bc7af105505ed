//! Console-logging dispatch backend.
//!
//! Stands in for a real delivery service: serializes the assembled
//! request and logs it to the browser console. Nothing is transmitted.

use volley_compose::{DispatchError, DispatchRequest, DispatchService};
use wasm_bindgen::JsValue;

/// [`DispatchService`] implementation that logs the payload and returns.
///
/// The logged JSON is the backend wire shape
/// (`phoneNumbers` / `message` / `image`), so swapping in a real backend
/// changes only which `DispatchService` the app constructs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDispatcher;

impl DispatchService for ConsoleDispatcher {
    fn dispatch(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        let json = serde_json::to_string_pretty(request)
            .map_err(|e| DispatchError::Backend(format!("failed to serialize request: {e}")))?;

        web_sys::console::log_2(
            &JsValue::from_str("Sending payload:"),
            &JsValue::from_str(&json),
        );
        Ok(())
    }
}
