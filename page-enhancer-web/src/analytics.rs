use js_sys::Function;
use page_enhancer_core::{ANALYTICS_FUNCTION, AnalyticsEvent};
use wasm_bindgen::{JsCast, JsValue};

use crate::dom;

/// Forward `event` to the page's global analytics function, if one exists.
/// Returns `true` when the hook was called.
pub fn send(event: &AnalyticsEvent) -> bool {
    let Some(win) = dom::window() else {
        return false;
    };
    let Some(hook) = js_sys::Reflect::get(&win, &JsValue::from_str(ANALYTICS_FUNCTION))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        return false;
    };
    let params = match serde_wasm_bindgen::to_value(&event.params()) {
        Ok(params) => params,
        Err(err) => {
            log::warn!("analytics params not serializable: {err}");
            return false;
        }
    };
    match hook.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event.name()),
        &params,
    ) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("analytics hook failed: {}", dom::js_error_message(&err));
            false
        }
    }
}
