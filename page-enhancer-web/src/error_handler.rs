//! Page-wide handler for uncaught script errors.

use page_enhancer_core::AnalyticsEvent;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, Event, Window};

use crate::{analytics, dom};

/// Log every uncaught error and report it to analytics as non-fatal.
pub fn install(win: &Window) {
    dom::listen(win, "error", |event: &Event| {
        let Some(event) = event.dyn_ref::<ErrorEvent>() else {
            return;
        };
        let description = describe(event);
        log::error!("uncaught error: {description}");
        analytics::send(&AnalyticsEvent::Exception(description));
    });
}

fn describe(event: &ErrorEvent) -> String {
    let error = event.error();
    if error.is_undefined() || error.is_null() {
        event.message()
    } else {
        dom::js_error_message(&error)
    }
}
