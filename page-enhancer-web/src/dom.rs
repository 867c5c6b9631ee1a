use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Node, NodeList, Window};

use crate::error::EnhanceError;

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document of the current window.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
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

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element in the document matching `selector`.
#[must_use]
pub fn find(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// All elements in the document matching `selector`, in document order.
#[must_use]
pub fn find_all(doc: &Document, selector: &str) -> Vec<Element> {
    doc.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

#[must_use]
pub fn find_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

#[must_use]
pub fn find_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// Look up a page hook, reporting its absence as [`EnhanceError::MissingHook`].
///
/// # Errors
/// Returns `MissingHook` when no element matches `selector`.
pub fn require(doc: &Document, selector: &str) -> Result<Element, EnhanceError> {
    find(doc, selector).ok_or_else(|| EnhanceError::MissingHook(selector.to_string()))
}

/// Like [`require`], for hooks that must be HTML elements (focus, style, click).
///
/// # Errors
/// Returns `MissingHook` when nothing matches or the match is not an HTML element.
pub fn require_html(doc: &Document, selector: &str) -> Result<HtmlElement, EnhanceError> {
    require(doc, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| EnhanceError::MissingHook(selector.to_string()))
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &'static str, handler: impl FnMut(&Event) + 'static) {
    EventListener::new(target, event, handler).forget();
}

/// Whether the event originated inside `container` (inclusive).
#[must_use]
pub fn event_within(event: &Event, container: &Node) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

/// Set an inline style property, or clear it when `value` is `None`.
pub fn set_style(el: &HtmlElement, property: &str, value: Option<&str>) {
    let style = el.style();
    let _ = match value {
        Some(v) => style.set_property(property, v),
        None => style.remove_property(property).map(|_| ()),
    };
}

/// Give a non-interactive element a `tabindex` so script focus lands on it.
pub fn ensure_focusable(el: &Element) {
    if !el.has_attribute("tabindex") {
        let _ = el.set_attribute("tabindex", "-1");
    }
}

/// Run `f` once the document has been parsed.
pub fn when_ready(f: impl FnOnce() + 'static) {
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        EventListener::once(&doc, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

/// Run `f` once the window `load` event has fired.
pub fn after_load(win: &Window, f: impl FnOnce() + 'static) {
    let loaded = win
        .document()
        .is_some_and(|doc| doc.ready_state() == "complete");
    if loaded {
        f();
    } else {
        EventListener::once(win, "load", move |_| f()).forget();
    }
}

/// Whether `object` exposes a property named `name`.
#[must_use]
pub fn has_property(object: &JsValue, name: &str) -> bool {
    js_sys::Reflect::get(object, &JsValue::from_str(name))
        .is_ok_and(|value| !value.is_undefined() && !value.is_null())
}
