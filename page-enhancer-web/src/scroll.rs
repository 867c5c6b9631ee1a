//! Smooth in-page anchor navigation and the sticky header class.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use page_enhancer_core::{
    EnhancerConfig, ScrollThrottle, anchor_target, is_past_threshold, scroll_offset,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions, Window};

use crate::{dom, error::EnhanceError};

pub const SCROLLED_CLASS: &str = "scrolled";

/// Intercept clicks on fragment links whose target exists.
///
/// # Errors
/// Returns `MissingHook` when the page has no fragment links.
pub fn init_anchor_links(doc: &Document, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let anchors = dom::find_all(doc, &cfg.selectors.anchor_links);
    if anchors.is_empty() {
        return Err(EnhanceError::MissingHook(cfg.selectors.anchor_links.clone()));
    }
    let header_offset = cfg.scroll.header_offset;
    for anchor in anchors {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event: &Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = resolve_target(&href) else {
                return;
            };
            event.prevent_default();
            scroll_to(&target, header_offset, &href);
        });
    }
    Ok(())
}

/// Element targeted by a fragment link, or `None` to keep default navigation.
#[must_use]
pub fn resolve_target(href: &str) -> Option<Element> {
    let id = anchor_target(href)?;
    let id = js_sys::decode_uri_component(id)
        .ok()
        .and_then(|decoded| decoded.as_string())
        .unwrap_or_else(|| id.to_string());
    dom::document()?.get_element_by_id(&id)
}

fn scroll_to(target: &Element, header_offset: f64, href: &str) {
    let Some(win) = dom::window() else {
        return;
    };
    let page_top = target.get_bounding_client_rect().top() + win.scroll_y().unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(scroll_offset(page_top, header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);

    if let Ok(history) = win.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
    }

    dom::ensure_focusable(target);
    if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
        let _ = el.focus();
    }
}

/// Toggle the header's `scrolled` class, recomputing at most once per frame.
///
/// # Errors
/// Returns `MissingHook` when the site header is absent.
pub fn init_sticky_header(
    win: &Window,
    doc: &Document,
    cfg: &EnhancerConfig,
) -> Result<(), EnhanceError> {
    let header = dom::require(doc, &cfg.selectors.site_header)?;
    let threshold = cfg.scroll.sticky_threshold;
    update_header(&header, threshold);

    let throttle = Rc::new(RefCell::new(ScrollThrottle::default()));
    // Holds the latest frame request; replacing a finished one is a no-op cancel.
    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
    dom::listen(win, "scroll", move |_| {
        if !throttle.borrow_mut().request() {
            return;
        }
        let frame_throttle = Rc::clone(&throttle);
        let header = header.clone();
        let request = request_animation_frame(move |_timestamp| {
            update_header(&header, threshold);
            frame_throttle.borrow_mut().frame_done();
        });
        *frame.borrow_mut() = Some(request);
    });
    Ok(())
}

fn update_header(header: &Element, threshold: f64) {
    let scroll_y = dom::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0);
    let _ = header
        .class_list()
        .toggle_with_force(SCROLLED_CLASS, is_past_threshold(scroll_y, threshold));
}
