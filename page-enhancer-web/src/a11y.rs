// Accessibility enhancements

use gloo::timers::callback::Timeout;
use page_enhancer_core::EnhancerConfig;
use page_enhancer_core::a11y::{
    ENHANCED_FOCUS_CLASS, SR_ONLY_CLASS, announcement_text, focus_css, is_activation_key,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::{dom, error::EnhanceError};

/// Send skip-link activation straight to the main landmark.
///
/// # Errors
/// Returns `MissingHook` when the skip link or the main landmark is absent.
pub fn init_skip_link(doc: &Document, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let skip = dom::require(doc, &cfg.selectors.skip_link)?;
    let main = dom::require_html(doc, &cfg.selectors.main_content)?;
    dom::ensure_focusable(&main);
    dom::listen(&skip, "click", move |event: &Event| {
        event.prevent_default();
        let _ = main.focus();
    });
    Ok(())
}

/// Make card-like elements focusable and activate their first link on Enter/Space.
///
/// # Errors
/// Returns `MissingHook` when the page has no cards.
pub fn init_cards(doc: &Document, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let cards = dom::find_all(doc, &cfg.selectors.cards);
    if cards.is_empty() {
        return Err(EnhanceError::MissingHook(cfg.selectors.cards.clone()));
    }
    for card in cards {
        card.set_attribute("tabindex", "0")?;
        let owner = card.clone();
        dom::listen(&card, "keydown", move |event: &Event| {
            activate_card(&owner, event);
        });
    }
    Ok(())
}

fn activate_card(card: &Element, event: &Event) {
    let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
        return;
    };
    // Keys pressed on the embedded link already activate it natively.
    let on_card = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .is_some_and(|target| &target == card);
    if !on_card || !is_activation_key(&key) {
        return;
    }
    if let Some(link) = dom::find_in(card, "a").and_then(|a| a.dyn_into::<HtmlElement>().ok()) {
        event.prevent_default();
        link.click();
    }
}

/// Announce the page title through a short-lived live region.
///
/// # Errors
/// Returns `MissingHook` when the document has no body.
pub fn announce_page(doc: &Document, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let body = doc
        .body()
        .ok_or_else(|| EnhanceError::MissingHook("body".into()))?;
    let region = doc.create_element("div")?;
    region.set_attribute("aria-live", "polite")?;
    region.set_attribute("aria-atomic", "true")?;
    region.set_class_name(SR_ONLY_CLASS);
    region.set_text_content(Some(&announcement_text(&doc.title())));
    body.append_child(&region)?;
    Timeout::new(cfg.timings.announce_ms, move || region.remove()).forget();
    Ok(())
}

/// Inject the focus-ring rule and tag every focusable element with it.
///
/// # Errors
/// Returns `MissingHook` when the document has no head.
pub fn init_focus_indicators(doc: &Document, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let head = doc
        .head()
        .ok_or_else(|| EnhanceError::MissingHook("head".into()))?;
    let style = doc.create_element("style")?;
    style.set_text_content(Some(focus_css()));
    head.append_child(&style)?;
    for el in dom::find_all(doc, &cfg.selectors.focusable) {
        let _ = el.class_list().add_1(ENHANCED_FOCUS_CLASS);
    }
    Ok(())
}
