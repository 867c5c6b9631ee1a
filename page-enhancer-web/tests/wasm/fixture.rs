use page_enhancer_core::EnhancerConfig;
use page_enhancer_web::dom;
use web_sys::{Document, Element, KeyboardEvent, KeyboardEventInit};

pub fn document() -> Document {
    dom::document().expect("document")
}

/// Mount `html` inside a fresh container with the given id, replacing any
/// leftover from an earlier test.
pub fn mount(id: &str, html: &str) -> Element {
    let doc = document();
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let root = doc.create_element("div").expect("create fixture root");
    root.set_id(id);
    root.set_inner_html(html);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append fixture");
    root
}

/// Default configuration with every selector hook scoped under `#id`.
pub fn scoped_config(id: &str) -> EnhancerConfig {
    let mut cfg = EnhancerConfig::default();
    let sel = &mut cfg.selectors;
    for selector in [
        &mut sel.nav_toggle,
        &mut sel.nav_menu,
        &mut sel.code_block,
        &mut sel.search_input,
        &mut sel.search_results,
        &mut sel.article,
        &mut sel.theme_toggle,
        &mut sel.skip_link,
        &mut sel.site_header,
    ] {
        *selector = format!("#{id} {selector}");
    }
    sel.cards = format!("#{id} .project-card");
    sel.anchor_links = format!("#{id} a[href^=\"#\"]");
    cfg
}

/// A bubbling, cancelable `keydown` for `key`.
pub fn key_down(key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event")
}

/// Texts of every live region currently in the document.
pub fn live_region_texts() -> Vec<String> {
    let regions = document()
        .query_selector_all("[aria-live=\"polite\"]")
        .expect("query live regions");
    (0..regions.length())
        .filter_map(|i| regions.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}
