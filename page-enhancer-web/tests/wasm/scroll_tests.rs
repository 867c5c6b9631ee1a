use page_enhancer_web::scroll::{self, SCROLLED_CLASS, resolve_target};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement};

use crate::fixture::{document, mount, scoped_config};

#[wasm_bindgen_test]
fn fragment_links_resolve_existing_targets() {
    mount(
        "scroll-anchor",
        r##"<a href="#install-guide">Install</a><h2 id="install-guide">Install</h2>"##,
    );
    let target = resolve_target("#install-guide").expect("target exists");
    assert_eq!(target.id(), "install-guide");
    assert!(resolve_target("#no-such-section").is_none());
    assert!(resolve_target("#").is_none());
}

#[wasm_bindgen_test]
fn anchor_click_updates_hash_and_focuses_target() {
    let root = mount(
        "scroll-jump",
        r##"<a class="jump" href="#jump-target">Jump</a><section id="jump-target">Target</section>"##,
    );
    let doc = document();
    scroll::init_anchor_links(&doc, &scoped_config("scroll-jump")).expect("anchors");

    let link: HtmlElement = root
        .query_selector(".jump")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    link.click();

    let location = web_sys::window().unwrap().location();
    assert_eq!(location.hash().unwrap(), "#jump-target");
    let target = doc.get_element_by_id("jump-target").unwrap();
    assert_eq!(target.get_attribute("tabindex").as_deref(), Some("-1"));
    assert_eq!(doc.active_element(), Some(target));
}

#[wasm_bindgen_test]
fn missing_target_keeps_default_navigation() {
    let root = mount(
        "scroll-dead",
        r##"<a class="dead" href="#nowhere-on-this-page">Dead</a>"##,
    );
    scroll::init_anchor_links(&document(), &scoped_config("scroll-dead")).expect("anchors");

    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = Event::new_with_event_init_dict("click", &init).unwrap();
    let link = root.query_selector(".dead").unwrap().unwrap();
    let not_cancelled = link.dispatch_event(&click).unwrap();

    assert!(not_cancelled);
    assert!(!click.default_prevented());
}

#[wasm_bindgen_test]
fn header_starts_unscrolled_at_top() {
    let root = mount("scroll-header", r#"<header class="site-header">Site</header>"#);
    let win = web_sys::window().unwrap();
    win.scroll_to_with_x_and_y(0.0, 0.0);
    scroll::init_sticky_header(&win, &document(), &scoped_config("scroll-header"))
        .expect("sticky header");
    let header = root.query_selector(".site-header").unwrap().unwrap();
    assert!(!header.class_list().contains(SCROLLED_CLASS));
}
