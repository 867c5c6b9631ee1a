use page_enhancer_web::nav;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use crate::fixture::{document, key_down, mount, scoped_config};

const MENU: &str = r#"
    <button class="navbar-toggle" aria-expanded="false">
      <span class="hamburger-line"></span>
      <span class="hamburger-line"></span>
      <span class="hamburger-line"></span>
    </button>
    <ul class="navbar-menu"><li><a href="/about/">About</a></li></ul>
    <p class="outside">Body text</p>
"#;

fn html(root: &web_sys::Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .expect("query")
        .expect("element exists")
        .dyn_into()
        .expect("html element")
}

#[wasm_bindgen_test]
fn toggle_click_expands_and_crosses_bars() {
    let root = mount("nav-toggle", MENU);
    nav::init(&document(), &scoped_config("nav-toggle")).expect("nav init");
    let toggle = html(&root, ".navbar-toggle");
    let panel = html(&root, ".navbar-menu");

    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(panel.style().get_property_value("display").unwrap(), "block");
    let middle = html(&root, ".hamburger-line:nth-child(2)");
    assert_eq!(middle.style().get_property_value("opacity").unwrap(), "0");

    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(panel.style().get_property_value("display").unwrap(), "none");
    assert_eq!(middle.style().get_property_value("opacity").unwrap(), "");
}

#[wasm_bindgen_test]
fn outside_click_collapses_open_menu() {
    let root = mount("nav-outside", MENU);
    nav::init(&document(), &scoped_config("nav-outside")).expect("nav init");
    let toggle = html(&root, ".navbar-toggle");

    toggle.click();
    html(&root, ".outside").click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn escape_collapses_and_returns_focus() {
    let root = mount("nav-escape", MENU);
    let doc = document();
    nav::init(&doc, &scoped_config("nav-escape")).expect("nav init");
    let toggle = html(&root, ".navbar-toggle");
    toggle.click();
    toggle.blur().expect("blur");

    doc.dispatch_event(&key_down("Escape")).expect("dispatch");

    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    let active = doc.active_element().expect("focused element");
    assert_eq!(&active, toggle.unchecked_ref::<web_sys::Element>());
}

#[wasm_bindgen_test]
fn missing_toggle_is_reported() {
    mount("nav-missing", "<ul class=\"navbar-menu\"></ul>");
    let err = nav::init(&document(), &scoped_config("nav-missing")).unwrap_err();
    assert!(matches!(err, page_enhancer_web::EnhanceError::MissingHook(_)));
}
