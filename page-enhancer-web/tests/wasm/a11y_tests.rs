use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use page_enhancer_core::a11y::SR_ONLY_CLASS;
use page_enhancer_web::a11y;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

use crate::fixture::{document, key_down, live_region_texts, mount, scoped_config};

#[wasm_bindgen_test]
fn skip_link_focuses_main() {
    let root = mount(
        "a11y-skip",
        r##"<a class="skip-link" href="#main-a11y">Skip</a><main id="main-a11y">Body</main>"##,
    );
    let mut cfg = scoped_config("a11y-skip");
    cfg.selectors.main_content = "#main-a11y".into();
    let doc = document();
    a11y::init_skip_link(&doc, &cfg).expect("skip link");

    let main = doc.get_element_by_id("main-a11y").unwrap();
    assert_eq!(main.get_attribute("tabindex").as_deref(), Some("-1"));
    let skip: HtmlElement = root
        .query_selector(".skip-link")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    skip.click();
    assert_eq!(doc.active_element(), Some(main));
}

#[wasm_bindgen_test]
fn cards_become_focusable() {
    let root = mount(
        "a11y-cards",
        r#"<div class="project-card"><a href="/p/1/">One</a></div>
           <div class="project-card"><a href="/p/2/">Two</a></div>"#,
    );
    a11y::init_cards(&document(), &scoped_config("a11y-cards")).expect("cards");
    let cards = root.query_selector_all(".project-card").unwrap();
    assert_eq!(cards.length(), 2);
    for i in 0..cards.length() {
        let card: Element = cards.item(i).unwrap().dyn_into().unwrap();
        assert_eq!(card.get_attribute("tabindex").as_deref(), Some("0"));
    }
}

#[wasm_bindgen_test]
fn enter_and_space_on_card_activate_its_link() {
    let root = mount(
        "a11y-activate",
        r##"<div class="project-card"><a href="#card-link">Open</a></div>"##,
    );
    a11y::init_cards(&document(), &scoped_config("a11y-activate")).expect("cards");
    let card = root.query_selector(".project-card").unwrap().unwrap();
    let link = root.query_selector("a").unwrap().unwrap();

    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    EventListener::new(&link, "click", move |event| {
        event.prevent_default();
        counter.set(counter.get() + 1);
    })
    .forget();

    card.dispatch_event(&key_down("Enter")).unwrap();
    assert_eq!(clicks.get(), 1);
    card.dispatch_event(&key_down(" ")).unwrap();
    assert_eq!(clicks.get(), 2);
    card.dispatch_event(&key_down("Tab")).unwrap();
    assert_eq!(clicks.get(), 2);
    // Keys on the link itself are left to the browser.
    link.dispatch_event(&key_down("Enter")).unwrap();
    assert_eq!(clicks.get(), 2);
}

#[wasm_bindgen_test]
fn page_title_is_announced() {
    let doc = document();
    doc.set_title("Field Notes");
    a11y::announce_page(&doc, &scoped_config("a11y-announce")).expect("announce");

    let regions = doc
        .query_selector_all(&format!(".{SR_ONLY_CLASS}[aria-live=\"polite\"]"))
        .unwrap();
    let announced = (0..regions.length())
        .filter_map(|i| regions.item(i))
        .filter_map(|node| node.text_content())
        .any(|text| text == "Navigated to Field Notes");
    assert!(announced);
}

#[wasm_bindgen_test]
async fn announcement_is_removed_after_its_lifetime() {
    let doc = document();
    doc.set_title("Short Lived");
    let mut cfg = scoped_config("a11y-expire");
    cfg.timings.announce_ms = 30;
    a11y::announce_page(&doc, &cfg).expect("announce");

    let expected = "Navigated to Short Lived".to_string();
    assert!(live_region_texts().contains(&expected));
    TimeoutFuture::new(150).await;
    assert!(!live_region_texts().contains(&expected));
}

#[wasm_bindgen_test]
fn focus_rule_is_injected() {
    let root = mount("a11y-focus", r#"<button class="plain">Go</button>"#);
    let doc = document();
    a11y::init_focus_indicators(&doc, &scoped_config("a11y-focus")).expect("focus");
    let button = root.query_selector(".plain").unwrap().unwrap();
    assert!(button.class_list().contains("enhanced-focus"));
}
