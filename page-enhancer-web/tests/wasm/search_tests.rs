use gloo::timers::future::TimeoutFuture;
use page_enhancer_web::search;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

use crate::fixture::{document, mount, scoped_config};

const ARTICLES: &str = r#"
    <input class="search-input" type="search">
    <div class="search-results" style="display: none"></div>
    <p class="elsewhere">Sidebar</p>
    <article><h2><a href="/projects/orbit-mechanics/">Orbit Mechanics</a></h2>
      <p>Kepler's laws describe elliptical paths around a central body.</p></article>
    <article><h2><a href="/projects/thermal-control/">Thermal Control</a></h2>
      <p>Radiators and heaters keep spacecraft within operating limits.</p></article>
    <article><h2><a href="/projects/orbit-decay/">Orbit Decay</a></h2>
      <p>Atmospheric drag lowers the altitude of satellites over time.</p></article>
"#;

const DEBOUNCE_MS: u32 = 20;

fn setup(id: &str) -> (Element, HtmlInputElement, HtmlElement) {
    let root = mount(id, ARTICLES);
    let mut cfg = scoped_config(id);
    cfg.timings.search_debounce_ms = DEBOUNCE_MS;
    search::init(&document(), &cfg).expect("search init");
    let input = root
        .query_selector(".search-input")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let panel = root
        .query_selector(".search-results")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    (root, input, panel)
}

async fn type_query(input: &HtmlInputElement, query: &str) {
    input.set_value(query);
    input
        .dispatch_event(&Event::new("input").unwrap())
        .unwrap();
    TimeoutFuture::new(DEBOUNCE_MS * 5).await;
}

fn display(panel: &HtmlElement) -> String {
    panel.style().get_property_value("display").unwrap()
}

#[wasm_bindgen_test]
async fn orbit_lists_two_highlighted_results() {
    let (_root, input, panel) = setup("search-orbit");
    type_query(&input, "orbit").await;

    assert_eq!(display(&panel), "block");
    let results = panel.query_selector_all(".search-result").unwrap();
    assert_eq!(results.length(), 2);
    let first_link = panel.query_selector(".search-result h4 a").unwrap().unwrap();
    assert_eq!(first_link.text_content().unwrap(), "Orbit Mechanics");
    assert!(panel.query_selector("mark").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn unknown_query_shows_no_results() {
    let (_root, input, panel) = setup("search-none");
    type_query(&input, "xyz").await;

    let empty = panel.query_selector(".no-results").unwrap().expect("message");
    assert_eq!(empty.text_content().unwrap(), "No results found");
    assert_eq!(display(&panel), "block");
}

#[wasm_bindgen_test]
async fn short_query_hides_panel() {
    let (_root, input, panel) = setup("search-short");
    type_query(&input, "orbit").await;
    type_query(&input, "o").await;
    assert_eq!(display(&panel), "none");
}

#[wasm_bindgen_test]
async fn outside_click_hides_panel() {
    let (root, input, panel) = setup("search-outside");
    type_query(&input, "orbit").await;
    assert_eq!(display(&panel), "block");

    input.click();
    assert_eq!(display(&panel), "block");
    let elsewhere: HtmlElement = root
        .query_selector(".elsewhere")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    elsewhere.click();
    assert_eq!(display(&panel), "none");
}

#[wasm_bindgen_test]
fn markup_in_titles_is_rendered_as_text() {
    let root = mount(
        "search-escape",
        r#"<article><h2>&lt;b&gt;Bold&lt;/b&gt; claims</h2><p>Plain body text.</p></article>"#,
    );
    let cfg = scoped_config("search-escape");
    let index = search::build_index(&document(), &cfg);
    let panel: HtmlElement = document().create_element("div").unwrap().dyn_into().unwrap();
    root.append_child(&panel).unwrap();
    search::render(&document(), &panel, &index.search("bold")).expect("render");

    assert!(panel.query_selector("b").unwrap().is_none());
    let link = panel.query_selector("h4 a").unwrap().unwrap();
    assert_eq!(link.text_content().unwrap(), "<b>Bold</b> claims");
}
