//! In-page search over the articles rendered at startup.

use std::rc::Rc;

use page_enhancer_core::search::{ELLIPSIS, NO_RESULTS_TEXT};
use page_enhancer_core::{EnhancerConfig, Excerpt, SearchEntry, SearchIndex, SearchOutcome};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlAnchorElement, HtmlElement, HtmlInputElement};

use crate::{dom, error::EnhanceError, timers::Debounce};

/// Build the index and wire the debounced input handler.
///
/// # Errors
/// Returns `MissingHook` when the search input or the results panel is absent.
pub fn init(doc: &Document, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let sel = &cfg.selectors;
    let input: HtmlInputElement = dom::require(doc, &sel.search_input)?
        .dyn_into()
        .map_err(|_| EnhanceError::MissingHook(sel.search_input.clone()))?;
    let panel = dom::require_html(doc, &sel.search_results)?;
    let index = Rc::new(build_index(doc, cfg));
    log::debug!("search index holds {} articles", index.len());

    let debounce = Debounce::new(cfg.timings.search_debounce_ms);
    let source = input.clone();
    let results = panel.clone();
    let document = doc.clone();
    dom::listen(&input, "input", move |_| {
        let query = source.value();
        let index = Rc::clone(&index);
        let results = results.clone();
        let document = document.clone();
        debounce.schedule(move || {
            if let Err(err) = render(&document, &results, &index.search(&query)) {
                log::warn!("search results not rendered: {err}");
            }
        });
    });

    dom::listen(doc, "click", move |event: &Event| {
        if !dom::event_within(event, &input) && !dom::event_within(event, &panel) {
            hide(&panel);
        }
    });
    Ok(())
}

/// Index every article currently in the document, in document order.
#[must_use]
pub fn build_index(doc: &Document, cfg: &EnhancerConfig) -> SearchIndex<Element> {
    let mut index = SearchIndex::new(cfg.search);
    for article in dom::find_all(doc, &cfg.selectors.article) {
        let title = dom::find_in(&article, &cfg.selectors.article_heading)
            .and_then(|heading| heading.text_content())
            .unwrap_or_default();
        let text = article.text_content().unwrap_or_default();
        let url = dom::find_in(&article, "a")
            .and_then(|link| link.dyn_into::<HtmlAnchorElement>().ok())
            .map(|link| link.href())
            .unwrap_or_default();
        index.push(SearchEntry::new(&title, &text, url, article));
    }
    index
}

/// Show `outcome` in the results panel.
///
/// # Errors
/// Returns an error if result nodes cannot be created.
pub fn render(
    doc: &Document,
    panel: &HtmlElement,
    outcome: &SearchOutcome<'_, Element>,
) -> Result<(), EnhanceError> {
    let hits = match outcome {
        SearchOutcome::Cleared => {
            hide(panel);
            return Ok(());
        }
        SearchOutcome::NoResults => {
            panel.set_inner_html("");
            let empty = doc.create_element("div")?;
            empty.set_class_name("no-results");
            empty.set_text_content(Some(NO_RESULTS_TEXT));
            panel.append_child(&empty)?;
            show(panel);
            return Ok(());
        }
        SearchOutcome::Matches { hits, .. } => hits,
    };

    panel.set_inner_html("");
    for hit in hits {
        let item = doc.create_element("div")?;
        item.set_class_name("search-result");
        let heading = doc.create_element("h4")?;
        let link = doc.create_element("a")?;
        link.set_attribute("href", &hit.entry.url)?;
        link.set_text_content(Some(&hit.entry.title));
        heading.append_child(&link)?;
        item.append_child(&heading)?;
        let excerpt = excerpt_node(doc, &hit.excerpt)?;
        item.append_child(&excerpt)?;
        panel.append_child(&item)?;
    }
    show(panel);
    Ok(())
}

fn excerpt_node(doc: &Document, excerpt: &Excerpt) -> Result<Element, EnhanceError> {
    let para = doc.create_element("p")?;
    if excerpt.leading_ellipsis {
        para.append_child(&doc.create_text_node(ELLIPSIS))?;
    }
    for segment in &excerpt.segments {
        if segment.highlighted {
            let mark = doc.create_element("mark")?;
            mark.set_text_content(Some(&segment.text));
            para.append_child(&mark)?;
        } else {
            para.append_child(&doc.create_text_node(&segment.text))?;
        }
    }
    if excerpt.trailing_ellipsis {
        para.append_child(&doc.create_text_node(ELLIPSIS))?;
    }
    Ok(para)
}

fn show(panel: &HtmlElement) {
    dom::set_style(panel, "display", Some("block"));
}

fn hide(panel: &HtmlElement) {
    dom::set_style(panel, "display", Some("none"));
}
