//! Copy buttons, language labels and line numbers for rendered code blocks.
//!
//! Every step checks for its own earlier output, so running the enhancer
//! twice over the same block leaves it unchanged.

use page_enhancer_core::{
    COPY_ARIA_LABEL, CopyLabel, EnhancerConfig, language_from_classes, line_count,
    line_number_column, needs_line_numbers,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

use crate::{clipboard, dom, error::EnhanceError, timers::Debounce};

pub const COPY_BUTTON_CLASS: &str = "copy-button";
pub const COPIED_CLASS: &str = "copied";
pub const LANGUAGE_ATTRIBUTE: &str = "data-lang";
pub const LINE_NUMBERS_CLASS: &str = "linenos";

/// Enhance every code block on the page.
///
/// # Errors
/// Returns `MissingHook` when the page has no code blocks.
pub fn init(doc: &Document, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let blocks = dom::find_all(doc, &cfg.selectors.code_block);
    if blocks.is_empty() {
        return Err(EnhanceError::MissingHook(cfg.selectors.code_block.clone()));
    }
    for block in &blocks {
        enhance_block(doc, block, cfg);
    }
    log::debug!("enhanced {} code blocks", blocks.len());
    Ok(())
}

/// Apply all three enhancements to one block.
pub fn enhance_block(doc: &Document, block: &Element, cfg: &EnhancerConfig) {
    if let Err(err) = add_copy_button(doc, block, cfg.timings.copy_feedback_ms) {
        log::warn!("copy button not added: {err}");
    }
    add_language_label(block);
    if let Err(err) = add_line_numbers(doc, block, cfg.code_blocks.min_numbered_lines) {
        log::warn!("line numbers not added: {err}");
    }
}

fn add_copy_button(doc: &Document, block: &Element, feedback_ms: u32) -> Result<(), EnhanceError> {
    if dom::find_in(block, &format!(".{COPY_BUTTON_CLASS}")).is_some() {
        return Ok(());
    }
    let button: HtmlElement = doc
        .create_element("button")?
        .dyn_into()
        .map_err(|_| EnhanceError::Js("button has unexpected type".into()))?;
    button.set_class_name(COPY_BUTTON_CLASS);
    button.set_text_content(Some(CopyLabel::Idle.text()));
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", COPY_ARIA_LABEL)?;

    let source = block.clone();
    let feedback = button.clone();
    let reset = Debounce::new(feedback_ms);
    dom::listen(&button, "click", move |_| {
        let Some(text) = code_text(&source) else {
            return;
        };
        let feedback = feedback.clone();
        let reset = reset.clone();
        spawn_local(async move {
            if let Err(err) = clipboard::copy(&text).await {
                log::warn!("copy fallback failed: {err}");
            }
            show_copied(&feedback, &reset);
        });
    });

    if let Some(block) = block.dyn_ref::<HtmlElement>() {
        dom::set_style(block, "position", Some("relative"));
    }
    block.append_child(&button)?;
    Ok(())
}

fn show_copied(button: &HtmlElement, reset: &Debounce) {
    button.set_text_content(Some(CopyLabel::Copied.text()));
    let _ = button.class_list().add_1(COPIED_CLASS);
    let button = button.clone();
    reset.schedule(move || {
        button.set_text_content(Some(CopyLabel::Idle.text()));
        let _ = button.class_list().remove_1(COPIED_CLASS);
    });
}

/// Text of the block's source code, excluding any injected line numbers.
#[must_use]
pub fn code_text(block: &Element) -> Option<String> {
    dom::find_in(block, "code")
        .or_else(|| content_pre(block))
        .and_then(|el| el.text_content())
}

/// The `pre` holding the block's source, even after it was moved into the
/// line-number layout.
fn content_pre(block: &Element) -> Option<Element> {
    dom::find_in(block, "code")
        .and_then(|code| code.closest("pre").ok().flatten())
        .or_else(|| dom::find_in(block, "pre"))
}

fn add_language_label(block: &Element) {
    let from_pre = content_pre(block).map(|pre| pre.class_name());
    let from_code = dom::find_in(block, "code").map(|code| code.class_name());
    let language = [from_pre, from_code]
        .into_iter()
        .flatten()
        .find_map(|classes| language_from_classes(&classes).map(str::to_string));
    if let Some(language) = language {
        let _ = block.set_attribute(LANGUAGE_ATTRIBUTE, &language);
    }
}

fn add_line_numbers(doc: &Document, block: &Element, min_lines: usize) -> Result<(), EnhanceError> {
    if dom::find_in(block, &format!(".{LINE_NUMBERS_CLASS}")).is_some() {
        return Ok(());
    }
    let Some(code) = dom::find_in(block, "code") else {
        return Ok(());
    };
    let Some(pre) = code.closest("pre")? else {
        return Ok(());
    };
    let text = code.text_content().unwrap_or_default();
    if !needs_line_numbers(&text, min_lines) {
        return Ok(());
    }
    let Some(parent) = pre.parent_node() else {
        return Ok(());
    };

    let table = doc.create_element("table")?;
    let row = doc.create_element("tr")?;
    let numbers_cell = doc.create_element("td")?;
    numbers_cell.set_class_name(LINE_NUMBERS_CLASS);
    let numbers = doc.create_element("pre")?;
    numbers.set_text_content(Some(&line_number_column(line_count(&text))));
    numbers_cell.append_child(&numbers)?;
    let code_cell = doc.create_element("td")?;
    code_cell.set_class_name("code");

    parent.replace_child(&table, &pre)?;
    code_cell.append_child(&pre)?;
    row.append_child(&numbers_cell)?;
    row.append_child(&code_cell)?;
    table.append_child(&row)?;
    Ok(())
}
