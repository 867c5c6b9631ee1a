//! Copying text to the system clipboard.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::{dom, error::EnhanceError};

/// Copy `text`, trying the async clipboard first and falling back to a
/// hidden selection plus `execCommand("copy")`.
///
/// # Errors
/// Returns an error only when both paths fail.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn copy(text: &str) -> Result<(), EnhanceError> {
    match write_text(text).await {
        Ok(()) => Ok(()),
        Err(err) => {
            log::warn!("Failed to copy code: {err}; using selection fallback");
            copy_with_selection(text)
        }
    }
}

#[allow(clippy::future_not_send)]
async fn write_text(text: &str) -> Result<(), EnhanceError> {
    let win = dom::window().ok_or(EnhanceError::Unsupported("window"))?;
    let navigator = win.navigator();
    if !dom::has_property(&navigator, "clipboard") {
        return Err(EnhanceError::Unsupported("clipboard"));
    }
    JsFuture::from(navigator.clipboard().write_text(text)).await?;
    Ok(())
}

/// Copy through a temporary off-screen text area.
///
/// # Errors
/// Returns an error when the document has no body or the copy command is refused.
pub fn copy_with_selection(text: &str) -> Result<(), EnhanceError> {
    let doc = dom::document().ok_or(EnhanceError::Unsupported("document"))?;
    let body = doc
        .body()
        .ok_or_else(|| EnhanceError::MissingHook("body".into()))?;
    let area: HtmlTextAreaElement = doc
        .create_element("textarea")?
        .dyn_into()
        .map_err(|_| EnhanceError::Js("textarea has unexpected type".into()))?;
    area.set_value(text);
    area.set_attribute("readonly", "")?;
    dom::set_style(&area, "position", Some("fixed"));
    dom::set_style(&area, "opacity", Some("0"));
    body.append_child(&area)?;
    area.select();
    let copied = doc
        .dyn_ref::<HtmlDocument>()
        .map(|html| html.exec_command("copy"))
        .transpose()?
        .unwrap_or(false);
    area.remove();
    if copied {
        Ok(())
    } else {
        Err(EnhanceError::Unsupported("execCommand copy"))
    }
}
