use page_enhancer_core::ConfigError;
use wasm_bindgen::JsValue;

use crate::dom::js_error_message;

/// Failure of a single behavior. None of these are shown to the visitor.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    /// The page does not carry the markup hook a behavior needs.
    #[error("missing page hook `{0}`")]
    MissingHook(String),
    /// The browser lacks a capability (observer, clipboard, storage).
    #[error("unsupported browser capability: {0}")]
    Unsupported(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("preference storage failed: {0}")]
    Storage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}
