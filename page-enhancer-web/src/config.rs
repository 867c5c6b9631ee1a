//! Reads page-level overrides for [`EnhancerConfig`].
//!
//! A page opts in with
//! `<script type="application/json" id="page-enhancer-config">{...}</script>`.

use page_enhancer_core::EnhancerConfig;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "page-enhancer-config";

/// Configuration for this page: the embedded overrides, or defaults when the
/// element is absent or invalid.
#[must_use]
pub fn load(doc: &Document) -> EnhancerConfig {
    doc.get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .map_or_else(EnhancerConfig::default, |json| parse_or_default(&json))
}

fn parse_or_default(json: &str) -> EnhancerConfig {
    if json.trim().is_empty() {
        return EnhancerConfig::default();
    }
    EnhancerConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("ignoring page config: {err}");
        EnhancerConfig::default()
    })
}
