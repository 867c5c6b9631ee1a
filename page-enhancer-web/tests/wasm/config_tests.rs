use page_enhancer_web::config::{self, CONFIG_ELEMENT_ID};
use wasm_bindgen_test::*;

use crate::fixture::{document, mount};

#[wasm_bindgen_test]
fn embedded_overrides_are_read() {
    let root = mount(
        "config-embedded",
        &format!(
            r#"<script type="application/json" id="{CONFIG_ELEMENT_ID}">
                {{"timings": {{"searchDebounceMs": 150}}, "themeStorageKey": "site.theme"}}
            </script>"#
        ),
    );
    let cfg = config::load(&document());
    root.remove();

    assert_eq!(cfg.timings.search_debounce_ms, 150);
    assert_eq!(cfg.theme_storage_key, "site.theme");
    assert_eq!(cfg.timings.copy_feedback_ms, 2000);
}
