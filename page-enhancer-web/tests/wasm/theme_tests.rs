use page_enhancer_core::Theme;
use page_enhancer_core::theme::THEME_ATTRIBUTE;
use page_enhancer_web::theme::{self, ThemeController};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use crate::fixture::{document, mount, scoped_config};

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .expect("localStorage")
}

fn current_theme() -> String {
    document()
        .document_element()
        .unwrap()
        .get_attribute(THEME_ATTRIBUTE)
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn stored_preference_wins() {
    let key = "page-enhancer-test.stored";
    local_storage().set_item(key, "dark").unwrap();
    mount("theme-stored", r#"<button class="theme-toggle"></button>"#);
    let mut cfg = scoped_config("theme-stored");
    cfg.theme_storage_key = key.into();

    theme::init(&web_sys::window().unwrap(), &document(), &cfg).expect("theme init");
    assert_eq!(current_theme(), "dark");
    let toggle = document().query_selector("#theme-stored .theme-toggle").unwrap().unwrap();
    assert_eq!(
        toggle.get_attribute("aria-label").as_deref(),
        Some("Switch to light mode")
    );
}

#[wasm_bindgen_test]
fn toggling_twice_restores_and_persists() {
    let key = "page-enhancer-test.toggle";
    local_storage().remove_item(key).unwrap();
    let root = mount("theme-toggle", r#"<button class="theme-toggle"></button>"#);
    let mut cfg = scoped_config("theme-toggle");
    cfg.theme_storage_key = key.into();
    theme::init(&web_sys::window().unwrap(), &document(), &cfg).expect("theme init");

    let initial = current_theme();
    let toggle: HtmlElement = root
        .query_selector(".theme-toggle")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    toggle.click();
    assert_ne!(current_theme(), initial);
    assert_eq!(local_storage().get_item(key).unwrap(), Some(current_theme()));

    toggle.click();
    assert_eq!(current_theme(), initial);
    assert_eq!(local_storage().get_item(key).unwrap(), Some(initial));
}

#[wasm_bindgen_test]
fn system_changes_stop_after_explicit_toggle() {
    let key = "page-enhancer-test.system";
    local_storage().remove_item(key).unwrap();
    mount("theme-system", r#"<button class="theme-toggle"></button>"#);
    let mut cfg = scoped_config("theme-system");
    cfg.theme_storage_key = key.into();
    let controller =
        ThemeController::new(&web_sys::window().unwrap(), &document(), &cfg, false)
            .expect("theme controller");
    assert_eq!(controller.current(), Theme::Light);

    controller.system_changed(true);
    assert_eq!(current_theme(), "dark");
    assert_eq!(local_storage().get_item(key).unwrap(), None);

    controller.toggle();
    assert_eq!(current_theme(), "light");
    assert_eq!(local_storage().get_item(key).unwrap().as_deref(), Some("light"));

    controller.system_changed(true);
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(current_theme(), "light");
}
