#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod a11y_tests;
mod config_tests;
mod fixture;
mod nav_tests;
mod scroll_tests;
mod search_tests;
mod theme_tests;
