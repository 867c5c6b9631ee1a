#![forbid(unsafe_code)]
//! Client-side enhancements for static documentation and portfolio pages.
//!
//! Loaded as a WebAssembly module; [`start`] waits for the markup, reads the
//! page configuration and wires each behavior independently.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod analytics;
pub mod clipboard;
pub mod code_blocks;
pub mod config;
pub mod dom;
pub mod enhancer;
pub mod error;
pub mod error_handler;
pub mod logger;
pub mod nav;
pub mod paths;
pub mod perf;
pub mod scroll;
pub mod search;
pub mod service_worker;
pub mod storage;
pub mod theme;
pub mod timers;

pub use enhancer::PageEnhancer;
pub use error::EnhanceError;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let Some(win) = dom::window() else {
        return;
    };
    error_handler::install(&win);

    dom::when_ready(move || {
        let Some(doc) = win.document() else {
            return;
        };
        let config = config::load(&doc);
        match config.level_filter().map_err(EnhanceError::from) {
            Ok(level) => logger::init(level),
            Err(err) => log::warn!("keeping default log level: {err}"),
        }
        if let Some(script) = config.service_worker.as_deref() {
            service_worker::register_after_load(&win, script);
        }
        if let Err(err) = PageEnhancer::new(config).init() {
            log::warn!("page enhancer not started: {err}");
        }
    });
}
