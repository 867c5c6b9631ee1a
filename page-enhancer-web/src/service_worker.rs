//! Best-effort registration of the site's update worker.

use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Window;

use crate::{dom, paths};

/// Register `script` once the page has loaded, if the browser supports
/// workers and the page is served over HTTPS.
pub fn register_after_load(win: &Window, script: &str) {
    if win.location().protocol().as_deref() != Ok("https:") {
        log::debug!("service worker skipped: insecure transport");
        return;
    }
    if !dom::has_property(&win.navigator(), "serviceWorker") {
        log::debug!("service worker skipped: unsupported");
        return;
    }
    let url = paths::asset_path(script);
    dom::after_load(win, move || spawn_local(register(url)));
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn register(url: String) {
    let Some(win) = dom::window() else {
        return;
    };
    let promise = win.navigator().service_worker().register(&url);
    match JsFuture::from(promise).await {
        Ok(_) => log::info!("ServiceWorker registration successful ({url})"),
        Err(err) => log::warn!(
            "ServiceWorker registration failed: {}",
            dom::js_error_message(&err)
        ),
    }
}
