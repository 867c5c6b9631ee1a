//! One-shot page-load performance report.

use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use js_sys::Function;
use page_enhancer_core::perf::{LCP_ENTRY_TYPE, first_paint};
use page_enhancer_core::{AnalyticsEvent, EnhancerConfig, NavigationTiming, PerformanceReport};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Performance, PerformanceEntry, PerformanceObserver, PerformanceObserverEntryList, Window,
};

use crate::{analytics, dom, error::EnhanceError};

#[derive(Serialize)]
struct ObserveOptions {
    #[serde(rename = "type")]
    entry_type: &'static str,
    buffered: bool,
}

/// Start LCP observation now and report once the page has loaded and settled.
///
/// # Errors
/// Returns `Unsupported` when the browser exposes no `performance` object.
pub fn init(win: &Window, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let performance = win
        .performance()
        .ok_or(EnhanceError::Unsupported("performance"))?;
    let lcp = observe_lcp(cfg.timings.lcp_window_ms);
    let settle_ms = cfg.timings.perf_settle_ms;
    dom::after_load(win, move || {
        spawn_local(async move {
            TimeoutFuture::new(settle_ms).await;
            let report = collect(&performance, lcp.get());
            log::info!(target: "performance", "Performance Metrics: {}", report.to_json());
            if let Some(ms) = report.load_time.millis() {
                analytics::send(&AnalyticsEvent::LoadTiming(ms));
            }
        });
    });
    Ok(())
}

/// Read navigation timing and paint entries into a report.
#[must_use]
pub fn collect(performance: &Performance, lcp: Option<f64>) -> PerformanceReport {
    let timing = if dom::has_property(performance, "timing") {
        let t = performance.timing();
        NavigationTiming {
            navigation_start: t.navigation_start(),
            dom_content_loaded_end: t.dom_content_loaded_event_end(),
            load_event_end: t.load_event_end(),
        }
    } else {
        NavigationTiming::default()
    };
    let paints: Vec<(String, f64)> = performance
        .get_entries_by_type("paint")
        .iter()
        .filter_map(|entry| entry.dyn_into::<PerformanceEntry>().ok())
        .map(|entry| (entry.name(), entry.start_time()))
        .collect();
    let first = first_paint(paints.iter().map(|(name, start)| (name.as_str(), *start)));
    PerformanceReport::new(&timing, first, lcp)
}

/// Latest largest-contentful-paint time seen within the observation window.
fn observe_lcp(window_ms: u32) -> Rc<Cell<Option<f64>>> {
    let latest = Rc::new(Cell::new(None));
    match start_lcp_observer(Rc::clone(&latest)) {
        Ok(observer) => {
            Timeout::new(window_ms, move || observer.disconnect()).forget();
        }
        Err(err) => log::warn!("LCP measurement not supported: {err}"),
    }
    latest
}

fn start_lcp_observer(latest: Rc<Cell<Option<f64>>>) -> Result<PerformanceObserver, EnhanceError> {
    let Some(win) = dom::window() else {
        return Err(EnhanceError::Unsupported("window"));
    };
    if !dom::has_property(&win, "PerformanceObserver") {
        return Err(EnhanceError::Unsupported("PerformanceObserver"));
    }
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |list: JsValue| {
        let Ok(list) = list.dyn_into::<PerformanceObserverEntryList>() else {
            return;
        };
        if let Some(last) = list
            .get_entries()
            .iter()
            .filter_map(|entry| entry.dyn_into::<PerformanceEntry>().ok())
            .last()
        {
            latest.set(Some(last.start_time()));
        }
    });
    let observer = PerformanceObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    let options = serde_wasm_bindgen::to_value(&ObserveOptions {
        entry_type: LCP_ENTRY_TYPE,
        buffered: true,
    })
    .map_err(|err| EnhanceError::Js(err.to_string()))?;
    // `type` + `buffered` replays entries recorded before the observer existed.
    let observe: Function = js_sys::Reflect::get(&observer, &JsValue::from_str("observe"))?
        .dyn_into()
        .map_err(|_| EnhanceError::Unsupported("PerformanceObserver.observe"))?;
    observe.call1(&observer, &options)?;
    Ok(observer)
}
