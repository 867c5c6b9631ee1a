//! The page enhancer: runs every behavior once against the loaded document.

use page_enhancer_core::EnhancerConfig;
use web_sys::{Document, Window};

use crate::{a11y, code_blocks, dom, error::EnhanceError, nav, perf, scroll, search, theme};

pub struct PageEnhancer {
    config: EnhancerConfig,
}

impl PageEnhancer {
    #[must_use]
    pub const fn new(config: EnhancerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    /// Wire every behavior. A behavior whose hooks are missing, or that fails,
    /// is skipped without affecting the others.
    ///
    /// # Errors
    /// Returns an error only when there is no browser window or document.
    pub fn init(&self) -> Result<(), EnhanceError> {
        let win = dom::window().ok_or(EnhanceError::Unsupported("window"))?;
        let doc = win
            .document()
            .ok_or(EnhanceError::Unsupported("document"))?;
        self.init_with(&win, &doc);
        Ok(())
    }

    fn init_with(&self, win: &Window, doc: &Document) {
        let cfg = &self.config;
        report("navigation", nav::init(doc, cfg));
        report("anchor scrolling", scroll::init_anchor_links(doc, cfg));
        report("sticky header", scroll::init_sticky_header(win, doc, cfg));
        report("code blocks", code_blocks::init(doc, cfg));
        report("search", search::init(doc, cfg));
        report("theme", theme::init(win, doc, cfg));
        report("performance", perf::init(win, cfg));
        report("skip link", a11y::init_skip_link(doc, cfg));
        report("cards", a11y::init_cards(doc, cfg));
        report("announcement", a11y::announce_page(doc, cfg));
        report("focus indicators", a11y::init_focus_indicators(doc, cfg));
    }
}

impl Default for PageEnhancer {
    fn default() -> Self {
        Self::new(EnhancerConfig::default())
    }
}

fn report(behavior: &str, result: Result<(), EnhanceError>) {
    match result {
        Ok(()) => log::debug!("{behavior}: ready"),
        Err(EnhanceError::MissingHook(hook)) => {
            log::debug!("{behavior}: no `{hook}` on page, skipped");
        }
        Err(err) => log::warn!("{behavior}: {err}"),
    }
}
