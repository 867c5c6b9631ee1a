//! Light/dark theme toggle.

use std::cell::RefCell;
use std::rc::Rc;

use page_enhancer_core::theme::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE};
use page_enhancer_core::{EnhancerConfig, Theme, ThemeManager};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MediaQueryList, MediaQueryListEvent, Window};

use crate::{dom, error::EnhanceError, storage::PageStorage};

/// Apply the resolved theme and wire the toggle and the OS scheme listener.
///
/// # Errors
/// Returns `MissingHook` when the theme toggle is absent.
pub fn init(win: &Window, doc: &Document, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let scheme = win.match_media(DARK_SCHEME_QUERY).ok().flatten();
    let prefers_dark = scheme.as_ref().is_some_and(MediaQueryList::matches);
    let controller = ThemeController::new(win, doc, cfg, prefers_dark)?;

    let on_click = controller.clone();
    dom::listen(&controller.toggle, "click", move |_| on_click.toggle());

    if let Some(scheme) = scheme {
        let query = scheme.clone();
        dom::listen(&scheme, "change", move |event: &Event| {
            let prefers_dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| query.matches(), MediaQueryListEvent::matches);
            controller.system_changed(prefers_dark);
        });
    }
    Ok(())
}

/// The page's theme state bound to the document root and the toggle control.
#[derive(Clone)]
pub struct ThemeController {
    root: Element,
    toggle: Element,
    manager: Rc<RefCell<ThemeManager<PageStorage>>>,
}

impl ThemeController {
    /// Resolve the theme from storage or `prefers_dark` and apply it.
    ///
    /// # Errors
    /// Returns `MissingHook` when the theme toggle or the root element is absent.
    pub fn new(
        win: &Window,
        doc: &Document,
        cfg: &EnhancerConfig,
        prefers_dark: bool,
    ) -> Result<Self, EnhanceError> {
        let toggle = dom::require(doc, &cfg.selectors.theme_toggle)?;
        let root = doc
            .document_element()
            .ok_or_else(|| EnhanceError::MissingHook("html".into()))?;
        let manager = ThemeManager::resolve(
            PageStorage::open(win),
            cfg.theme_storage_key.as_str(),
            prefers_dark,
        );
        let controller = Self {
            root,
            toggle,
            manager: Rc::new(RefCell::new(manager)),
        };
        controller.render(controller.current());
        Ok(controller)
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.manager.borrow().current()
    }

    /// Flip the theme as a user choice and persist it.
    pub fn toggle(&self) {
        let saved = self
            .manager
            .borrow_mut()
            .toggle()
            .map_err(|err| EnhanceError::Storage(err.to_string()));
        if let Err(err) = saved {
            log::warn!("theme preference not saved: {err}");
        }
        self.render(self.current());
    }

    /// Follow an OS scheme change unless the visitor already chose a theme.
    pub fn system_changed(&self, prefers_dark: bool) {
        let changed = self.manager.borrow_mut().system_changed(prefers_dark);
        if let Some(theme) = changed {
            self.render(theme);
        }
    }

    fn render(&self, theme: Theme) {
        apply(&self.root, &self.toggle, theme);
    }
}

/// Set the document theme attribute and the toggle's label.
pub fn apply(root: &Element, toggle: &Element, theme: Theme) {
    let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    let _ = toggle.set_attribute("aria-label", &theme.toggle_label());
}
