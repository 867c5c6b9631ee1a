//! Mobile navigation toggle.

use std::cell::Cell;
use std::rc::Rc;

use page_enhancer_core::{EnhancerConfig, MenuState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent};

use crate::{dom, error::EnhanceError};

/// Wire the hamburger toggle, outside-click collapse and Escape collapse.
///
/// # Errors
/// Returns `MissingHook` when the toggle or the menu panel is absent.
pub fn init(doc: &Document, cfg: &EnhancerConfig) -> Result<(), EnhanceError> {
    let sel = &cfg.selectors;
    let toggle = dom::require_html(doc, &sel.nav_toggle)?;
    let panel = dom::require_html(doc, &sel.nav_menu)?;
    let menu = Menu {
        toggle,
        panel,
        bars: sel.hamburger_line.clone(),
        state: Rc::new(Cell::new(MenuState::default())),
    };
    menu.state.set(MenuState::from_aria_expanded(
        menu.toggle.get_attribute("aria-expanded").as_deref(),
    ));

    let on_toggle = menu.clone();
    dom::listen(&menu.toggle, "click", move |_| {
        let mut state = on_toggle.state.get();
        on_toggle.render(state.toggle());
    });

    let on_outside = menu.clone();
    dom::listen(doc, "click", move |event: &Event| {
        let mut state = on_outside.state.get();
        let inside_toggle = dom::event_within(event, &on_outside.toggle);
        let inside_panel = dom::event_within(event, &on_outside.panel);
        if state.closes_on_click(inside_toggle, inside_panel) {
            state.collapse();
            on_outside.render(state);
        }
    });

    dom::listen(doc, "keydown", move |event: &Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let mut state = menu.state.get();
        if state.closes_on_key(&key) {
            state.collapse();
            menu.render(state);
            let _ = menu.toggle.focus();
        }
    });
    Ok(())
}

#[derive(Clone)]
struct Menu {
    toggle: HtmlElement,
    panel: HtmlElement,
    bars: String,
    state: Rc<Cell<MenuState>>,
}

impl Menu {
    fn render(&self, state: MenuState) {
        self.state.set(state);
        dom::set_style(&self.panel, "display", Some(state.panel_display()));
        let _ = self
            .toggle
            .set_attribute("aria-expanded", state.aria_expanded());
        for (i, bar) in dom::find_all_in(&self.toggle, &self.bars).iter().enumerate() {
            let Some(bar) = bar.dyn_ref::<HtmlElement>() else {
                continue;
            };
            let style = state.bar_style(i);
            dom::set_style(bar, "transform", style.transform);
            dom::set_style(bar, "opacity", style.opacity);
        }
    }
}
