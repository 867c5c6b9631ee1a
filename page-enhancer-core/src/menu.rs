//! Mobile navigation menu state.

/// Expanded/collapsed state of the navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    expanded: bool,
}

/// Inline style applied to one hamburger bar. `None` clears the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

const CLEAR: BarStyle = BarStyle {
    transform: None,
    opacity: None,
};

const CROSSED: [BarStyle; 3] = [
    BarStyle {
        transform: Some("rotate(-45deg) translate(-5px, 6px)"),
        opacity: None,
    },
    BarStyle {
        transform: None,
        opacity: Some("0"),
    },
    BarStyle {
        transform: Some("rotate(45deg) translate(-5px, -6px)"),
        opacity: None,
    },
];

impl MenuState {
    #[must_use]
    pub const fn expanded() -> Self {
        Self { expanded: true }
    }

    /// State described by an `aria-expanded` attribute value.
    #[must_use]
    pub fn from_aria_expanded(value: Option<&str>) -> Self {
        Self {
            expanded: value == Some("true"),
        }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Flip the state and return the new one.
    pub const fn toggle(&mut self) -> Self {
        self.expanded = !self.expanded;
        *self
    }

    /// Force the collapsed state. Returns `true` if the menu was open.
    pub const fn collapse(&mut self) -> bool {
        let was_open = self.expanded;
        self.expanded = false;
        was_open
    }

    /// Value for the toggle's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    /// CSS `display` value for the menu panel.
    #[must_use]
    pub const fn panel_display(self) -> &'static str {
        if self.expanded { "block" } else { "none" }
    }

    /// Style for the bar at `index`; bars beyond the third are always cleared.
    #[must_use]
    pub fn bar_style(self, index: usize) -> BarStyle {
        if self.expanded {
            CROSSED.get(index).copied().unwrap_or(CLEAR)
        } else {
            CLEAR
        }
    }

    /// Whether a click landing outside the toggle and the panel should close the menu.
    #[must_use]
    pub const fn closes_on_click(self, inside_toggle: bool, inside_panel: bool) -> bool {
        self.expanded && !inside_toggle && !inside_panel
    }

    /// Whether a key press should close the menu.
    #[must_use]
    pub fn closes_on_key(self, key: &str) -> bool {
        self.expanded && key == "Escape"
    }
}
