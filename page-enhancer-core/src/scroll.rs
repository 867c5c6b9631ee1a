//! Anchor scrolling math and the sticky-header frame throttle.

/// Fragment id targeted by an in-page link, or `None` when the link should
/// keep its default behavior (`#` alone, empty, or not a fragment link).
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Viewport offset that places `element_top` just below a fixed header.
#[must_use]
pub fn scroll_offset(element_top: f64, header_offset: f64) -> f64 {
    (element_top - header_offset).max(0.0)
}

#[must_use]
pub fn is_past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Allows at most one scroll recomputation per rendered frame.
#[derive(Debug, Default)]
pub struct ScrollThrottle {
    ticking: bool,
}

impl ScrollThrottle {
    /// Record a scroll event. Returns `true` when a frame callback must be
    /// requested, `false` when one is already pending.
    pub const fn request(&mut self) -> bool {
        if self.ticking {
            false
        } else {
            self.ticking = true;
            true
        }
    }

    /// Mark the pending frame as handled.
    pub const fn frame_done(&mut self) {
        self.ticking = false;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.ticking
    }
}
