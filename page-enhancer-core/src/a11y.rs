// Accessibility helpers

/// Class added to every focusable element so the injected rule applies.
pub const ENHANCED_FOCUS_CLASS: &str = "enhanced-focus";
/// Screen-reader-only utility class.
pub const SR_ONLY_CLASS: &str = "sr-only";

/// Focus outline and screen reader utilities injected once per page.
///
/// The outline applies on `:focus` so keyboard and pointer users see the same ring.
#[must_use]
pub const fn focus_css() -> &'static str {
    ".enhanced-focus:focus{outline:3px solid #3498db;outline-offset:2px;border-radius:4px} .sr-only{position:absolute;width:1px;height:1px;padding:0;margin:-1px;overflow:hidden;clip:rect(0,0,0,0);white-space:nowrap;border:0}"
}

/// Keys that activate a card's primary link.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Live-region text announced after page load.
#[must_use]
pub fn announcement_text(page_title: &str) -> String {
    format!("Navigated to {}", page_title.trim())
}
