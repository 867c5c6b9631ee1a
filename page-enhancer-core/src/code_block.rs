//! Text analysis for rendered code blocks.

use once_cell::sync::Lazy;
use regex::Regex;

static LANGUAGE_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)language-(\S+)").expect("language class pattern is valid"));

/// Text shown on the copy control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyLabel {
    Idle,
    Copied,
}

impl CopyLabel {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Idle => "Copy",
            Self::Copied => "Copied!",
        }
    }
}

pub const COPY_ARIA_LABEL: &str = "Copy code to clipboard";

/// Language named by the first `language-xxx` token of a class attribute.
#[must_use]
pub fn language_from_classes(class_name: &str) -> Option<&str> {
    LANGUAGE_CLASS
        .captures(class_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Number of lines in a block's text. A single trailing newline does not
/// start a new line.
#[must_use]
pub fn line_count(text: &str) -> usize {
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').count()
}

#[must_use]
pub fn needs_line_numbers(text: &str, min_lines: usize) -> bool {
    line_count(text) >= min_lines
}

/// Left-column content: `1\n2\n...\nN`.
#[must_use]
pub fn line_number_column(count: usize) -> String {
    (1..=count)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
