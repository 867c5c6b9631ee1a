//! Page enhancer configuration.
//!
//! Every selector hook, delay and limit used by the behaviors lives here so a
//! page can override them with an embedded JSON document. Missing sections or
//! fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selector hooks the enhancer looks up in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_menu: String,
    pub hamburger_line: String,
    pub anchor_links: String,
    pub code_block: String,
    pub search_input: String,
    pub search_results: String,
    pub article: String,
    pub article_heading: String,
    pub theme_toggle: String,
    pub skip_link: String,
    pub main_content: String,
    pub cards: String,
    pub site_header: String,
    pub focusable: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: ".navbar-toggle".into(),
            nav_menu: ".navbar-menu".into(),
            hamburger_line: ".hamburger-line".into(),
            anchor_links: "a[href^=\"#\"]".into(),
            code_block: ".highlight".into(),
            search_input: ".search-input".into(),
            search_results: ".search-results".into(),
            article: "article".into(),
            article_heading: "h1, h2, h3".into(),
            theme_toggle: ".theme-toggle".into(),
            skip_link: ".skip-link".into(),
            main_content: "#main-content".into(),
            cards: ".project-card, .domain-card, .timeline-item".into(),
            site_header: ".site-header".into(),
            focusable: "a, button, input, textarea, select, [tabindex]".into(),
        }
    }
}

impl Selectors {
    fn entries(&self) -> [(&'static str, &str); 15] {
        [
            ("navToggle", &self.nav_toggle),
            ("navMenu", &self.nav_menu),
            ("hamburgerLine", &self.hamburger_line),
            ("anchorLinks", &self.anchor_links),
            ("codeBlock", &self.code_block),
            ("searchInput", &self.search_input),
            ("searchResults", &self.search_results),
            ("article", &self.article),
            ("articleHeading", &self.article_heading),
            ("themeToggle", &self.theme_toggle),
            ("skipLink", &self.skip_link),
            ("mainContent", &self.main_content),
            ("cards", &self.cards),
            ("siteHeader", &self.site_header),
            ("focusable", &self.focusable),
        ]
    }
}

/// Scheduled-callback delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    pub search_debounce_ms: u32,
    pub copy_feedback_ms: u32,
    pub perf_settle_ms: u32,
    pub lcp_window_ms: u32,
    pub announce_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            copy_feedback_ms: 2000,
            perf_settle_ms: 1000,
            lcp_window_ms: 5000,
            announce_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Height of the fixed header subtracted from anchor targets.
    pub header_offset: f64,
    /// Scroll distance past which the header gets its sticky class.
    pub sticky_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            sticky_threshold: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub min_query_chars: usize,
    pub max_results: usize,
    pub excerpt_radius: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            max_results: 5,
            excerpt_radius: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeBlockConfig {
    pub min_numbered_lines: usize,
}

impl Default for CodeBlockConfig {
    fn default() -> Self {
        Self {
            min_numbered_lines: 5,
        }
    }
}

/// Top-level configuration for the page enhancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhancerConfig {
    pub selectors: Selectors,
    pub timings: Timings,
    pub scroll: ScrollConfig,
    pub search: SearchConfig,
    pub code_blocks: CodeBlockConfig,
    pub theme_storage_key: String,
    /// Worker script registered under secure transport; `None` disables it.
    pub service_worker: Option<String>,
    pub log_level: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            timings: Timings::default(),
            scroll: ScrollConfig::default(),
            search: SearchConfig::default(),
            code_blocks: CodeBlockConfig::default(),
            theme_storage_key: "theme".into(),
            service_worker: Some("sw.js".into()),
            log_level: "info".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("selector `{0}` must not be empty")]
    EmptySelector(&'static str),
    #[error("{field} must be at least {min} (got {value})")]
    BelowMinimum {
        field: &'static str,
        min: usize,
        value: usize,
    },
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidDistance { field: &'static str, value: f64 },
    #[error("theme storage key must not be empty")]
    EmptyStorageKey,
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}

impl EnhancerConfig {
    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the behaviors.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((name, _)) = self
            .selectors
            .entries()
            .into_iter()
            .find(|(_, sel)| sel.trim().is_empty())
        {
            return Err(ConfigError::EmptySelector(name));
        }
        for (field, value) in [
            ("scroll.headerOffset", self.scroll.header_offset),
            ("scroll.stickyThreshold", self.scroll.sticky_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDistance { field, value });
            }
        }
        for (field, min, value) in [
            ("search.minQueryChars", 1, self.search.min_query_chars),
            ("search.maxResults", 1, self.search.max_results),
            ("codeBlocks.minNumberedLines", 1, self.code_blocks.min_numbered_lines),
        ] {
            if value < min {
                return Err(ConfigError::BelowMinimum { field, min, value });
            }
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.level_filter()?;
        Ok(())
    }

    /// Maximum log level requested by the page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLogLevel`] for names `log` does not know.
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}
