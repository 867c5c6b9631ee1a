//! Page Enhancer core
//!
//! Platform-agnostic logic behind the page enhancer: search indexing and
//! excerpts, theme resolution, menu and scroll state, code-block analysis and
//! performance reporting. Nothing here touches the DOM; the web crate supplies
//! storage and document access.

pub mod a11y;
pub mod analytics;
pub mod code_block;
pub mod config;
pub mod menu;
pub mod perf;
pub mod scroll;
pub mod search;
pub mod theme;

// Re-export commonly used types
pub use analytics::{ANALYTICS_FUNCTION, AnalyticsEvent, AnalyticsParams};
pub use code_block::{
    COPY_ARIA_LABEL, CopyLabel, language_from_classes, line_count, line_number_column,
    needs_line_numbers,
};
pub use config::{
    CodeBlockConfig, ConfigError, EnhancerConfig, ScrollConfig, SearchConfig, Selectors, Timings,
};
pub use menu::{BarStyle, MenuState};
pub use perf::{Metric, NavigationTiming, PerformanceReport};
pub use scroll::{ScrollThrottle, anchor_target, is_past_threshold, scroll_offset};
pub use search::{Excerpt, SearchEntry, SearchHit, SearchIndex, SearchOutcome, Segment};
pub use theme::{MemoryStorage, PreferenceStorage, Theme, ThemeManager};
