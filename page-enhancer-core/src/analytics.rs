//! Event shapes forwarded to an optional global analytics function.
//!
//! The hook is called as `gtag("event", <name>, <params>)`.

use serde::Serialize;

pub const ANALYTICS_FUNCTION: &str = "gtag";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalyticsParams {
    Timing { name: String, value: u64 },
    Exception { description: String, fatal: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    /// Page load duration in milliseconds.
    LoadTiming(u64),
    /// Uncaught runtime error, always reported as non-fatal.
    Exception(String),
}

impl AnalyticsEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadTiming(_) => "timing_complete",
            Self::Exception(_) => "exception",
        }
    }

    #[must_use]
    pub fn params(&self) -> AnalyticsParams {
        match self {
            Self::LoadTiming(ms) => AnalyticsParams::Timing {
                name: "load".into(),
                value: *ms,
            },
            Self::Exception(description) => AnalyticsParams::Exception {
                description: description.clone(),
                fatal: false,
            },
        }
    }
}
