//! Page-load performance report.

use std::fmt;

use serde::{Serialize, Serializer};

pub const FIRST_PAINT: &str = "first-paint";
pub const LCP_ENTRY_TYPE: &str = "largest-contentful-paint";

/// Milestones from the navigation timing record, in epoch milliseconds.
/// Zero means the milestone has not been reached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationTiming {
    pub navigation_start: f64,
    pub dom_content_loaded_end: f64,
    pub load_event_end: f64,
}

impl NavigationTiming {
    #[must_use]
    pub fn load_time(&self) -> Metric {
        Metric::between(self.navigation_start, self.load_event_end)
    }

    #[must_use]
    pub fn dom_ready(&self) -> Metric {
        Metric::between(self.navigation_start, self.dom_content_loaded_end)
    }
}

/// A timing value in whole milliseconds, or unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    Millis(u64),
    #[default]
    NotAvailable,
}

impl Metric {
    /// Round a millisecond reading; negative or non-finite readings are unavailable.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_millis(value: f64) -> Self {
        if value.is_finite() && value >= 0.0 {
            Self::Millis(value.round() as u64)
        } else {
            Self::NotAvailable
        }
    }

    fn between(start: f64, end: f64) -> Self {
        if start <= 0.0 || end <= 0.0 {
            Self::NotAvailable
        } else {
            Self::from_millis(end - start)
        }
    }

    #[must_use]
    pub const fn millis(self) -> Option<u64> {
        match self {
            Self::Millis(ms) => Some(ms),
            Self::NotAvailable => None,
        }
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NotAvailable, Self::from_millis)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millis(ms) => write!(f, "{ms}ms"),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Structured record emitted once after the page settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub load_time: Metric,
    pub dom_ready: Metric,
    pub first_paint: Metric,
    pub largest_contentful_paint: Metric,
}

impl PerformanceReport {
    #[must_use]
    pub fn new(timing: &NavigationTiming, first_paint: Option<f64>, lcp: Option<f64>) -> Self {
        Self {
            load_time: timing.load_time(),
            dom_ready: timing.dom_ready(),
            first_paint: first_paint.into(),
            largest_contentful_paint: lcp.into(),
        }
    }

    /// The report as a JSON object for the log record.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

/// Start time of the `first-paint` entry among `(name, start_time)` paint entries.
#[must_use]
pub fn first_paint<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Option<f64> {
    entries
        .into_iter()
        .find(|(name, _)| *name == FIRST_PAINT)
        .map(|(_, start)| start)
}
