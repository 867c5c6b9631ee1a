//! In-page article search.
//!
//! The index is built once from the article nodes present at startup and is
//! never rebuilt. Matching is a case-insensitive substring test on the title
//! and the lowercased text content; results keep document order.

use regex::RegexBuilder;

use crate::config::SearchConfig;

pub const ELLIPSIS: &str = "...";
pub const NO_RESULTS_TEXT: &str = "No results found";

/// One indexed article. `N` is the caller's handle to the source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry<N> {
    pub title: String,
    /// Lowercased text with whitespace runs collapsed to single spaces.
    pub content: String,
    pub url: String,
    pub node: N,
}

impl<N> SearchEntry<N> {
    pub fn new(title: &str, text: &str, url: impl Into<String>, node: N) -> Self {
        Self {
            title: title.trim().to_string(),
            content: normalize_text(text).to_lowercase(),
            url: url.into(),
            node,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.contains(needle)
    }
}

fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A run of excerpt text, optionally wrapped in an emphasis marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// Window of content around the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    pub segments: Vec<Segment>,
}

impl Excerpt {
    /// Build the excerpt of `content` around the first occurrence of `query`,
    /// keeping `radius` characters on each side. The excerpt text is lowercased.
    #[must_use]
    pub fn around(content: &str, query: &str, radius: usize) -> Self {
        let needle = query.to_lowercase();
        let lowered = content.to_lowercase();
        let total = lowered.chars().count();
        let needle_len = needle.chars().count();
        let (start, end) = match lowered.find(&needle) {
            Some(byte_idx) if !needle.is_empty() => {
                let char_idx = lowered[..byte_idx].chars().count();
                (
                    char_idx.saturating_sub(radius),
                    (char_idx + needle_len + radius).min(total),
                )
            }
            // Title-only match: the window a miss at index -1 would give.
            _ => (0, (needle_len + radius).saturating_sub(1).min(total)),
        };
        let window: String = lowered.chars().skip(start).take(end - start).collect();
        Self {
            leading_ellipsis: start > 0,
            trailing_ellipsis: end < total,
            segments: highlight(&window, query),
        }
    }

    /// The excerpt as plain text, ellipses included.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        if self.leading_ellipsis {
            out.push_str(ELLIPSIS);
        }
        for seg in &self.segments {
            out.push_str(&seg.text);
        }
        if self.trailing_ellipsis {
            out.push_str(ELLIPSIS);
        }
        out
    }
}

/// Split `text` into segments, marking every case-insensitive occurrence of `query`.
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let plain = |t: &str| Segment {
        text: t.to_string(),
        highlighted: false,
    };
    if query.is_empty() || text.is_empty() {
        return if text.is_empty() { vec![] } else { vec![plain(text)] };
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return vec![plain(text)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in pattern.find_iter(text) {
        if m.start() > last {
            segments.push(plain(&text[last..m.start()]));
        }
        segments.push(Segment {
            text: m.as_str().to_string(),
            highlighted: true,
        });
        last = m.end();
    }
    if last < text.len() {
        segments.push(plain(&text[last..]));
    }
    segments
}

/// A matching entry plus its rendered excerpt.
#[derive(Debug)]
pub struct SearchHit<'a, N> {
    pub entry: &'a SearchEntry<N>,
    pub excerpt: Excerpt,
}

#[derive(Debug)]
pub enum SearchOutcome<'a, N> {
    /// Query too short: the results panel is hidden.
    Cleared,
    NoResults,
    /// Up to `max_results` hits in index order; `total` counts every match.
    Matches {
        hits: Vec<SearchHit<'a, N>>,
        total: usize,
    },
}

#[derive(Debug, Clone)]
pub struct SearchIndex<N> {
    entries: Vec<SearchEntry<N>>,
    config: SearchConfig,
}

impl<N> SearchIndex<N> {
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    pub fn push(&mut self, entry: SearchEntry<N>) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[SearchEntry<N>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn search(&self, query: &str) -> SearchOutcome<'_, N> {
        let query = query.trim();
        if query.chars().count() < self.config.min_query_chars {
            return SearchOutcome::Cleared;
        }
        let needle = query.to_lowercase();
        let matched: Vec<&SearchEntry<N>> =
            self.entries.iter().filter(|e| e.matches(&needle)).collect();
        if matched.is_empty() {
            return SearchOutcome::NoResults;
        }
        let total = matched.len();
        let hits = matched
            .into_iter()
            .take(self.config.max_results)
            .map(|entry| SearchHit {
                entry,
                excerpt: Excerpt::around(&entry.content, query, self.config.excerpt_radius),
            })
            .collect();
        SearchOutcome::Matches { hits, total }
    }
}

impl<N> Default for SearchIndex<N> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
