//! Light/dark theme resolution and persistence.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Attribute set on the document element.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Media query that signals an OS-level dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Accessible label for the toggle: describes what clicking switches to.
    #[must_use]
    pub fn toggle_label(self) -> String {
        format!("Switch to {} mode", self.opposite().as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Durable per-origin key/value storage for the theme preference.
/// Platform-specific implementations should provide this.
pub trait PreferenceStorage {
    type Error: std::error::Error + 'static;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn store(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory storage used when durable storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStorage for MemoryStorage {
    type Error = Infallible;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Resolves, toggles and persists the active theme.
#[derive(Debug)]
pub struct ThemeManager<S: PreferenceStorage> {
    storage: S,
    key: String,
    current: Theme,
    explicit: bool,
}

impl<S: PreferenceStorage> ThemeManager<S> {
    /// Resolve the initial theme: stored preference, else the OS signal, else light.
    /// A stored value that cannot be read or parsed counts as absent.
    pub fn resolve(storage: S, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let stored = match storage.load(&key) {
            Ok(value) => value.and_then(|v| v.parse::<Theme>().ok()),
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                None
            }
        };
        Self {
            current: stored.unwrap_or(Theme::from_prefers_dark(prefers_dark)),
            explicit: stored.is_some(),
            storage,
            key,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Whether the user has an explicit preference on record.
    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        self.explicit
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Flip the theme and persist it. The in-memory theme changes even when
    /// persisting fails.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the new value could not be written.
    pub fn toggle(&mut self) -> Result<Theme, S::Error> {
        self.current = self.current.opposite();
        self.explicit = true;
        self.storage.store(&self.key, self.current.as_str())?;
        Ok(self.current)
    }

    /// Follow an OS-level scheme change. Returns the theme to apply, or `None`
    /// when an explicit preference overrides the system.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.explicit {
            return None;
        }
        self.current = Theme::from_prefers_dark(prefers_dark);
        Some(self.current)
    }
}
