//! Light/dark theme and the preference store it persists to.
//!
//! The browser host backs [`PreferenceStore`] with `localStorage`; tests use
//! [`MemoryStore`]. Persistence is best-effort: a store that cannot read
//! yields the default theme and a failed write only logs.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;

use crate::consts::{ICON_MOON, ICON_SUN, THEME_STORAGE_KEY};

/// Page color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to `data-theme` and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class shown on the toggle while this theme is active.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => ICON_MOON,
            Self::Dark => ICON_SUN,
        }
    }

    /// Icon class that must be removed when this theme is applied.
    #[must_use]
    pub fn stale_icon(self) -> &'static str {
        self.toggled().icon()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable string key-value slot for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Read the persisted theme, defaulting to light.
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    store
        .load(THEME_STORAGE_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Persist `theme` under the theme key.
pub fn save_theme(store: &mut impl PreferenceStore, theme: Theme) {
    store.save(THEME_STORAGE_KEY, theme.as_str());
}

/// In-memory store for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}
