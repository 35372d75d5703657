//! Persisted light/dark theme.
//!
//! The theme is read from storage once at mount, applied as the class name of
//! the `<html>` element, and written back on every change. Toggling flips the
//! theme that is live on the document rather than the stored one, so a class
//! changed out-of-band is respected.
//!
//! TRADE-OFFS
//! ==========
//! Storage writes are best-effort: a failed write is logged and the theme is
//! still applied for the current page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::BehaviorError;

/// Binary display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than the two names is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
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

    /// Theme implied by whether the document currently carries the `dark` class.
    #[must_use]
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    /// Which of the sun/moon glyphs should be visible.
    #[must_use]
    pub fn icons(self) -> IconVisibility {
        IconVisibility { sun_visible: self == Self::Light, moon_visible: self == Self::Dark }
    }
}

/// Visibility of the two theme glyphs. Exactly one is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconVisibility {
    pub sun_visible: bool,
    pub moon_visible: bool,
}

/// Key-value port for theme persistence.
pub trait ThemeStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), BehaviorError>;
}

/// In-memory storage used in tests and when `localStorage` is unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BehaviorError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Result of applying a theme: what the host must reflect on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub theme: Theme,
    pub icons: IconVisibility,
}

impl From<Theme> for ThemeChange {
    fn from(theme: Theme) -> Self {
        Self { theme, icons: theme.icons() }
    }
}

pub struct ThemeStore<S> {
    storage: S,
    key: String,
    fallback: Theme,
    applied: Theme,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Build a store and resolve the initial theme from storage.
    pub fn new(storage: S, key: impl Into<String>, fallback: Theme) -> Self {
        let mut store = Self { storage, key: key.into(), fallback, applied: fallback };
        store.applied = store.get_theme();
        store
    }

    /// Stored theme, or the fallback when absent or unrecognized.
    #[must_use]
    pub fn get_theme(&self) -> Theme {
        match self.storage.read(&self.key) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                log::debug!("theme: ignoring unrecognized stored value {raw:?}");
                self.fallback
            }),
            None => self.fallback,
        }
    }

    /// Theme most recently applied through this store.
    #[must_use]
    pub fn applied(&self) -> Theme {
        self.applied
    }

    /// Persist and apply `theme`.
    pub fn set_theme(&mut self, theme: Theme) -> ThemeChange {
        if let Err(e) = self.storage.write(&self.key, theme.as_str()) {
            log::warn!("theme: failed to persist {}: {e}", theme.as_str());
        }
        self.applied = theme;
        log::debug!("theme: applied {}", theme.as_str());
        ThemeChange::from(theme)
    }

    /// Invert the theme currently live on the document.
    pub fn toggle(&mut self, live: Theme) -> ThemeChange {
        self.set_theme(live.toggled())
    }

    #[cfg(test)]
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
