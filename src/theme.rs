//! Light/dark theme selection and persistence.
//!
//! ## Resolution Order
//!
//! The effective theme at load time is the first available of:
//!
//! 1. A valid value (`"light"` or `"dark"`) stored under the configured key.
//!    A storage error is treated as "nothing stored".
//! 2. The system `prefers-color-scheme: light` hint. A query error is treated
//!    as "no match".
//! 3. The configured fallback, `dark` by default.
//!
//! ## Toggling
//!
//! The [`ThemeController`] owns the current theme for the whole page session.
//! Each toggle flips it, tries to persist it, and re-applies it. Persistence
//! failures never surface: the page keeps working with the in-memory value.

use crate::config::ThemeConfig;
use crate::platform::{ColorSchemeQuery, PreferenceStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact lowercase names are accepted, matching what the page
/// itself writes to storage.
impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// Where a theme is made visible: the root marker attribute and the toggle
/// icon.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme, icon: &str);
}

/// Determine the theme to use at load time. Never fails.
pub fn preferred_theme(
    store: &impl PreferenceStore,
    key: &str,
    system: &impl ColorSchemeQuery,
    fallback: Theme,
) -> Theme {
    match store.load(key) {
        Ok(Some(saved)) => match saved.parse() {
            Ok(theme) => return theme,
            Err(err) => debug!(%err, "ignoring stored theme"),
        },
        Ok(None) => {}
        Err(err) => debug!(%err, "theme storage unreadable"),
    }

    match system.prefers_light() {
        Ok(true) => Theme::Light,
        Ok(false) => fallback,
        Err(err) => {
            debug!(%err, "color scheme query failed");
            fallback
        }
    }
}

/// Owns the page's theme state.
pub struct ThemeController<S, V> {
    store: S,
    surface: V,
    config: ThemeConfig,
    current: Theme,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    /// Resolve the preferred theme and apply it.
    pub fn init(
        store: S,
        system: &impl ColorSchemeQuery,
        surface: V,
        config: &ThemeConfig,
    ) -> Self {
        let current = preferred_theme(&store, &config.storage_key, system, config.fallback);
        let controller = Self {
            store,
            surface,
            config: config.clone(),
            current,
        };
        controller.apply();
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Flip the theme, persist it on a best-effort basis, and apply it.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.store.save(&self.config.storage_key, self.current.as_str()) {
            debug!(%err, theme = %self.current, "theme not persisted");
        }
        self.apply();
        self.current
    }

    fn apply(&self) {
        self.surface.apply(self.current, self.config.icon(self.current));
    }
}
