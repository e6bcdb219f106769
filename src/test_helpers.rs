//! Shared test doubles for the behavior modules.
//!
//! Each behavior is written against a small trait (storage, color-scheme
//! query, nav surface, skill bar, ...). The fakes here record every call so
//! tests can assert on exactly what a browser would have seen.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let store = MemoryStore::with("portfolio_theme", "light");
//! let surface = RecordingThemeSurface::default();
//! let controller = ThemeController::init(store, &SystemScheme::Dark, surface, &config);
//! assert_eq!(controller.surface().applied(), vec![(Theme::Light, "☀️".to_string())]);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::nav::NavSurface;
use crate::platform::{AccessError, ColorSchemeQuery, PreferenceStore};
use crate::skills::SkillBar;
use crate::theme::{Theme, ThemeSurface};

// =========================================================================
// Storage and media query
// =========================================================================

/// In-memory `localStorage`. Can be switched to fail every access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    broken: Cell<bool>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// A store whose every access throws, like a disabled `localStorage`.
    pub fn broken() -> Self {
        let store = Self::default();
        store.broken.set(true);
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<(), AccessError> {
        if self.broken.get() {
            Err(AccessError::Failed {
                facility: "localStorage",
                reason: "SecurityError: access denied".into(),
            })
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, AccessError> {
        self.check()?;
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AccessError> {
        self.check()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Fixed answer for the `prefers-color-scheme: light` query.
#[derive(Debug, Clone, Copy)]
pub enum SystemScheme {
    Light,
    Dark,
    /// `matchMedia` is missing or throws.
    Unsupported,
}

impl ColorSchemeQuery for SystemScheme {
    fn prefers_light(&self) -> Result<bool, AccessError> {
        match self {
            SystemScheme::Light => Ok(true),
            SystemScheme::Dark => Ok(false),
            SystemScheme::Unsupported => Err(AccessError::Unavailable("matchMedia")),
        }
    }
}

// =========================================================================
// DOM surfaces
// =========================================================================

/// Records every theme application in order.
#[derive(Debug, Default)]
pub struct RecordingThemeSurface {
    applied: RefCell<Vec<(Theme, String)>>,
}

impl RecordingThemeSurface {
    pub fn applied(&self) -> Vec<(Theme, String)> {
        self.applied.borrow().clone()
    }

    pub fn last(&self) -> Option<(Theme, String)> {
        self.applied.borrow().last().cloned()
    }
}

impl ThemeSurface for RecordingThemeSurface {
    fn apply(&self, theme: Theme, icon: &str) {
        self.applied.borrow_mut().push((theme, icon.to_string()));
    }
}

/// A menu container plus its toggle button.
#[derive(Debug, Default)]
pub struct FakeNav {
    open: Cell<bool>,
    aria_expanded: RefCell<Option<String>>,
}

impl FakeNav {
    pub fn aria_expanded(&self) -> Option<String> {
        self.aria_expanded.borrow().clone()
    }

    pub fn closed_with_aria() -> Self {
        let nav = Self::default();
        *nav.aria_expanded.borrow_mut() = Some("false".to_string());
        nav
    }
}

impl NavSurface for FakeNav {
    fn is_open(&self) -> bool {
        self.open.get()
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
        *self.aria_expanded.borrow_mut() = Some(open.to_string());
    }
}

/// A `.bar` element with an optional `data-level` attribute.
#[derive(Debug, Default)]
pub struct FakeBar {
    level: Option<String>,
    filled: Cell<bool>,
    fills: Cell<u32>,
    style: RefCell<HashMap<String, String>>,
}

impl FakeBar {
    pub fn new(level: Option<&str>) -> Self {
        Self {
            level: level.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.style.borrow().get(name).cloned()
    }

    /// How many times a fill was written to this bar.
    pub fn fill_count(&self) -> u32 {
        self.fills.get()
    }
}

impl SkillBar for FakeBar {
    fn level_attribute(&self) -> Option<String> {
        self.level.clone()
    }

    fn is_filled(&self) -> bool {
        self.filled.get()
    }

    fn fill(&self, property: &str, width: &str) {
        self.style
            .borrow_mut()
            .insert(property.to_string(), width.to_string());
        self.filled.set(true);
        self.fills.set(self.fills.get() + 1);
    }
}
