//! Behavior configuration module.
//!
//! Handles loading, validating, and merging the behavior config. Every value
//! has a default, so a page without any config block behaves exactly like the
//! stock portfolio: French validation message, `portfolio_theme` storage key,
//! dark fallback theme.
//!
//! ## Config Location
//!
//! In the browser the config is read from an inline block in the page:
//!
//! ```html
//! <script type="application/toml" id="portfolio-config">
//! [contact]
//! recipient = "me@example.org"
//! </script>
//! ```
//!
//! The native CLI reads the same TOML from a file (`--config path`).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! log_level = "warn"
//!
//! [theme]
//! storage_key = "portfolio_theme"
//! fallback = "dark"           # Used when neither storage nor system has a preference
//! attribute = "data-theme"    # Root marker attribute, set to "light" in light mode
//! light_icon = "☀️"
//! dark_icon = "🌙"
//!
//! [nav]
//! open_class = "is-open"
//!
//! [skills]
//! threshold = 0.25            # Visible fraction that triggers the fill
//! width_property = "--bar-width"
//!
//! [contact]
//! recipient = "zayd.benz.pro@proton.me"
//! subject = "Portfolio — message de {name}"
//! missing_fields = "Merci de remplir tous les champs."
//!
//! [contact.labels]
//! name = "Nom"
//! email = "Email"
//! message = "Message"
//! ```
//!
//! ## Partial Configuration
//!
//! Config blocks are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Id of the inline `<script type="application/toml">` block read in the browser.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Behavior configuration.
///
/// All fields have defaults. User config need only specify the values it
/// wants to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Minimum level of diagnostics written to the console.
    pub log_level: String,
    /// Theme persistence and icon settings.
    pub theme: ThemeConfig,
    /// Mobile navigation settings.
    pub nav: NavConfig,
    /// Skill-bar reveal settings.
    pub skills: SkillsConfig,
    /// Contact form settings (recipient, localized strings).
    pub contact: ContactConfig,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            theme: ThemeConfig::default(),
            nav: NavConfig::default(),
            skills: SkillsConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl BehaviorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "log_level '{}' is not a valid level",
                self.log_level
            )));
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme.storage_key must not be empty".into(),
            ));
        }
        if self.theme.attribute.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme.attribute must not be empty".into(),
            ));
        }
        if self.nav.open_class.trim().is_empty() {
            return Err(ConfigError::Validation(
                "nav.open_class must not be empty".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.skills.threshold) {
            return Err(ConfigError::Validation(
                "skills.threshold must be between 0 and 1".into(),
            ));
        }
        if !self.skills.width_property.starts_with("--") {
            return Err(ConfigError::Validation(
                "skills.width_property must be a CSS custom property (--name)".into(),
            ));
        }
        if !self.contact.recipient.contains('@') {
            return Err(ConfigError::Validation(
                "contact.recipient must be an email address".into(),
            ));
        }
        if !self.contact.subject.contains("{name}") {
            return Err(ConfigError::Validation(
                "contact.subject must contain the {name} placeholder".into(),
            ));
        }
        Ok(())
    }

    /// The configured log level. Falls back to `WARN` for values that
    /// [`validate`](Self::validate) would reject.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::WARN)
    }
}

/// Theme persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Theme used when neither storage nor the system expresses a preference.
    pub fallback: Theme,
    /// Attribute on the root element, present with value `light` in light mode.
    pub attribute: String,
    /// Icon glyph shown while the light theme is active.
    pub light_icon: String,
    /// Icon glyph shown while the dark theme is active.
    pub dark_icon: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "portfolio_theme".to_string(),
            fallback: Theme::Dark,
            attribute: "data-theme".to_string(),
            light_icon: "☀️".to_string(),
            dark_icon: "🌙".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn icon(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light_icon,
            Theme::Dark => &self.dark_icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Class toggled on `#nav-menu` while it is open.
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            open_class: "is-open".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillsConfig {
    /// Fraction of a bar that must be visible before it fills.
    pub threshold: f64,
    /// CSS custom property carrying the fill width.
    pub width_property: String,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            width_property: "--bar-width".to_string(),
        }
    }
}

/// Contact form settings.
///
/// The strings here are user facing. The defaults are French to match the
/// stock portfolio content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Address the mail client is opened for.
    pub recipient: String,
    /// Subject template. `{name}` is replaced by the sender's name.
    pub subject: String,
    /// Blocking message shown when a required field is blank.
    pub missing_fields: String,
    /// Field labels used in the mail body.
    pub labels: ContactLabels,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "zayd.benz.pro@proton.me".to_string(),
            subject: "Portfolio — message de {name}".to_string(),
            missing_fields: "Merci de remplir tous les champs.".to_string(),
            labels: ContactLabels::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactLabels {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Default for ContactLabels {
    fn default() -> Self {
        Self {
            name: "Nom".to_string(),
            email: "Email".to_string(),
            message: "Message".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(BehaviorConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Parse a sparse TOML document, merge it over the stock defaults, and
/// validate the result.
///
/// Blank input yields the defaults.
pub fn parse_config(source: &str) -> Result<BehaviorConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = if source.trim().is_empty() {
        base
    } else {
        let overlay: toml::Value = toml::from_str(source)?;
        merge_toml(base, overlay)
    };
    let config: BehaviorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file.
pub fn load_config(path: &Path) -> Result<BehaviorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load config from an optional path, using the defaults when absent.
pub fn load_optional_config(path: Option<&Path>) -> Result<BehaviorConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(BehaviorConfig::default()),
    }
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Portfolio Behavior Configuration
# =================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Embed in the page as:
#   <script type="application/toml" id="portfolio-config"> ... </script>
#
# Unknown keys will cause the block to be rejected (defaults are used).

# Minimum level of console diagnostics: off, error, warn, info, debug, trace.
log_level = "warn"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# localStorage key holding "light" or "dark".
storage_key = "portfolio_theme"

# Theme used when neither storage nor the system expresses a preference.
fallback = "dark"

# Attribute set to "light" on <html> in light mode, removed in dark mode.
attribute = "data-theme"

# Glyphs written into .theme-toggle__icon.
light_icon = "☀️"
dark_icon = "🌙"

# ---------------------------------------------------------------------------
# Mobile navigation
# ---------------------------------------------------------------------------
[nav]
# Class toggled on #nav-menu while the menu is open.
open_class = "is-open"

# ---------------------------------------------------------------------------
# Skill bars
# ---------------------------------------------------------------------------
[skills]
# Fraction of a .bar that must be visible before it fills (0.0 - 1.0).
threshold = 0.25

# CSS custom property carrying the fill width.
width_property = "--bar-width"

# ---------------------------------------------------------------------------
# Contact form (mailto)
# ---------------------------------------------------------------------------
[contact]
recipient = "zayd.benz.pro@proton.me"

# {name} is replaced by the sender's name.
subject = "Portfolio — message de {name}"

# Shown in a blocking alert when a field is left blank.
missing_fields = "Merci de remplir tous les champs."

# Labels used in the generated mail body.
[contact.labels]
name = "Nom"
email = "Email"
message = "Message"
"##
}
