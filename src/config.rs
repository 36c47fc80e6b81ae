//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top of it, so a
//! config file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml              # Optional, overrides stock defaults
//! ├── assets/                  # Copied verbatim to the output root
//! └── data/
//!     ├── projects.json
//!     ├── blog.json
//!     └── testimonials.json
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! [site]
//! title = "Portfolio"
//! author = "Anonymous"
//! tagline = ""
//! base_url = ""             # Absolute URL used for share links
//!
//! [data]
//! projects = "data/projects.json"
//! blog = "data/blog.json"
//! testimonials = "data/testimonials.json"
//! assets_dir = "assets"
//!
//! [carousel]
//! interval_secs = 5         # Auto-advance period
//!
//! [reveal]
//! threshold = 0.1           # Visible fraction that triggers a reveal
//!
//! [grid]
//! excerpt_length = 120      # Card description length (characters)
//! stagger_ms = 100          # Reveal delay step between cards
//!
//! [categories]
//! unknown = "literal"       # "literal" or "title-case"
//!
//! [categories.labels]
//! web = "Web Dev"
//! mobile = "Mobile Dev"
//!
//! [colors.light]
//! background = "#f7f7fb"
//! ...
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity of the site owner, shown in headers and titles.
    pub site: SiteMeta,
    /// Locations of the JSON documents, relative to the content root.
    pub data: DataConfig,
    /// Testimonial carousel timing.
    pub carousel: CarouselConfig,
    /// Scroll reveal settings.
    pub reveal: RevealConfig,
    /// Project and blog card layout.
    pub grid: GridConfig,
    /// Category display labels and the policy for unknown categories.
    pub categories: CategoryConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "carousel.interval_secs must be greater than 0".into(),
            ));
        }
        if !(self.reveal.threshold > 0.0 && self.reveal.threshold <= 1.0) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be in (0, 1]".into(),
            ));
        }
        if self.grid.excerpt_length == 0 {
            return Err(ConfigError::Validation(
                "grid.excerpt_length must be greater than 0".into(),
            ));
        }
        if !self.site.base_url.is_empty()
            && !(self.site.base_url.starts_with("http://")
                || self.site.base_url.starts_with("https://"))
        {
            return Err(ConfigError::Validation(
                "site.base_url must be an absolute http(s) URL".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    pub title: String,
    pub author: String,
    pub tagline: String,
    /// Absolute URL the site is published at. Empty keeps share links relative.
    pub base_url: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: "Anonymous".to_string(),
            tagline: String::new(),
            base_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub projects: String,
    pub blog: String,
    pub testimonials: String,
    pub assets_dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            projects: "data/projects.json".to_string(),
            blog: "data/blog.json".to_string(),
            testimonials: "data/testimonials.json".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub interval_secs: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_secs: 5 }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: crate::reveal::DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub excerpt_length: usize,
    pub stagger_ms: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            excerpt_length: 120,
            stagger_ms: 100,
        }
    }
}

/// What to display for a category missing from the label dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCategoryPolicy {
    /// Show the raw category string as-is.
    #[default]
    Literal,
    /// Title-case the raw value (`machine-learning` → `Machine Learning`).
    TitleCase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryConfig {
    pub unknown: UnknownCategoryPolicy,
    pub labels: BTreeMap<String, String>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        let labels = [
            ("all", "All"),
            ("other", "Other"),
            ("web", "Web Dev"),
            ("mobile", "Mobile Dev"),
            ("tutorial", "Tutorial"),
            ("thoughts", "Thoughts"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self {
            unknown: UnknownCategoryPolicy::default(),
            labels,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Card and modal surfaces.
    pub surface: String,
    pub text: String,
    /// Dates, captions, counters.
    pub text_muted: String,
    /// Active filter toggles, carousel dots, buttons.
    pub accent: String,
    pub border: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f7f7fb".to_string(),
            surface: "#ffffff".to_string(),
            text: "#16161d".to_string(),
            text_muted: "#5f6170".to_string(),
            accent: "#005f99".to_string(),
            border: "#e2e3ea".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0d0e12".to_string(),
            surface: "#17181f".to_string(),
            text: "#ececf1".to_string(),
            text_muted: "#9a9cab".to_string(),
            accent: "#4fb3ff".to_string(),
            border: "#2a2c36".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// `Ok(None)` when the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root, over stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`. Used by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# folio configuration
# ====================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "Portfolio"
author = "Anonymous"
tagline = ""
# Absolute URL the site is published at, e.g. "https://example.com/".
# Needed for share links on blog posts; empty keeps them relative.
base_url = ""

# ---------------------------------------------------------------------------
# Data documents (relative to the content directory)
# ---------------------------------------------------------------------------
[data]
projects = "data/projects.json"
blog = "data/blog.json"
testimonials = "data/testimonials.json"
# Copied verbatim to the output root when present.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Testimonials carousel
# ---------------------------------------------------------------------------
[carousel]
# Seconds between automatic advances. Manual navigation restarts the wait.
interval_secs = 5

# ---------------------------------------------------------------------------
# Scroll reveal
# ---------------------------------------------------------------------------
[reveal]
# Fraction of an element that must be visible before it is revealed.
threshold = 0.1

# ---------------------------------------------------------------------------
# Project and blog cards
# ---------------------------------------------------------------------------
[grid]
# Maximum characters of description/excerpt shown on a card.
excerpt_length = 120
# Delay step between consecutive card reveals, in milliseconds.
stagger_ms = 100

# ---------------------------------------------------------------------------
# Categories
# ---------------------------------------------------------------------------
[categories]
# Display for categories missing from the labels below:
#   "literal"    -> the raw value as written in the data
#   "title-case" -> "machine-learning" becomes "Machine Learning"
unknown = "literal"

[categories.labels]
all = "All"
mobile = "Mobile Dev"
other = "Other"
thoughts = "Thoughts"
tutorial = "Tutorial"
web = "Web Dev"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f7f7fb"
surface = "#ffffff"
text = "#16161d"
text_muted = "#5f6170"
accent = "#005f99"
border = "#e2e3ea"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0d0e12"
surface = "#17181f"
text = "#ececf1"
text_muted = "#9a9cab"
accent = "#4fb3ff"
border = "#2a2c36"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn vars(scheme: &ColorScheme, indent: &str) -> String {
        [
            ("--color-bg", &scheme.background),
            ("--color-surface", &scheme.surface),
            ("--color-text", &scheme.text),
            ("--color-text-muted", &scheme.text_muted),
            ("--color-accent", &scheme.accent),
            ("--color-border", &scheme.border),
        ]
        .iter()
        .map(|(name, value)| format!("{indent}{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
    }

    format!(
        ":root {{\n{light}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{dark}\n    }}\n}}",
        light = vars(&colors.light, "    "),
        dark = vars(&colors.dark, "        "),
    )
}
