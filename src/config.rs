//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! describe the production site; a user file in the source directory
//! overrides any subset of keys.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! base_url = "https://www.effectwaveco.com"  # Canonical origin, no trailing slash
//! contact_email = "info@effectwaveco.com"    # Target of the contact form handoff
//! script = "/pkg/effect_wave.js"             # Browser runtime module ("" = static only)
//!
//! [meta]
//! base_title = "Effect Wave | موجة تأثير"
//! default_og_image = "https://www.effectwaveco.com/EF%20logo.png"
//!
//! [social]
//! instagram = "https://www.instagram.com/effectwave_ly"
//! facebook = "https://www.facebook.com/share/1DWwkZR1w9/"
//! linkedin = "https://www.linkedin.com/company/effect-wave/"
//!
//! [processing]
//! max_processes = 4         # Max prerender workers (omit for auto = CPU cores)
//! ```
//!
//! The palette is not configurable; [`generate_palette_css`] turns the fixed
//! colours into custom properties. Unknown keys are rejected to catch typos
//! early.

use crate::types::{
    COLOR_BACKGROUND, COLOR_GRAY_SURFACE, COLOR_SILVER, COLOR_SURFACE, Locale, Theme,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Origin, contact address and runtime script.
    pub site: SiteSection,
    /// Document metadata constants.
    pub meta: MetaConfig,
    /// Footer social profiles.
    pub social: SocialConfig,
    /// Parallel prerender settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.site.base_url;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(
                "site.base_url must start with http:// or https://".into(),
            ));
        }
        if url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with '/'".into(),
            ));
        }
        if !self.site.contact_email.contains('@') {
            return Err(ConfigError::Validation(
                "site.contact_email must be an email address".into(),
            ));
        }
        if self.meta.base_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "meta.base_title must not be empty".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Absolute URL for a site path such as `/privacy`.
    pub fn absolute_url(&self, path: &str) -> String {
        if path == "/" {
            format!("{}/", self.site.base_url)
        } else {
            format!("{}{}", self.site.base_url, path)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Canonical origin, without trailing slash.
    pub base_url: String,
    /// Address the contact form opens in the visitor's mail client.
    pub contact_email: String,
    /// ES module that boots the browser runtime. Empty disables it.
    pub script: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: "https://www.effectwaveco.com".to_string(),
            contact_email: "info@effectwaveco.com".to_string(),
            script: "/pkg/effect_wave.js".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetaConfig {
    /// Suffix of every document title, and the whole title when a page has none.
    pub base_title: String,
    /// `og:image` / `twitter:image` used when a page does not name one.
    pub default_og_image: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            base_title: "Effect Wave | موجة تأثير".to_string(),
            default_og_image: "https://www.effectwaveco.com/EF%20logo.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    pub instagram: String,
    pub facebook: String,
    pub linkedin: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            instagram: "https://www.instagram.com/effectwave_ly".to_string(),
            facebook: "https://www.facebook.com/share/1DWwkZR1w9/".to_string(),
            linkedin: "https://www.linkedin.com/company/effect-wave/".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel prerender workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
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

/// Load config from `config.toml` in the given directory, layered over the
/// stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Effect Wave Site Configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Canonical origin used for canonical links and og:url. No trailing slash.
base_url = "https://www.effectwaveco.com"

# Address the contact form hands off to (mailto).
contact_email = "info@effectwaveco.com"

# ES module that boots the browser runtime (wasm-pack output).
# Set to "" to publish static pages only.
script = "/pkg/effect_wave.js"

# ---------------------------------------------------------------------------
# Document metadata
# ---------------------------------------------------------------------------
[meta]
# Appended to every page title as "{page} — {base_title}".
base_title = "Effect Wave | موجة تأثير"

# Share image used when a page does not provide one.
default_og_image = "https://www.effectwaveco.com/EF%20logo.png"

# ---------------------------------------------------------------------------
# Social profiles (footer)
# ---------------------------------------------------------------------------
[social]
instagram = "https://www.instagram.com/effectwave_ly"
facebook = "https://www.facebook.com/share/1DWwkZR1w9/"
linkedin = "https://www.linkedin.com/company/effect-wave/"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel prerender workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// CSS custom properties for the fixed palette.
///
/// `--color-accent` defaults to the agency accent; the app root overrides it
/// inline with the active theme's value.
pub fn generate_palette_css() -> String {
    format!(
        r#":root {{
    --color-obsidian: {background};
    --color-onyx: {surface};
    --color-silver: {silver};
    --color-gray-surface: {gray};
    --color-agency: {agency};
    --color-production: {production};
    --color-accent: {agency};
    --font-arabic: "{arabic}", sans-serif;
    --font-latin: "{latin}", sans-serif;
}}"#,
        background = COLOR_BACKGROUND,
        surface = COLOR_SURFACE,
        silver = COLOR_SILVER,
        gray = COLOR_GRAY_SURFACE,
        agency = Theme::Agency.accent(),
        production = Theme::Production.accent(),
        arabic = Locale::Ar.font(),
        latin = Locale::En.font(),
    )
}
