//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. The file is optional:
//! every key has a stock default, and a user file only needs the values it
//! wants to change. User values are merged on top of the stock defaults as
//! TOML tables, then deserialized and validated.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_name = "Mulyam Jewels"   # Used in page titles and the copyright line
//! brand_mark = "MULYAM"         # Wordmark in the header
//! assets_dir = "assets"         # Copied to the output root when present
//!
//! [links]
//! instagram_handle = "Mulyam_jewels"
//! whatsapp_number = "91XXXXXXXXXX"   # Country code + number, digits only
//! whatsapp_display = "+91 XXXXX XXXXX"
//! email = "hello@mulyam.in"
//!
//! [form]
//! # action = "https://example.com/orders"   # Omit to render the form without a target
//!
//! [colors]
//! brand = "#b45309"
//! brand_dark = "#92400e"
//! brand_light = "#fbbf24"
//! background = "#fafaf9"
//! surface = "#f5f5f4"
//! text = "#171717"
//! text_muted = "#525252"
//! border = "#d4d4d4"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand name used in `<title>` and the copyright line.
    pub site_name: String,
    /// Wordmark shown in the header.
    pub brand_mark: String,
    /// Directory of static files copied verbatim to the output root,
    /// relative to the config file.
    pub assets_dir: String,
    /// Outbound ordering channels.
    pub links: LinksConfig,
    /// Order form submission target.
    pub form: FormConfig,
    /// Brand palette.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Mulyam Jewels".to_string(),
            brand_mark: "MULYAM".to_string(),
            assets_dir: "assets".to_string(),
            links: LinksConfig::default(),
            form: FormConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable in generated markup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site_name must not be empty".into(),
            ));
        }
        if self.brand_mark.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand_mark must not be empty".into(),
            ));
        }
        let handle = &self.links.instagram_handle;
        if handle.is_empty()
            || !handle
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return Err(ConfigError::Validation(
                "links.instagram_handle must be a bare handle (letters, digits, '_' or '.')"
                    .into(),
            ));
        }
        // `X` stands in for digits not yet assigned.
        let number = &self.links.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit() || c == 'X') {
            return Err(ConfigError::Validation(
                "links.whatsapp_number must contain only digits".into(),
            ));
        }
        if !self.links.email.contains('@') {
            return Err(ConfigError::Validation(
                "links.email must be an email address".into(),
            ));
        }
        if let Some(action) = &self.form.action
            && !(action.starts_with("https://")
                || action.starts_with("http://")
                || action.starts_with('/'))
        {
            return Err(ConfigError::Validation(
                "form.action must be an http(s) URL or an absolute path".into(),
            ));
        }
        // Colors are inlined into a <style> block.
        for (name, value) in self.colors.named() {
            if value.trim().is_empty() || value.contains(['<', '{', '}', ';']) {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must be a single CSS color value"
                )));
            }
        }
        Ok(())
    }
}

/// Outbound ordering channels. Every Instagram, WhatsApp and email link on the
/// site is built from these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// Instagram handle without the leading `@`.
    pub instagram_handle: String,
    /// WhatsApp number in international format, digits only.
    pub whatsapp_number: String,
    /// Human-readable form of the WhatsApp number.
    pub whatsapp_display: String,
    /// Business inquiries address.
    pub email: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            instagram_handle: "Mulyam_jewels".to_string(),
            whatsapp_number: "91XXXXXXXXXX".to_string(),
            whatsapp_display: "+91 XXXXX XXXXX".to_string(),
            email: "hello@mulyam.in".to_string(),
        }
    }
}

impl LinksConfig {
    pub fn instagram_url(&self) -> String {
        format!("https://instagram.com/{}", self.instagram_handle)
    }

    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }
}

/// Where the order form posts to.
///
/// The site has no backend of its own. When `action` is absent the form is
/// rendered without a target, exactly as a visual mock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Brand palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Accent for eyebrows, prices and primary buttons.
    pub brand: String,
    /// Accent hover state.
    pub brand_dark: String,
    /// Accent on dark backgrounds (stats band).
    pub brand_light: String,
    pub background: String,
    /// Alternate section background.
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            brand: "#b45309".to_string(),
            brand_dark: "#92400e".to_string(),
            brand_light: "#fbbf24".to_string(),
            background: "#fafaf9".to_string(),
            surface: "#f5f5f4".to_string(),
            text: "#171717".to_string(),
            text_muted: "#525252".to_string(),
            border: "#d4d4d4".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
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

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
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

/// Load config from the given `site.toml` path.
///
/// A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Mulyam site configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Brand name used in page titles and the copyright line.
site_name = "Mulyam Jewels"

# Wordmark shown in the header.
brand_mark = "MULYAM"

# Directory (relative to this file) whose contents are copied to the output
# root: favicon, images, robots.txt. Skipped when it does not exist.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Ordering channels
# ---------------------------------------------------------------------------
[links]
# Instagram handle without the leading @.
instagram_handle = "Mulyam_jewels"

# WhatsApp number in international format, digits only (used in wa.me links).
whatsapp_number = "91XXXXXXXXXX"

# How the number is shown on the contact page.
whatsapp_display = "+91 XXXXX XXXXX"

email = "hello@mulyam.in"

# ---------------------------------------------------------------------------
# Order form
# ---------------------------------------------------------------------------
[form]
# Endpoint that receives the order form (POST). Leave unset to render the
# form without a submission target.
# action = "https://example.com/orders"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
brand = "#b45309"
brand_dark = "#92400e"
brand_light = "#fbbf24"    # Accent on dark bands
background = "#fafaf9"
surface = "#f5f5f4"        # Alternate section background
text = "#171717"
text_muted = "#525252"
border = "#d4d4d4"
"##
}

/// Generate CSS custom properties from color config.
impl ColorConfig {
    /// Every color with its config key.
    pub fn named(&self) -> [(&'static str, &str); 8] {
        [
            ("brand", self.brand.as_str()),
            ("brand_dark", self.brand_dark.as_str()),
            ("brand_light", self.brand_light.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("border", self.border.as_str()),
        ]
    }
}

pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-brand: {brand};
    --color-brand-dark: {brand_dark};
    --color-brand-light: {brand_light};
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
}}"#,
        brand = colors.brand,
        brand_dark = colors.brand_dark,
        brand_light = colors.brand_light,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        border = colors.border,
    )
}
