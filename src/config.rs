//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The stock defaults
//! are the base layer; a `config.toml` in the content root overrides any
//! subset of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "images"          # Copied verbatim to <output>/images
//!
//! [site]
//! title = "Adorna Design"
//! artist = "Gina"
//! tagline = "Wearable sculptures and botanical skincare, handcrafted."
//! contact_email = "hello@adorna.design"
//!
//! [data]
//! attributes = "data/earring_attributes.csv"
//! descriptions = "data/earring_descriptions.txt"
//! products = "data/soap_products.json"
//! locations = "data/locations.json"
//!
//! [catalog]
//! loader = "filtered"            # or "unfiltered"
//! dice_cap = 3
//! medium = "Handcrafted Earrings"
//! year = "2024"
//! # excluded = ["black_earrings.jpg", ...]   # replaces the built-in denylist
//!
//! [gallery]
//! jewelry_page_size = 12
//! skincare_page_size = 8
//! preview_count = 10
//!
//! [appointments]
//! delay_ms = 1500
//! # outbox = "outbox"            # write requests here instead of only logging
//!
//! [colors.light]
//! background = "#fdf8f6"
//! ...
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [gallery]
//! jewelry_page_size = 9
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::exclusion::{DEFAULT_DICE_CAP, DEFAULT_EXCLUDED, ExclusionFilter, LoaderMode};
use crate::records::ItemDefaults;
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

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the content root) copied to `<output>/images`.
    pub assets_dir: String,
    /// Business name, artist, contact details.
    pub site: SiteInfo,
    /// Locations of the data resources.
    pub data: DataConfig,
    /// Jewelry catalog loader settings.
    pub catalog: CatalogConfig,
    /// Presenter page sizes.
    pub gallery: GalleryConfig,
    /// Appointment request delivery.
    pub appointments: AppointmentConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "images".to_string(),
            site: SiteInfo::default(),
            data: DataConfig::default(),
            catalog: CatalogConfig::default(),
            gallery: GalleryConfig::default(),
            appointments: AppointmentConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if self.gallery.jewelry_page_size == 0 {
            return Err(ConfigError::Validation(
                "gallery.jewelry_page_size must be at least 1".into(),
            ));
        }
        if self.gallery.skincare_page_size == 0 {
            return Err(ConfigError::Validation(
                "gallery.skincare_page_size must be at least 1".into(),
            ));
        }
        for (key, path) in [
            ("data.attributes", &self.data.attributes),
            ("data.descriptions", &self.data.descriptions),
            ("data.products", &self.data.products),
        ] {
            if path.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Business identity shown in headers, footers and the appointment page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub artist: String,
    pub tagline: String,
    pub contact_email: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Adorna Design".to_string(),
            artist: "Gina".to_string(),
            tagline: "Wearable sculptures and botanical skincare, handcrafted.".to_string(),
            contact_email: "hello@adorna.design".to_string(),
        }
    }
}

/// Data resource paths, relative to the content root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub attributes: String,
    pub descriptions: String,
    pub products: String,
    /// Optional; a missing file means no markets or stores are listed.
    pub locations: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            attributes: "data/earring_attributes.csv".to_string(),
            descriptions: "data/earring_descriptions.txt".to_string(),
            products: "data/soap_products.json".to_string(),
            locations: "data/locations.json".to_string(),
        }
    }
}

/// Jewelry catalog loader settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// `filtered` applies the denylist and dice cap, `unfiltered` keeps every row.
    pub loader: LoaderMode,
    /// Maximum number of dice pieces in the filtered catalog.
    pub dice_cap: usize,
    /// Filenames (with extension, any case) never shown.
    pub excluded: Vec<String>,
    /// Medium label stamped on every piece.
    pub medium: String,
    /// Year stamped on every piece.
    pub year: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            loader: LoaderMode::Filtered,
            dice_cap: DEFAULT_DICE_CAP,
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            medium: "Handcrafted Earrings".to_string(),
            year: "2024".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn exclusion_filter(&self) -> ExclusionFilter {
        ExclusionFilter::new(self.excluded.iter().map(String::as_str), self.dice_cap)
    }

    pub fn item_defaults(&self) -> ItemDefaults {
        ItemDefaults {
            medium: self.medium.clone(),
            year: self.year.clone(),
            ..ItemDefaults::default()
        }
    }
}

/// Presenter settings for the two product views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Items added per "load more" step in the jewelry view.
    pub jewelry_page_size: usize,
    /// Items added per "load more" step in the skincare view.
    pub skincare_page_size: usize,
    /// Number of preview thumbnails on each carousel slide.
    pub preview_count: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            jewelry_page_size: 12,
            skincare_page_size: 8,
            preview_count: 10,
        }
    }
}

/// Appointment request delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppointmentConfig {
    /// Simulated delivery delay for the logging notifier, in milliseconds.
    pub delay_ms: u64,
    /// When set, requests are written as JSON files into this directory.
    pub outbox: Option<String>,
}

impl Default for AppointmentConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            outbox: None,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
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
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (captions, counts, footers).
    pub text_muted: String,
    /// Card and divider borders.
    pub border: String,
    /// Buttons, active filters, links.
    pub accent: String,
    /// Inline error notice background.
    pub notice: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fdf8f6".to_string(),
            text: "#1f1a24".to_string(),
            text_muted: "#6b6170".to_string(),
            border: "#eadfe3".to_string(),
            accent: "#b4446c".to_string(),
            notice: "#fdecea".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1b1026".to_string(),
            text: "#f4eef7".to_string(),
            text_muted: "#c9b6d3".to_string(),
            border: "#3a2a48".to_string(),
            accent: "#f19cbb".to_string(),
            notice: "#4a1f2a".to_string(),
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
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   `excluded` array in the overlay replaces the stock denylist.
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
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

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(root = %root.display(), loader = ?config.catalog.loader, "loaded site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Adorna Site Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory under the content root copied verbatim to <output>/images.
assets_dir = "images"

# ---------------------------------------------------------------------------
# Identity
# ---------------------------------------------------------------------------
[site]
title = "Adorna Design"
artist = "Gina"
tagline = "Wearable sculptures and botanical skincare, handcrafted."
# Shown on the appointment page.
contact_email = "hello@adorna.design"

# ---------------------------------------------------------------------------
# Data resources (paths relative to the content root)
# ---------------------------------------------------------------------------
[data]
# Header row: Filename, Material, Size, Color Palette, Theme or Motif
attributes = "data/earring_attributes.csv"
# One "filename: statement" per line
descriptions = "data/earring_descriptions.txt"
# Array of soap / lip-balm products
products = "data/soap_products.json"
# Optional { "markets": [...], "stores": [...] }
locations = "data/locations.json"

# ---------------------------------------------------------------------------
# Jewelry catalog
# ---------------------------------------------------------------------------
[catalog]
# "filtered" drops denylisted photos and caps the dice theme.
# "unfiltered" publishes every row of the attribute table.
loader = "filtered"

# Maximum number of dice pieces in the filtered catalog.
dice_cap = 3

# Label and year stamped on every piece.
medium = "Handcrafted Earrings"
year = "2024"

# Filenames never shown (case-insensitive, extension included).
# Setting this replaces the built-in list entirely.
# excluded = ["black_earrings.jpg"]

# ---------------------------------------------------------------------------
# Gallery views
# ---------------------------------------------------------------------------
[gallery]
# Items revealed per "load more" step.
jewelry_page_size = 12
skincare_page_size = 8

# Thumbnails on each landing-page slide.
preview_count = 10

# ---------------------------------------------------------------------------
# Appointment requests
# ---------------------------------------------------------------------------
[appointments]
# Simulated delivery delay when requests are only logged (milliseconds).
delay_ms = 1500

# Write each request as JSON into this directory for a mailer to pick up.
# outbox = "outbox"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fdf8f6"
text = "#1f1a24"
text_muted = "#6b6170"
border = "#eadfe3"
accent = "#b4446c"
notice = "#fdecea"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#1b1026"
text = "#f4eef7"
text_muted = "#c9b6d3"
border = "#3a2a48"
accent = "#f19cbb"
notice = "#4a1f2a"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
    --color-notice: {light_notice};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
        --color-notice: {dark_notice};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        light_notice = colors.light.notice,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
        dark_notice = colors.dark.notice,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "Adorna Design");
        assert_eq!(config.gallery.jewelry_page_size, 12);
        assert_eq!(config.gallery.skincare_page_size, 8);
        assert_eq!(config.catalog.dice_cap, 3);
        assert_eq!(config.catalog.loader, LoaderMode::Filtered);
        assert_eq!(config.catalog.excluded.len(), DEFAULT_EXCLUDED.len());
        assert_eq!(config.data.attributes, "data/earring_attributes.csv");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[gallery]
jewelry_page_size = 9
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.gallery.jewelry_page_size, 9);
        // Default values preserved
        assert_eq!(config.gallery.skincare_page_size, 8);
        assert_eq!(config.colors.dark.background, "#1b1026");
    }

    #[test]
    fn parse_unfiltered_loader() {
        let toml = r#"
[catalog]
loader = "unfiltered"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.loader, LoaderMode::Unfiltered);
        assert_eq!(config.catalog.dice_cap, 3);
    }

    #[test]
    fn unknown_loader_rejected() {
        let toml = r#"
[catalog]
loader = "sometimes"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn negative_dice_cap_rejected() {
        let toml = r#"
[catalog]
dice_cap = -1
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn zero_dice_cap_allowed() {
        let config: SiteConfig = toml::from_str("[catalog]\ndice_cap = 0\n").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog.dice_cap, 0);
    }

    #[test]
    fn catalog_config_builds_filter() {
        let mut catalog = CatalogConfig::default();
        catalog.excluded = vec!["Hidden.JPG".to_string()];
        let filter = catalog.exclusion_filter();
        assert!(filter.is_excluded("hidden.jpg"));
        assert!(!filter.is_excluded("black_earrings.jpg"));
    }

    #[test]
    fn catalog_config_item_defaults() {
        let mut catalog = CatalogConfig::default();
        catalog.year = "2025".to_string();
        let defaults = catalog.item_defaults();
        assert_eq!(defaults.year, "2025");
        assert_eq!(defaults.medium, "Handcrafted Earrings");
        assert_eq!(defaults.image_root, "/images");
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-bg: #1a1a1a"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains("--color-accent:"));
        assert!(css.contains("--color-notice:"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[site]
title = "Lippie & Lather"

[colors.light]
accent = "#0f766e"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.title, "Lippie & Lather");
        assert_eq!(config.colors.light.accent, "#0f766e");
        // Unspecified values should be defaults
        assert_eq!(config.site.artist, "Gina");
        assert_eq!(config.colors.light.background, "#fdf8f6");
    }

    #[test]
    fn load_config_overlay_replaces_denylist() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[catalog]
excluded = ["only_this.jpg"]
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.catalog.excluded, vec!["only_this.jpg"]);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[gallery]
jewelry_pagesize = 10
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[gallery]
skincare_page_size = 0
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[gallery]
jewelry_page_size = 12
skincare_page_size = 8
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[gallery]
skincare_page_size = 4
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let gallery = merged.get("gallery").unwrap();
        assert_eq!(gallery.get("skincare_page_size").unwrap().as_integer(), Some(4));
        assert_eq!(gallery.get("jewelry_page_size").unwrap().as_integer(), Some(12));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str(r#"excluded = ["a", "b"]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"excluded = ["c"]"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("excluded").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_page_sizes() {
        let mut config = SiteConfig::default();
        config.gallery.jewelry_page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("jewelry_page_size"));
    }

    #[test]
    fn validate_empty_title() {
        let mut config = SiteConfig::default();
        config.site.title = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_data_path() {
        let mut config = SiteConfig::default();
        config.data.products = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("data.products"));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in [
            "[site]",
            "[data]",
            "[catalog]",
            "[gallery]",
            "[appointments]",
            "[colors.light]",
            "[colors.dark]",
        ] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        for key in ["site", "data", "catalog", "gallery", "appointments", "colors"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
