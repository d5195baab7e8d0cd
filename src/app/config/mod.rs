// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[faq]` - FAQ disclosure selection mode and initially open entries
//! - `[policies]` - Salon policies disclosure selection mode and open entries
//! - `[gallery]` - Gallery grid columns and captions
//! - `[promotions]` - Countdown target policy
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI flag or `SALON_BETA_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! Choices made in the running page (language, theme) are not written back.
//!
//! # Examples
//!
//! ```no_run
//! use salon_beta::app::config;
//!
//! let (config, _warning) = config::load();
//! assert!(config.gallery.columns >= 2);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use crate::widgets::{ItemId, SelectionMode, TargetPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "he", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// FAQ disclosure settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqConfig {
    /// Allow several answers open at once.
    #[serde(default = "default_faq_allow_multiple")]
    pub allow_multiple: bool,

    /// Entry ids open when the page is built.
    #[serde(default = "default_faq_open")]
    pub default_open: Vec<String>,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            allow_multiple: DEFAULT_FAQ_ALLOW_MULTIPLE,
            default_open: default_faq_open(),
        }
    }
}

impl FaqConfig {
    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_allow_multiple(self.allow_multiple)
    }

    pub fn default_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.default_open.iter().map(|id| ItemId::new(id.as_str()))
    }
}

/// Salon policies disclosure settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoliciesConfig {
    /// Allow several policies open at once.
    #[serde(default = "default_policies_allow_multiple")]
    pub allow_multiple: bool,

    /// Policy ids open when the page is built.
    #[serde(default)]
    pub default_open: Vec<String>,
}

impl Default for PoliciesConfig {
    fn default() -> Self {
        Self {
            allow_multiple: DEFAULT_POLICIES_ALLOW_MULTIPLE,
            default_open: Vec::new(),
        }
    }
}

impl PoliciesConfig {
    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_allow_multiple(self.allow_multiple)
    }

    pub fn default_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.default_open.iter().map(|id| ItemId::new(id.as_str()))
    }
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of thumbnail columns, clamped to
    /// `MIN_GALLERY_COLUMNS..=MAX_GALLERY_COLUMNS` when used.
    #[serde(default = "default_gallery_columns")]
    pub columns: u16,

    /// Show captions under thumbnails and in the lightbox.
    #[serde(default = "default_show_captions")]
    pub show_captions: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GALLERY_COLUMNS,
            show_captions: true,
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn clamped_columns(&self) -> usize {
        usize::from(self.columns.clamp(MIN_GALLERY_COLUMNS, MAX_GALLERY_COLUMNS))
    }
}

/// Promotions countdown settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PromotionsConfig {
    /// How the countdown picks its deadline over time.
    #[serde(default)]
    pub countdown_policy: TargetPolicy,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub faq: FaqConfig,

    #[serde(default)]
    pub policies: PoliciesConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub promotions: PromotionsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_faq_allow_multiple() -> bool {
    DEFAULT_FAQ_ALLOW_MULTIPLE
}

fn default_faq_open() -> Vec<String> {
    DEFAULT_FAQ_OPEN.iter().map(ToString::to_string).collect()
}

fn default_policies_allow_multiple() -> bool {
    DEFAULT_POLICIES_ALLOW_MULTIPLE
}

fn default_gallery_columns() -> u16 {
    DEFAULT_GALLERY_COLUMNS
}

fn default_show_captions() -> bool {
    true
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning message.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded config from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("falling back to default config: {err}");
                    return (Config::default(), Some(err.i18n_key().to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Serializes a configuration in the on-disk format.
pub fn to_toml_string(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(Error::from)
}

/// Writes configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_toml_string(config)?)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Light,
            },
            faq: FaqConfig {
                allow_multiple: true,
                default_open: vec!["faq-2".into(), "faq-4".into()],
            },
            policies: PoliciesConfig {
                allow_multiple: false,
                default_open: vec!["faq-3".into()],
            },
            gallery: GalleryConfig {
                columns: 4,
                show_captions: false,
            },
            promotions: PromotionsConfig {
                countdown_policy: TargetPolicy::Fixed,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(!config.faq.allow_multiple);
        assert_eq!(config.faq.default_open, vec!["faq-1".to_string()]);
        assert!(config.policies.allow_multiple);
        assert!(config.policies.default_open.is_empty());
        assert_eq!(config.gallery.columns, DEFAULT_GALLERY_COLUMNS);
        assert!(config.gallery.show_captions);
        assert_eq!(
            config.promotions.countdown_policy,
            TargetPolicy::NearestUpcoming
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[faq]\nallow_multiple = true\n\n[promotions]\ncountdown_policy = \"fixed\"\n",
        )
        .expect("write file");

        let loaded = load_from_path(&config_path).expect("load");
        assert!(loaded.faq.allow_multiple);
        assert_eq!(loaded.faq.default_open, vec!["faq-1".to_string()]);
        assert_eq!(loaded.promotions.countdown_policy, TargetPolicy::Fixed);
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn gallery_columns_are_clamped() {
        let mut gallery = GalleryConfig::default();
        gallery.columns = 9;
        assert_eq!(gallery.clamped_columns(), usize::from(MAX_GALLERY_COLUMNS));
        gallery.columns = 0;
        assert_eq!(gallery.clamped_columns(), usize::from(MIN_GALLERY_COLUMNS));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("banner-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn selection_modes_follow_flags() {
        let config = Config::default();
        assert_eq!(config.faq.selection_mode(), SelectionMode::Single);
        assert_eq!(config.policies.selection_mode(), SelectionMode::Multiple);
        let ids: Vec<ItemId> = config.faq.default_ids().collect();
        assert_eq!(ids, vec![ItemId::from("faq-1")]);
    }
}
