// SPDX-License-Identifier: MPL-2.0
//! Page content catalog.
//!
//! The default catalog is embedded from `assets/content/salon.toml`; a
//! replacement can be supplied with `--content <path>`. Loading never fails:
//! an unreadable or invalid replacement falls back to the embedded catalog
//! and reports an i18n warning key, mirroring `app::config::load`.

use crate::widgets::Categorized;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const EMBEDDED_CATALOG: &str = "salon.toml";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("cannot read catalog: {0}")]
    Io(String),
    #[error("catalog not found: {0}")]
    Missing(String),
    #[error("malformed catalog: {0}")]
    Parse(String),
    #[error("duplicate {list} id `{id}`")]
    DuplicateId { list: &'static str, id: String },
    #[error("service `{service}` references unknown category `{category}`")]
    UnknownServiceCategory { service: String, category: String },
}

impl ContentError {
    /// Returns the i18n message key for the warning banner.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::Io(_) => "banner-io-error",
            ContentError::Missing(_) => "banner-content-missing",
            ContentError::Parse(_) => "banner-content-parse-error",
            ContentError::DuplicateId { .. } | ContentError::UnknownServiceCategory { .. } => {
                "banner-content-invalid"
            }
        }
    }
}

// =============================================================================
// Catalog types
// =============================================================================

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Salon {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub hours: Vec<OpeningHours>,
}

/// One row of the opening-hours table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OpeningHours {
    /// Day of week, 0 = Sunday.
    pub weekday: u8,
    pub day: String,
    pub hours: String,
}

impl OpeningHours {
    #[must_use]
    pub fn is_on(&self, weekday: chrono::Weekday) -> bool {
        u32::from(self.weekday) == weekday.num_days_from_sunday()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Location {
    #[serde(default)]
    pub parking: String,
    #[serde(default)]
    pub transit: String,
    #[serde(default)]
    pub directions: String,
}

/// A disclosure entry (policy or FAQ).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl GalleryImage {
    /// Filesystem path of the image, if it exists.
    #[must_use]
    pub fn resolve(&self, base_dir: Option<&Path>) -> Option<PathBuf> {
        let src = Path::new(&self.src);
        let path = if src.is_absolute() {
            src.to_path_buf()
        } else {
            base_dir?.join(src)
        };
        path.is_file().then_some(path)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServiceCategory {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub popular: bool,
}

impl Categorized for Service {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl Categorized for Product {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Promotion {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub discount_percent: u8,
    /// Last day of the promotion; the deadline is 00:00 UTC of this date.
    pub valid_until: NaiveDate,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub hot: bool,
}

impl Promotion {
    #[must_use]
    pub fn deadline(&self) -> DateTime<Utc> {
        self.valid_until.and_time(NaiveTime::MIN).and_utc()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Stylist {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Everything the page displays.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Catalog {
    pub salon: Salon,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub policies: Vec<Entry>,
    #[serde(default)]
    pub faq: Vec<Entry>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub service_categories: Vec<ServiceCategory>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub promotions: Vec<Promotion>,
    #[serde(default)]
    pub stylists: Vec<Stylist>,
    /// Directory relative gallery paths are resolved against.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn check_unique<'a>(
    list: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                list,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl Catalog {
    /// Parses a catalog without validating it.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        toml::from_str(source).map_err(|err| ContentError::Parse(err.to_string()))
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        let file = Asset::get(EMBEDDED_CATALOG)
            .ok_or_else(|| ContentError::Missing(EMBEDDED_CATALOG.to_string()))?;
        let catalog = Self::from_toml(&String::from_utf8_lossy(file.data.as_ref()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads, parses and validates a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        if !path.exists() {
            return Err(ContentError::Missing(path.display().to_string()));
        }
        let source = fs::read_to_string(path).map_err(|err| ContentError::Io(err.to_string()))?;
        let mut catalog = Self::from_toml(&source)?;
        catalog.validate()?;
        catalog.base_dir = path.parent().map(Path::to_path_buf);
        Ok(catalog)
    }

    /// Checks id uniqueness per list and service category references.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_unique("policies", self.policies.iter().map(|e| e.id.as_str()))?;
        check_unique("faq", self.faq.iter().map(|e| e.id.as_str()))?;
        check_unique(
            "service_categories",
            self.service_categories.iter().map(|c| c.id.as_str()),
        )?;
        check_unique("services", self.services.iter().map(|s| s.id.as_str()))?;
        check_unique("products", self.products.iter().map(|p| p.id.as_str()))?;
        check_unique("promotions", self.promotions.iter().map(|p| p.id.as_str()))?;
        check_unique("stylists", self.stylists.iter().map(|s| s.id.as_str()))?;

        for service in &self.services {
            if !self
                .service_categories
                .iter()
                .any(|category| category.id == service.category)
            {
                return Err(ContentError::UnknownServiceCategory {
                    service: service.id.clone(),
                    category: service.category.clone(),
                });
            }
        }
        Ok(())
    }

    /// All promotion deadlines, in catalog order.
    #[must_use]
    pub fn deadlines(&self) -> Vec<DateTime<Utc>> {
        self.promotions.iter().map(Promotion::deadline).collect()
    }

    #[must_use]
    pub fn service_category_ids(&self) -> Vec<String> {
        self.service_categories.iter().map(|c| c.id.clone()).collect()
    }

    #[must_use]
    pub fn service_category_title(&self, id: &str) -> Option<&str> {
        self.service_categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.title.as_str())
    }
}

/// Loads the page catalog.
///
/// Returns a tuple of (catalog, optional_warning_key). A failing `path`
/// falls back to the embedded catalog.
pub fn load(path: Option<&Path>) -> (Catalog, Option<String>) {
    let mut warning = None;
    if let Some(path) = path {
        match Catalog::from_path(path) {
            Ok(catalog) => {
                log::debug!("loaded content catalog from {}", path.display());
                return (catalog, None);
            }
            Err(err) => {
                log::warn!("falling back to embedded catalog: {err}");
                warning = Some(err.i18n_key().to_string());
            }
        }
    }
    match Catalog::embedded() {
        Ok(catalog) => (catalog, warning),
        Err(err) => {
            log::error!("embedded catalog is unusable: {err}");
            (Catalog::default(), Some(err.i18n_key().to_string()))
        }
    }
}

/// Formats a price in shekels with two decimals.
#[must_use]
pub fn price_label(price: f64) -> String {
    format!("₪{price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
[salon]
name = "Beta"

[[service_categories]]
id = "men"
title = "Men"

[[services]]
id = "men-1"
category = "men"
name = "Cut"
price = 80.0
duration_minutes = 30
"#;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        assert_eq!(catalog.policies.len(), 5);
        assert_eq!(catalog.faq.len(), 8);
        assert_eq!(catalog.gallery.len(), 6);
        assert_eq!(catalog.products.len(), 8);
        assert_eq!(catalog.service_categories.len(), 4);
        assert_eq!(catalog.services.len(), 16);
        assert_eq!(catalog.promotions.len(), 4);
        assert_eq!(catalog.stylists.len(), 4);
        assert_eq!(catalog.salon.hours.len(), 7);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = format!(
            "{MINIMAL}\n[[faq]]\nid = \"faq-1\"\ntitle = \"a\"\nbody = \"b\"\n\n[[faq]]\nid = \"faq-1\"\ntitle = \"c\"\nbody = \"d\"\n"
        );
        let catalog = Catalog::from_toml(&source).expect("parse");
        assert_eq!(
            catalog.validate(),
            Err(ContentError::DuplicateId {
                list: "faq",
                id: "faq-1".into()
            })
        );
    }

    #[test]
    fn same_id_in_different_lists_is_fine() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        assert_eq!(catalog.policies[0].id, catalog.faq[0].id);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn unknown_service_category_is_rejected() {
        let source = MINIMAL.replace("category = \"men\"", "category = \"kids\"");
        let catalog = Catalog::from_toml(&source).expect("parse");
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, ContentError::UnknownServiceCategory { .. }));
        assert_eq!(err.i18n_key(), "banner-content-invalid");
    }

    #[test]
    fn deadline_is_midnight_utc() {
        let source = format!(
            "{MINIMAL}\n[[promotions]]\nid = \"p\"\ntitle = \"t\"\ndiscount_percent = 10\nvalid_until = \"2026-12-31\"\n"
        );
        let catalog = Catalog::from_toml(&source).expect("parse");
        assert_eq!(
            catalog.deadlines()[0].to_rfc3339(),
            "2026-12-31T00:00:00+00:00"
        );
    }

    #[test]
    fn load_falls_back_on_missing_file() {
        let temp_dir = tempdir().expect("temp dir");
        let (catalog, warning) = load(Some(&temp_dir.path().join("nope.toml")));
        assert_eq!(warning.as_deref(), Some("banner-content-missing"));
        assert_eq!(catalog.faq.len(), 8);
    }

    #[test]
    fn load_falls_back_on_malformed_file() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("salon.toml");
        fs::write(&path, "[salon\nname=").expect("write");
        let (catalog, warning) = load(Some(&path));
        assert_eq!(warning.as_deref(), Some("banner-content-parse-error"));
        assert!(!catalog.products.is_empty());
    }

    #[test]
    fn load_from_file_records_base_dir() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("salon.toml");
        fs::write(&path, MINIMAL).expect("write");
        let (catalog, warning) = load(Some(&path));
        assert!(warning.is_none());
        assert_eq!(catalog.salon.name, "Beta");
        assert_eq!(catalog.base_dir.as_deref(), Some(temp_dir.path()));
    }

    #[test]
    fn gallery_paths_resolve_only_when_present() {
        let temp_dir = tempdir().expect("temp dir");
        fs::write(temp_dir.path().join("a.jpg"), b"x").expect("write");
        let present = GalleryImage {
            src: "a.jpg".into(),
            alt: "a".into(),
            caption: None,
        };
        let absent = GalleryImage {
            src: "b.jpg".into(),
            ..present.clone()
        };
        assert!(present.resolve(Some(temp_dir.path())).is_some());
        assert!(absent.resolve(Some(temp_dir.path())).is_none());
        assert!(present.resolve(None).is_none());
    }

    #[test]
    fn opening_hours_match_weekday() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let saturday = &catalog.salon.hours[6];
        assert!(saturday.is_on(chrono::Weekday::Sat));
        assert!(!saturday.is_on(chrono::Weekday::Sun));
    }

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(price_label(89.9), "₪89.90");
        assert_eq!(price_label(80.0), "₪80.00");
    }
}
