// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files (Hebrew default, English)
//! - Runtime language switching
//! - Reading direction per locale, used for layout mirroring

pub mod fluent;

pub use fluent::I18n;

use unic_langid::LanguageIdentifier;

/// Horizontal reading direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingDirection {
    #[default]
    RightToLeft,
    LeftToRight,
}

impl ReadingDirection {
    /// Direction of `locale`, based on its language subtag.
    #[must_use]
    pub fn of(locale: &LanguageIdentifier) -> Self {
        match locale.language.as_str() {
            "he" | "ar" | "fa" | "ur" => Self::RightToLeft,
            _ => Self::LeftToRight,
        }
    }

    #[must_use]
    pub fn is_rtl(self) -> bool {
        self == Self::RightToLeft
    }
}
