// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.
//!
//! # Categories
//!
//! - **Disclosure**: FAQ and policies open/selection defaults
//! - **Gallery**: grid columns and captions
//! - **Timing**: countdown tick and reveal frame intervals

use std::time::Duration;

// ==========================================================================
// Disclosure Defaults
// ==========================================================================

/// FAQ shows one answer at a time.
pub const DEFAULT_FAQ_ALLOW_MULTIPLE: bool = false;

/// FAQ entry open when the page is built.
pub const DEFAULT_FAQ_OPEN: &[&str] = &["faq-1"];

/// Salon policies may be expanded side by side.
pub const DEFAULT_POLICIES_ALLOW_MULTIPLE: bool = true;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of gallery columns.
pub const DEFAULT_GALLERY_COLUMNS: u16 = 3;

/// Minimum gallery columns.
pub const MIN_GALLERY_COLUMNS: u16 = 2;

/// Maximum gallery columns.
pub const MAX_GALLERY_COLUMNS: u16 = 4;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Countdown refresh interval.
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Animation frame interval while a reveal is in progress.
pub const REVEAL_FRAME_INTERVAL: Duration = Duration::from_millis(16);

const _: () = {
    assert!(MIN_GALLERY_COLUMNS > 0);
    assert!(MAX_GALLERY_COLUMNS >= MIN_GALLERY_COLUMNS);
    assert!(DEFAULT_GALLERY_COLUMNS >= MIN_GALLERY_COLUMNS);
    assert!(DEFAULT_GALLERY_COLUMNS <= MAX_GALLERY_COLUMNS);
    assert!(!DEFAULT_FAQ_OPEN.is_empty());
};
