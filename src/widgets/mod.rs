// SPDX-License-Identifier: MPL-2.0
//! Interactive widget state machines.
//!
//! These types hold no Iced widgets; they are driven by [`KeyInput`],
//! clicks and clock values from the application shell, which keeps them
//! testable without a renderer.
//!
//! - [`selection`] - open/active id sets (single or multiple)
//! - [`disclosure`] - accordion and FAQ lists with focus and reveal fade
//! - [`lightbox`] - modal gallery viewer with clamped navigation
//! - [`scroll_lock`] - reference-counted page scroll suspension
//! - [`filter_tabs`] - category filter projection
//! - [`countdown`] - time remaining to promotion deadlines

pub mod countdown;
pub mod disclosure;
pub mod filter_tabs;
pub mod keys;
pub mod lightbox;
pub mod scroll_lock;
pub mod selection;

pub use countdown::{Countdown, TargetPolicy, TimeLeft};
pub use disclosure::{Disclosure, REVEAL_DURATION};
pub use filter_tabs::{Categorized, Category, FilterTabs};
pub use keys::KeyInput;
pub use lightbox::{Lightbox, LightboxState, Step};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use selection::{ItemId, SelectionMode, SelectionState};
