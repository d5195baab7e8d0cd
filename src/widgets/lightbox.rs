// SPDX-License-Identifier: MPL-2.0
//! Modal image viewer state with clamped navigation.
//!
//! The lightbox never wraps: stepping past either end of the list is a
//! no-op, and stepping never closes it. While open it holds a
//! [`ScrollLockGuard`] so the page underneath stops scrolling.

use super::keys::KeyInput;
use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use crate::i18n::ReadingDirection;

/// Visibility of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    /// Showing the image at this index.
    Open(usize),
}

/// Direction of a navigation step in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    /// Maps a horizontal arrow to a step. In right-to-left reading the left
    /// arrow moves forward.
    #[must_use]
    pub fn from_arrow(key: KeyInput, direction: ReadingDirection) -> Option<Self> {
        let step = match key {
            KeyInput::ArrowLeft => Step::Forward,
            KeyInput::ArrowRight => Step::Backward,
            _ => return None,
        };
        Some(match direction {
            ReadingDirection::RightToLeft => step,
            ReadingDirection::LeftToRight => step.reversed(),
        })
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Step::Forward => Step::Backward,
            Step::Backward => Step::Forward,
        }
    }
}

/// Snapshot used by the view to render the counter and step buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxPosition {
    pub index: usize,
    pub count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug)]
pub struct Lightbox {
    len: usize,
    state: LightboxState,
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl Lightbox {
    /// Creates a closed lightbox over `len` images.
    #[must_use]
    pub fn new(len: usize, lock: ScrollLock) -> Self {
        Self {
            len,
            state: LightboxState::Closed,
            lock,
            guard: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    /// Index of the displayed image, if open.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(index) => Some(index),
            LightboxState::Closed => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Opens at `index`. Out-of-range requests are ignored.
    ///
    /// Returns whether the lightbox is now showing `index`.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            log::debug!("lightbox open ignored: index {index} out of {}", self.len);
            return false;
        }
        self.state = LightboxState::Open(index);
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
        log::debug!("lightbox opened at {index}");
        true
    }

    pub fn close(&mut self) {
        if self.is_open() {
            log::debug!("lightbox closed");
        }
        self.state = LightboxState::Closed;
        self.guard = None;
    }

    /// Moves one image in list order, holding at the ends.
    ///
    /// Returns whether the index changed.
    pub fn navigate(&mut self, step: Step) -> bool {
        let LightboxState::Open(index) = self.state else {
            return false;
        };
        let next = match step {
            Step::Forward => (index + 1).min(self.len.saturating_sub(1)),
            Step::Backward => index.saturating_sub(1),
        };
        self.state = LightboxState::Open(next);
        next != index
    }

    /// Whether a step in this direction would move.
    #[must_use]
    pub fn can_step(&self, step: Step) -> bool {
        match (self.state, step) {
            (LightboxState::Open(index), Step::Forward) => index + 1 < self.len,
            (LightboxState::Open(index), Step::Backward) => index > 0,
            (LightboxState::Closed, _) => false,
        }
    }

    /// Handles a key press while open.
    ///
    /// Returns true when the key was consumed, which is every key while the
    /// lightbox is open.
    pub fn handle_key(&mut self, key: KeyInput, direction: ReadingDirection) -> bool {
        if !self.is_open() {
            return false;
        }
        if key == KeyInput::Escape {
            self.close();
        } else if let Some(step) = Step::from_arrow(key, direction) {
            self.navigate(step);
        }
        true
    }

    #[must_use]
    pub fn position(&self) -> Option<LightboxPosition> {
        self.current().map(|index| LightboxPosition {
            index,
            count: self.len,
            has_previous: self.can_step(Step::Backward),
            has_next: self.can_step(Step::Forward),
        })
    }

    /// Counter text, e.g. `"3 / 6"`.
    #[must_use]
    pub fn counter(&self) -> Option<String> {
        self.current()
            .map(|index| format!("{} / {}", index + 1, self.len))
    }

    /// Replaces the image list. The lightbox closes and releases its lock.
    pub fn reset_items(&mut self, len: usize) {
        self.close();
        self.len = len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six() -> (Lightbox, ScrollLock) {
        let lock = ScrollLock::new();
        (Lightbox::new(6, lock.clone()), lock)
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let (mut lightbox, _) = six();
        assert!(lightbox.open(0));
        assert!(!lightbox.navigate(Step::Backward));
        assert_eq!(lightbox.current(), Some(0));

        assert!(lightbox.open(5));
        assert!(!lightbox.navigate(Step::Forward));
        assert_eq!(lightbox.current(), Some(5));
    }

    #[test]
    fn six_image_walk_never_closes() {
        let (mut lightbox, _) = six();
        lightbox.open(0);
        for _ in 0..4 {
            lightbox.navigate(Step::Backward);
            assert_eq!(lightbox.state(), LightboxState::Open(0));
        }
        lightbox.navigate(Step::Forward);
        assert_eq!(lightbox.state(), LightboxState::Open(1));
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let (mut lightbox, lock) = six();
        assert!(!lightbox.open(6));
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(0, ScrollLock::new());
        assert!(!lightbox.open(0));
        assert!(!lightbox.navigate(Step::Forward));
    }

    #[test]
    fn close_releases_scroll_lock() {
        let (mut lightbox, lock) = six();
        lightbox.open(2);
        assert!(lock.is_engaged());
        // Reopening while open keeps a single guard.
        lightbox.open(3);
        assert_eq!(lock.holders(), 1);
        lightbox.close();
        assert!(!lock.is_engaged());
    }

    #[test]
    fn dropping_open_lightbox_releases_scroll_lock() {
        let (mut lightbox, lock) = six();
        lightbox.open(1);
        drop(lightbox);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn replacing_items_closes_and_releases() {
        let (mut lightbox, lock) = six();
        lightbox.open(4);
        lightbox.reset_items(3);
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert_eq!(lightbox.len(), 3);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn arrows_are_mirrored_by_reading_direction() {
        let (mut lightbox, _) = six();
        lightbox.open(2);
        lightbox.handle_key(KeyInput::ArrowLeft, ReadingDirection::RightToLeft);
        assert_eq!(lightbox.current(), Some(3));
        lightbox.handle_key(KeyInput::ArrowRight, ReadingDirection::RightToLeft);
        assert_eq!(lightbox.current(), Some(2));

        lightbox.handle_key(KeyInput::ArrowRight, ReadingDirection::LeftToRight);
        assert_eq!(lightbox.current(), Some(3));
        lightbox.handle_key(KeyInput::ArrowLeft, ReadingDirection::LeftToRight);
        assert_eq!(lightbox.current(), Some(2));
    }

    #[test]
    fn escape_closes_and_other_keys_are_swallowed() {
        let (mut lightbox, _) = six();
        lightbox.open(0);
        assert!(lightbox.handle_key(KeyInput::Home, ReadingDirection::RightToLeft));
        assert_eq!(lightbox.current(), Some(0));
        assert!(lightbox.handle_key(KeyInput::Escape, ReadingDirection::RightToLeft));
        assert!(!lightbox.is_open());
        assert!(!lightbox.handle_key(KeyInput::Escape, ReadingDirection::RightToLeft));
    }

    #[test]
    fn position_reports_boundaries_and_counter() {
        let (mut lightbox, _) = six();
        assert!(lightbox.position().is_none());
        lightbox.open(0);
        let position = lightbox.position().expect("open");
        assert!(!position.has_previous);
        assert!(position.has_next);
        assert_eq!(lightbox.counter().as_deref(), Some("1 / 6"));

        lightbox.open(5);
        let position = lightbox.position().expect("open");
        assert!(position.has_previous);
        assert!(!position.has_next);
        assert_eq!(lightbox.counter().as_deref(), Some("6 / 6"));
    }
}
