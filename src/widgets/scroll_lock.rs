// SPDX-License-Identifier: MPL-2.0
//! Reference-counted page scroll lock.
//!
//! Holders acquire a [`ScrollLockGuard`]; page scrolling stays suspended
//! while at least one guard is alive. The page's scroll area reads the
//! handle through [`crate::ui::widgets::ScrollGate`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared handle to the lock counter. Cloning shares the same counter.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspends scrolling until the returned guard is dropped.
    #[must_use = "scrolling resumes as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::AcqRel);
        if previous == 0 {
            log::debug!("page scroll locked");
        }
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Returns true while any guard is alive.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }
}

/// Keeps the page scroll suspended for as long as it lives.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::AcqRel);
        if previous == 1 {
            log::debug!("page scroll released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_engages_and_releases() {
        let lock = ScrollLock::new();
        assert!(!lock.is_engaged());

        let guard = lock.acquire();
        assert!(lock.is_engaged());

        drop(guard);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn overlapping_guards_are_counted() {
        let lock = ScrollLock::new();
        let first = lock.acquire();
        let second = lock.clone().acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(lock.is_engaged());
        drop(second);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn clones_share_the_counter() {
        let lock = ScrollLock::new();
        let view_side = lock.clone();
        let _guard = lock.acquire();
        assert!(view_side.is_engaged());
    }
}
