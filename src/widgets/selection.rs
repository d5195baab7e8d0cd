// SPDX-License-Identifier: MPL-2.0
//! Open/active set shared by the disclosure and filter widgets.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Opaque identifier of a content item (e.g. `"faq-1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How many items may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one open item; opening another closes the previous one.
    #[default]
    Single,
    /// Any number of open items.
    Multiple,
}

impl SelectionMode {
    #[must_use]
    pub fn from_allow_multiple(allow_multiple: bool) -> Self {
        if allow_multiple {
            Self::Multiple
        } else {
            Self::Single
        }
    }
}

/// Set of currently open ids.
///
/// In [`SelectionMode::Single`] the set never holds more than one id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState<K: Eq + Hash = ItemId> {
    mode: SelectionMode,
    open: HashSet<K>,
}

impl<K: Eq + Hash + Clone> SelectionState<K> {
    /// Creates an empty selection.
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            open: HashSet::new(),
        }
    }

    /// Creates a selection with initially open ids.
    ///
    /// In single mode only the first default is kept.
    #[must_use]
    pub fn with_defaults(mode: SelectionMode, defaults: impl IntoIterator<Item = K>) -> Self {
        let mut open = HashSet::new();
        match mode {
            SelectionMode::Single => {
                if let Some(first) = defaults.into_iter().next() {
                    open.insert(first);
                }
            }
            SelectionMode::Multiple => open.extend(defaults),
        }
        Self { mode, open }
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Flips the open state of `id`.
    pub fn toggle(&mut self, id: K) {
        match self.mode {
            SelectionMode::Single => {
                if self.open.contains(&id) {
                    self.open.clear();
                } else {
                    self.open.clear();
                    self.open.insert(id);
                }
            }
            SelectionMode::Multiple => {
                if !self.open.remove(&id) {
                    self.open.insert(id);
                }
            }
        }
    }

    #[must_use]
    pub fn is_open(&self, id: &K) -> bool {
        self.open.contains(id)
    }

    pub fn open_ids(&self) -> impl Iterator<Item = &K> {
        self.open.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }
}

impl<K: Eq + Hash + Clone> Default for SelectionState<K> {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}
