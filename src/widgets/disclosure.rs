// SPDX-License-Identifier: MPL-2.0
//! Collapsible item list with modelled keyboard focus and a bounded reveal.
//!
//! Headers are always present; a body is shown while its id is open and for
//! the remainder of its closing transition. Transitions never block input:
//! a header pressed mid-transition simply restarts the fade from `now`.

use super::keys::KeyInput;
use super::selection::{ItemId, SelectionMode, SelectionState};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Length of the open/close fade.
pub const REVEAL_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    started: Instant,
    opening: bool,
}

impl Transition {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= REVEAL_DURATION
    }
}

#[derive(Debug, Clone)]
pub struct Disclosure {
    ids: Vec<ItemId>,
    selection: SelectionState<ItemId>,
    focused: Option<usize>,
    transitions: HashMap<ItemId, Transition>,
    clock: Instant,
}

impl Disclosure {
    /// Creates a disclosure over `ids` in document order.
    ///
    /// Initially open items are shown without a transition.
    #[must_use]
    pub fn new(
        ids: Vec<ItemId>,
        mode: SelectionMode,
        default_open: impl IntoIterator<Item = ItemId>,
        now: Instant,
    ) -> Self {
        Self {
            ids,
            selection: SelectionState::with_defaults(mode, default_open),
            focused: None,
            transitions: HashMap::new(),
            clock: now,
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState<ItemId> {
        &self.selection
    }

    #[must_use]
    pub fn is_open(&self, id: &ItemId) -> bool {
        self.selection.is_open(id)
    }

    /// Index of the header holding keyboard focus.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.focused.is_some()
    }

    /// Toggles `id` and starts transitions for every item whose state changed.
    pub fn toggle(&mut self, id: &ItemId, now: Instant) {
        let before: Vec<ItemId> = self.selection.open_ids().cloned().collect();
        self.selection.toggle(id.clone());
        self.clock = now;

        for closed in before.iter().filter(|prev| !self.selection.is_open(prev)) {
            self.transitions.insert(
                closed.clone(),
                Transition {
                    started: now,
                    opening: false,
                },
            );
        }
        let opened: Vec<ItemId> = self
            .selection
            .open_ids()
            .filter(|open| !before.contains(open))
            .cloned()
            .collect();
        for open in opened {
            self.transitions.insert(
                open,
                Transition {
                    started: now,
                    opening: true,
                },
            );
        }
    }

    /// Click on the header at `index`: focuses it and toggles its item.
    pub fn press_header(&mut self, index: usize, now: Instant) {
        let Some(id) = self.ids.get(index).cloned() else {
            return;
        };
        self.focused = Some(index);
        self.toggle(&id, now);
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.ids.len() {
            self.focused = Some(index);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Handles a key while a header is focused. Returns whether it was consumed.
    pub fn handle_key(&mut self, key: KeyInput, now: Instant) -> bool {
        let Some(index) = self.focused else {
            return false;
        };
        let count = self.ids.len();
        if count == 0 {
            return false;
        }
        match key {
            KeyInput::ArrowDown => self.focused = Some((index + 1) % count),
            KeyInput::ArrowUp => self.focused = Some((index + count - 1) % count),
            KeyInput::Home => self.focused = Some(0),
            KeyInput::End => self.focused = Some(count - 1),
            KeyInput::Enter | KeyInput::Space => {
                if let Some(id) = self.ids.get(index).cloned() {
                    self.toggle(&id, now);
                }
            }
            KeyInput::Escape => self.blur(),
            KeyInput::ArrowLeft | KeyInput::ArrowRight => return false,
        }
        true
    }

    /// Advances the animation clock and drops settled transitions.
    pub fn on_frame(&mut self, now: Instant) {
        self.clock = now;
        self.transitions.retain(|_, t| !t.is_settled(now));
    }

    /// Whether a frame subscription is needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Opacity of the body of `id`, or `None` when the body is not rendered.
    #[must_use]
    pub fn body_alpha(&self, id: &ItemId) -> Option<f32> {
        let open = self.selection.is_open(id);
        match self.transitions.get(id) {
            Some(t) if !t.is_settled(self.clock) => {
                let p = t.progress(self.clock);
                Some(if t.opening { p } else { 1.0 - p })
            }
            _ if open => Some(1.0),
            _ => None,
        }
    }
}
