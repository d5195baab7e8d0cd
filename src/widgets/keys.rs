// SPDX-License-Identifier: MPL-2.0
//! Platform-neutral key vocabulary consumed by the interactive widgets.
//!
//! The application subscription translates Iced keyboard events into
//! [`KeyInput`] so the widget state machines can be driven (and tested)
//! without constructing native events.

use iced::keyboard::{self, key::Named};

/// Keys the widgets react to. Everything else is dropped at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
    Escape,
}

impl KeyInput {
    /// Maps a key press to a widget key. Releases and unrelated keys yield `None`.
    #[must_use]
    pub fn from_keyboard_event(event: &keyboard::Event) -> Option<Self> {
        match event {
            keyboard::Event::KeyPressed { key, .. } => Self::from_key(key),
            _ => None,
        }
    }

    /// Maps a logical key to a widget key.
    #[must_use]
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(named) => match named {
                Named::ArrowUp => Some(Self::ArrowUp),
                Named::ArrowDown => Some(Self::ArrowDown),
                Named::ArrowLeft => Some(Self::ArrowLeft),
                Named::ArrowRight => Some(Self::ArrowRight),
                Named::Home => Some(Self::Home),
                Named::End => Some(Self::End),
                Named::Enter => Some(Self::Enter),
                Named::Space => Some(Self::Space),
                Named::Escape => Some(Self::Escape),
                _ => None,
            },
            // Some platforms report the space bar as a character.
            keyboard::Key::Character(c) if c.as_str() == " " => Some(Self::Space),
            _ => None,
        }
    }

    /// Whether this key activates the focused control.
    #[must_use]
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}
