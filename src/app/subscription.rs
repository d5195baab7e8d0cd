// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are rebuilt from state after every update. A timer that is
//! no longer returned is dropped by the runtime, and returning the same one
//! again keeps the running instance.

use super::config::{COUNTDOWN_TICK, REVEAL_FRAME_INTERVAL};
use super::Message;
use crate::widgets::KeyInput;
use iced::{event, time, Subscription};

/// Keyboard input for the page widgets.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        iced::Event::Keyboard(key_event) => {
            KeyInput::from_keyboard_event(&key_event).map(Message::Key)
        }
        _ => None,
    })
}

/// One-second countdown tick while the countdown still runs.
pub fn create_countdown_subscription(running: bool) -> Subscription<Message> {
    if running {
        time::every(COUNTDOWN_TICK).map(|_| Message::CountdownTick)
    } else {
        Subscription::none()
    }
}

/// Animation frames while a disclosure transition is in flight.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(REVEAL_FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}
