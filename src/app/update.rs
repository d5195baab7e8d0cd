// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Section messages go straight to the widget state they drive. Key presses
//! are routed in a fixed order: the lightbox while it is open, then Escape
//! closes an open navbar menu, then the disclosure holding focus.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::sections::{disclosure_list, gallery, products, services};
use crate::ui::theming::ThemeMode;
use crate::widgets::{Countdown, Disclosure, FilterTabs, KeyInput, Lightbox};
use chrono::Utc;
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub services: &'a mut FilterTabs,
    pub products: &'a mut FilterTabs,
    pub lightbox: &'a mut Lightbox,
    pub policies: &'a mut Disclosure,
    pub faq: &'a mut Disclosure,
    pub countdown: &'a mut Countdown,
    pub banners: &'a mut Vec<String>,
}

/// The two disclosures on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accordion {
    Policies,
    Faq,
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar_message(ctx, message),
        Message::Services(message) => services::update(ctx.services, message),
        Message::Products(message) => products::update(ctx.products, message),
        Message::Gallery(message) => gallery::update(ctx.lightbox, message),
        Message::Policies(message) => {
            handle_disclosure_message(ctx, Accordion::Policies, message, Instant::now());
        }
        Message::Faq(message) => {
            handle_disclosure_message(ctx, Accordion::Faq, message, Instant::now());
        }
        Message::Key(key) => handle_key(ctx, key, Instant::now()),
        Message::CountdownTick => ctx.countdown.tick(Utc::now()),
        Message::Frame(now) => {
            ctx.policies.on_frame(now);
            ctx.faq.on_frame(now);
        }
        Message::DismissBanner => {
            if !ctx.banners.is_empty() {
                ctx.banners.remove(0);
            }
        }
    }
    Task::none()
}

fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => {}
        NavbarEvent::LanguageSelected(locale) => ctx.i18n.set_locale(locale),
        NavbarEvent::ThemeSelected(mode) => {
            log::debug!("theme mode set to {mode:?}");
            *ctx.theme_mode = mode;
        }
    }
}

/// Applies a header press and moves keyboard focus to that accordion.
fn handle_disclosure_message(
    ctx: &mut UpdateContext<'_>,
    target: Accordion,
    message: disclosure_list::Message,
    now: Instant,
) {
    let (pressed, other) = match target {
        Accordion::Policies => (&mut *ctx.policies, &mut *ctx.faq),
        Accordion::Faq => (&mut *ctx.faq, &mut *ctx.policies),
    };
    other.blur();
    disclosure_list::update(pressed, message, now);
}

fn handle_key(ctx: &mut UpdateContext<'_>, key: KeyInput, now: Instant) {
    if ctx.lightbox.handle_key(key, ctx.i18n.direction()) {
        return;
    }
    if key == KeyInput::Escape && *ctx.menu_open {
        navbar::update(navbar::Message::CloseMenu, ctx.menu_open);
        return;
    }
    if !ctx.policies.handle_key(key, now) {
        ctx.faq.handle_key(key, now);
    }
}
