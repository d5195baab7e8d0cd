// SPDX-License-Identifier: MPL-2.0
//! Accordion rendering of a [`Disclosure`], used by the salon policies and
//! the FAQ.
//!
//! Headers are always rendered. A body is rendered while its item is open or
//! while its closing fade is still running; its opacity follows
//! [`Disclosure::body_alpha`].

use super::frame;
use crate::content::Entry;
use crate::i18n::I18n;
use crate::ui::components::bidi;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{self, Control, Surface};
use crate::widgets::Disclosure;
use iced::widget::{button, Column, Container};
use iced::{Element, Length};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: String,
    pub subtitle: Option<String>,
    pub entries: &'a [Entry],
    pub disclosure: &'a Disclosure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Header at this index was clicked.
    HeaderPressed(usize),
}

pub fn update(disclosure: &mut Disclosure, message: Message, now: Instant) {
    match message {
        Message::HeaderPressed(index) => disclosure.press_header(index, now),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let direction = ctx.i18n.direction();
    let mut list = Column::new().spacing(spacing::XS).width(Length::Fill);

    for (index, (entry, id)) in ctx
        .entries
        .iter()
        .zip(ctx.disclosure.ids())
        .enumerate()
    {
        let open = ctx.disclosure.is_open(id);
        let focused = ctx.disclosure.focused() == Some(index);

        let indicator = match (open, direction.is_rtl()) {
            (true, _) => "▾",
            (false, true) => "◂",
            (false, false) => "▸",
        };
        let header_row = bidi::row(
            vec![
                bidi::label(indicator).size(typography::BODY).into(),
                bidi::paragraph(entry.title.as_str(), direction)
                    .size(typography::TITLE_SM)
                    .into(),
            ],
            direction,
        )
        .spacing(spacing::SM);

        let header = button(header_row)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::button::control(Control::Header { open, focused }))
            .on_press(Message::HeaderPressed(index));

        let mut item = Column::new().spacing(spacing::XXS).push(header);

        if let Some(alpha) = ctx.disclosure.body_alpha(id) {
            item = item.push(
                Container::new(
                    bidi::paragraph(entry.body.as_str(), direction).size(typography::BODY),
                )
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::surface_faded(Surface::Inset, alpha)),
            );
        }

        list = list.push(item);
    }

    frame(ctx.title, ctx.subtitle, list.into())
}
