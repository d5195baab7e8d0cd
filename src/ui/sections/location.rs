// SPDX-License-Identifier: MPL-2.0
//! Address, getting here, and the opening-hours table with today marked.

use super::{card, frame};
use crate::content::{Location, OpeningHours, Salon};
use crate::i18n::{I18n, ReadingDirection};
use crate::ui::components::bidi;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{self, Surface};
use chrono::Weekday;
use iced::widget::{Column, Container, Space};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub salon: &'a Salon,
    pub location: &'a Location,
    pub today: Weekday,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let direction = i18n.direction();

    let mut hours = Column::new()
        .spacing(spacing::XXS)
        .push(bidi::label(i18n.tr("location-hours")).size(typography::TITLE_SM));
    for row in &ctx.salon.hours {
        hours = hours.push(hours_row(i18n, row, row.is_on(ctx.today), direction));
    }

    let mut details = vec![
        info_line(i18n.tr("location-address"), &ctx.salon.address, direction),
        info_line(i18n.tr("location-phone"), &ctx.salon.phone, direction),
    ];
    if let Some(mobile) = &ctx.salon.mobile {
        details.push(info_line(i18n.tr("location-mobile"), mobile, direction));
    }
    details.extend([
        info_line(i18n.tr("location-parking"), &ctx.location.parking, direction),
        info_line(i18n.tr("location-transit"), &ctx.location.transit, direction),
        info_line(
            i18n.tr("location-directions"),
            &ctx.location.directions,
            direction,
        ),
    ]);

    let body = bidi::row(
        vec![
            card(bidi::column(details, direction), Surface::Raised),
            card(hours, Surface::Raised),
        ],
        direction,
    )
    .spacing(spacing::MD)
    .width(Length::Fill);

    frame(i18n.tr("location-title"), None, body.into())
}

fn info_line<'a, Message: 'a>(
    heading: String,
    text: &'a str,
    direction: ReadingDirection,
) -> Element<'a, Message> {
    bidi::column(
        vec![
            bidi::label(heading).size(typography::CAPTION).into(),
            bidi::paragraph(text, direction)
                .size(typography::BODY)
                .into(),
        ],
        direction,
    )
    .into()
}

fn hours_row<'a, Message: 'a>(
    i18n: &I18n,
    row: &'a OpeningHours,
    is_today: bool,
    direction: ReadingDirection,
) -> Element<'a, Message> {
    let mut day: Vec<Element<'a, Message>> =
        vec![bidi::label(row.day.as_str()).size(typography::BODY).into()];
    if is_today {
        day.push(
            bidi::label(i18n.tr("location-today"))
                .size(typography::CAPTION)
                .into(),
        );
    }

    let line = bidi::row(
        vec![
            bidi::row(day, direction).spacing(spacing::XS).into(),
            Space::new().width(Length::Fill).into(),
            bidi::label(row.hours.as_str()).size(typography::BODY).into(),
        ],
        direction,
    )
    .width(Length::Fill);

    let surface = if is_today {
        Surface::Accent
    } else {
        Surface::Inset
    };
    Container::new(line)
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .style(styles::container::surface(surface))
        .into()
}
