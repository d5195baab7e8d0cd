// SPDX-License-Identifier: MPL-2.0
//! Promotions: the countdown band and the promotion cards.

use super::{badge, card, frame, grid};
use crate::content::Promotion;
use crate::i18n::{I18n, ReadingDirection};
use crate::ui::components::bidi;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, Surface};
use crate::widgets::{Countdown, TimeLeft};
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length};

const COLUMNS: usize = 2;
const DATE_FORMAT: &str = "%d/%m/%Y";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub promotions: &'a [Promotion],
    pub countdown: &'a Countdown,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let direction = ctx.i18n.direction();

    let cards = ctx
        .promotions
        .iter()
        .map(|promotion| promotion_card(ctx.i18n, promotion, direction))
        .collect();

    let body = Column::new()
        .spacing(spacing::LG)
        .push(countdown_band(ctx.i18n, ctx.countdown, direction))
        .push(grid(cards, COLUMNS, direction));

    frame(
        ctx.i18n.tr("promotions-title"),
        Some(ctx.i18n.tr("promotions-subtitle")),
        body.into(),
    )
}

/// Countdown cells, largest unit first in reading order.
fn countdown_band<'a, Message: 'a>(
    i18n: &I18n,
    countdown: &Countdown,
    direction: ReadingDirection,
) -> Element<'a, Message> {
    let mut band = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(bidi::label(i18n.tr("countdown-title")).size(typography::TITLE_MD));

    if countdown.is_running() {
        let cells = units(countdown.remaining())
            .into_iter()
            .map(|(value, key)| time_cell(value, i18n.tr(key)))
            .collect();
        band = band.push(bidi::row(cells, direction).spacing(spacing::SM));
    } else {
        band = band.push(bidi::label(i18n.tr("countdown-ended")).size(typography::BODY_LG));
    }

    Container::new(band)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::surface(Surface::Accent))
        .into()
}

fn units(left: TimeLeft) -> [(u64, &'static str); 4] {
    [
        (left.days, "countdown-days"),
        (left.hours, "countdown-hours"),
        (left.minutes, "countdown-minutes"),
        (left.seconds, "countdown-seconds"),
    ]
}

fn time_cell<'a, Message: 'a>(value: u64, unit: String) -> Element<'a, Message> {
    let content = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(bidi::label(format!("{value:02}")).size(typography::DISPLAY))
        .push(bidi::label(unit).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fixed(sizing::COUNTDOWN_CELL))
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::surface(Surface::Glass))
        .into()
}

fn promotion_card<'a, Message: 'a>(
    i18n: &I18n,
    promotion: &'a Promotion,
    direction: ReadingDirection,
) -> Element<'a, Message> {
    let discount = i18n.tr_with_args(
        "promo-discount",
        &[("percent", promotion.discount_percent.into())],
    );
    let mut heading: Vec<Element<'a, Message>> = vec![
        bidi::label(promotion.title.as_str())
            .size(typography::TITLE_SM)
            .into(),
        badge(discount, false),
    ];
    if promotion.hot {
        heading.push(badge(i18n.tr("promo-hot"), true));
    }

    let valid_until = i18n.tr_with_args(
        "promo-valid-until",
        &[(
            "date",
            promotion.valid_until.format(DATE_FORMAT).to_string().into(),
        )],
    );

    let content = bidi::column(
        vec![
            bidi::row(heading, direction).spacing(spacing::XS).into(),
            bidi::paragraph(promotion.description.as_str(), direction)
                .size(typography::BODY)
                .into(),
            bidi::label(valid_until).size(typography::CAPTION).into(),
        ],
        direction,
    );

    card(
        content,
        if promotion.hot {
            Surface::Popular
        } else {
            Surface::Raised
        },
    )
}
