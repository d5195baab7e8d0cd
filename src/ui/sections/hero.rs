// SPDX-License-Identifier: MPL-2.0
//! Hero banner: salon name, tagline and the call-us strip.

use super::badge;
use crate::content::Salon;
use crate::i18n::I18n;
use crate::ui::components::bidi;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, Surface};
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n, salon: &'a Salon) -> Element<'a, Message> {
    let direction = i18n.direction();

    let highlights = salon
        .highlights
        .iter()
        .map(|highlight| badge(highlight.clone(), false))
        .collect();

    let call = i18n.tr_with_args("hero-call-us", &[("phone", salon.phone.as_str().into())]);
    let call_strip = Container::new(bidi::label(call).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::XL])
        .style(styles::container::surface(Surface::Accent));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(bidi::label(salon.name.as_str()).size(typography::DISPLAY))
        .push(bidi::label(salon.tagline.as_str()).size(typography::TITLE_MD))
        .push(
            bidi::label(salon.intro.as_str())
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center),
        )
        .push(bidi::row(highlights, direction).spacing(spacing::XS))
        .push(call_strip);

    Container::new(
        Container::new(content)
            .padding(spacing::XXL)
            .style(styles::container::surface(Surface::Glass)),
    )
    .width(Length::Fill)
    .padding([spacing::XL, spacing::LG])
    .center_x(Length::Fill)
    .into()
}
