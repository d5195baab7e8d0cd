// SPDX-License-Identifier: MPL-2.0
use crate::content::Salon;
use crate::i18n::I18n;
use crate::ui::components::bidi;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{self, Surface};
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n, salon: &'a Salon, year: i32) -> Element<'a, Message> {
    let contact = format!("{} · {}", salon.address, salon.phone);
    let rights = i18n.tr_with_args(
        "footer-rights",
        &[
            ("year", year.into()),
            ("name", salon.name.as_str().into()),
        ],
    );

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(bidi::label(salon.name.as_str()).size(typography::TITLE_MD))
        .push(bidi::label(contact).size(typography::BODY))
        .push(bidi::label(rights).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .style(styles::container::surface(Surface::Accent))
        .into()
}
