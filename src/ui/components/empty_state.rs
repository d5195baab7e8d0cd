// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown where a list has nothing to display.

use super::bidi;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{self, Surface};
use iced::widget::{button, Column, Container};
use iced::{alignment, Element, Length};

/// Renders a centered message, with an optional reset action below it.
pub fn view<'a, Message: Clone + 'a>(
    message: String,
    action: Option<(String, Message)>,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            bidi::label(message)
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        );

    if let Some((label, message)) = action {
        content = content.push(
            button(bidi::label(label))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(message),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::surface(Surface::Inset))
        .into()
}
