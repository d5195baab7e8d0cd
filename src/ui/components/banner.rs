// SPDX-License-Identifier: MPL-2.0
//! Dismissible warning banner shown above the page.
//!
//! ```ignore
//! Banner::new(i18n.tr("banner-config-load-error"))
//!     .dismiss(i18n.tr("banner-dismiss"), Message::DismissBanner)
//!     .view(direction)
//! ```

use super::bidi;
use crate::i18n::ReadingDirection;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{self, Control, Surface};
use iced::widget::{button, Container};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct Banner<Message> {
    message: String,
    dismiss: Option<(String, Message)>,
}

impl<Message: Clone + 'static> Banner<Message> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dismiss: None,
        }
    }

    /// Adds a dismiss button emitting `message`.
    pub fn dismiss(mut self, label: impl Into<String>, message: Message) -> Self {
        self.dismiss = Some((label.into(), message));
        self
    }

    pub fn view(self, direction: ReadingDirection) -> Element<'static, Message> {
        let mut children: Vec<Element<'static, Message>> = vec![bidi::paragraph(
            self.message,
            direction,
        )
        .size(typography::BODY)
        .into()];

        if let Some((label, message)) = self.dismiss {
            children.push(
                button(bidi::label(label).size(typography::CAPTION))
                    .on_press(message)
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::control(Control::Secondary))
                    .into(),
            );
        }

        Container::new(bidi::row(children, direction).spacing(spacing::SM))
            .padding([spacing::XS, spacing::MD])
            .width(Length::Fill)
            .style(styles::container::surface(Surface::Banner))
            .into()
    }
}
