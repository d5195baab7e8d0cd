// SPDX-License-Identifier: MPL-2.0
//! Team bios.

use super::{badge, card, frame, grid};
use crate::content::Stylist;
use crate::i18n::I18n;
use crate::ui::components::bidi;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::Surface;
use iced::Element;

const COLUMNS: usize = 2;

pub fn view<'a, Message: 'a>(i18n: &I18n, stylists: &'a [Stylist]) -> Element<'a, Message> {
    let direction = i18n.direction();

    let cards = stylists
        .iter()
        .map(|stylist| {
            let specialties = stylist
                .specialties
                .iter()
                .map(|s| badge(s.clone(), false))
                .collect();
            let content = bidi::column(
                vec![
                    bidi::label(stylist.name.as_str())
                        .size(typography::TITLE_MD)
                        .into(),
                    bidi::label(stylist.role.as_str())
                        .size(typography::BODY)
                        .into(),
                    bidi::paragraph(stylist.bio.as_str(), direction)
                        .size(typography::BODY)
                        .into(),
                    bidi::row(specialties, direction)
                        .spacing(spacing::XXS)
                        .into(),
                ],
                direction,
            );
            card(content, Surface::Raised)
        })
        .collect();

    frame(
        i18n.tr("stylists-title"),
        Some(i18n.tr("stylists-subtitle")),
        grid(cards, COLUMNS, direction),
    )
}
