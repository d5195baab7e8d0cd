// SPDX-License-Identifier: MPL-2.0
//! Services menu with one tab per service category.
//!
//! A category without services renders an empty state whose action returns
//! to the first category.

use super::{badge, card, frame, grid, tab_strip};
use crate::content::{price_label, Catalog, Service};
use crate::i18n::{I18n, ReadingDirection};
use crate::ui::components::{bidi, empty_state};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::Surface;
use crate::widgets::{Category, FilterTabs};
use iced::widget::Column;
use iced::Element;

const COLUMNS: usize = 2;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub tabs: &'a FilterTabs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(Category),
    /// Empty-state reset.
    ShowFirst,
}

pub fn update(tabs: &mut FilterTabs, message: Message) {
    match message {
        Message::Select(category) => tabs.select(category),
        Message::ShowFirst => tabs.reset(),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let direction = ctx.i18n.direction();
    let catalog = ctx.catalog;

    let strip = tab_strip(
        ctx.tabs.tabs(),
        ctx.tabs.active(),
        |tab| match tab {
            Category::All => ctx.i18n.tr("products-all"),
            Category::Named(id) => catalog
                .service_category_title(id)
                .unwrap_or(id.as_str())
                .to_string(),
        },
        Message::Select,
        direction,
    );

    let visible = ctx.tabs.visible(&catalog.services);
    let menu = if visible.is_empty() {
        empty_state::view(
            ctx.i18n.tr("services-empty"),
            Some((ctx.i18n.tr("services-show-first"), Message::ShowFirst)),
        )
    } else {
        let cards = visible
            .into_iter()
            .map(|service| service_card(ctx.i18n, service, direction))
            .collect();
        grid(cards, COLUMNS, direction)
    };

    let body = Column::new().spacing(spacing::LG).push(strip).push(menu);

    frame(
        ctx.i18n.tr("services-title"),
        Some(ctx.i18n.tr("services-subtitle")),
        body.into(),
    )
}

fn service_card<'a>(
    i18n: &I18n,
    service: &'a Service,
    direction: ReadingDirection,
) -> Element<'a, Message> {
    let mut heading: Vec<Element<'a, Message>> = vec![bidi::label(service.name.as_str())
        .size(typography::TITLE_SM)
        .into()];
    if service.popular {
        heading.push(badge(i18n.tr("service-popular"), false));
    }

    let duration = i18n.tr_with_args(
        "service-duration",
        &[("minutes", service.duration_minutes.into())],
    );
    let footer: Vec<Element<'a, Message>> = vec![
        bidi::label(price_label(service.price))
            .size(typography::TITLE_SM)
            .into(),
        bidi::label(duration).size(typography::CAPTION).into(),
    ];

    let content = bidi::column(
        vec![
            bidi::row(heading, direction).spacing(spacing::XS).into(),
            bidi::paragraph(service.description.as_str(), direction)
                .size(typography::BODY)
                .into(),
            bidi::row(footer, direction).spacing(spacing::MD).into(),
        ],
        direction,
    );

    let surface = if service.popular {
        Surface::Popular
    } else {
        Surface::Raised
    };
    card(content, surface)
}
