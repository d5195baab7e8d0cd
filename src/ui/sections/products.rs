// SPDX-License-Identifier: MPL-2.0
//! Product shelf with a category filter.
//!
//! A filter that leaves nothing to show renders an explicit empty state with
//! a control that resets the filter to all products.

use super::{card, frame, grid, tab_strip};
use crate::content::{price_label, Product};
use crate::i18n::{I18n, ReadingDirection};
use crate::ui::components::{bidi, empty_state};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::Surface;
use crate::widgets::{Category, FilterTabs};
use iced::widget::Column;
use iced::Element;

const COLUMNS: usize = 4;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub products: &'a [Product],
    pub tabs: &'a FilterTabs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(Category),
    /// Empty-state reset.
    ShowAll,
}

pub fn update(tabs: &mut FilterTabs, message: Message) {
    match message {
        Message::Select(category) => tabs.select(category),
        Message::ShowAll => tabs.reset(),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let direction = ctx.i18n.direction();

    let strip = tab_strip(
        ctx.tabs.tabs(),
        ctx.tabs.active(),
        |tab| match tab {
            Category::All => ctx.i18n.tr("products-all"),
            Category::Named(name) => name.clone(),
        },
        Message::Select,
        direction,
    );

    let visible = ctx.tabs.visible(ctx.products);
    let shelf = if visible.is_empty() {
        empty_state::view(
            ctx.i18n.tr("products-empty"),
            Some((ctx.i18n.tr("products-show-all"), Message::ShowAll)),
        )
    } else {
        let cards = visible
            .into_iter()
            .map(|product| product_card(product, direction))
            .collect();
        grid(cards, COLUMNS, direction)
    };

    let body = Column::new().spacing(spacing::LG).push(strip).push(shelf);

    frame(
        ctx.i18n.tr("products-title"),
        Some(ctx.i18n.tr("products-subtitle")),
        body.into(),
    )
}

fn product_card(product: &Product, direction: ReadingDirection) -> Element<'_, Message> {
    let content = bidi::column(
        vec![
            bidi::label(product.category.as_str())
                .size(typography::CAPTION)
                .into(),
            bidi::label(product.name.as_str())
                .size(typography::TITLE_SM)
                .into(),
            bidi::paragraph(product.description.as_str(), direction)
                .size(typography::BODY)
                .into(),
            bidi::label(price_label(product.price))
                .size(typography::BODY_LG)
                .into(),
        ],
        direction,
    );
    card(content, Surface::Raised)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn shelf() -> Vec<Product> {
        Catalog::embedded().expect("embedded catalog").products
    }

    #[test]
    fn show_all_resets_an_empty_filter() {
        let products = shelf();
        let mut tabs = FilterTabs::new(&products);

        update(&mut tabs, Message::Select(Category::named("אין כזו")));
        assert!(tabs.is_empty_for(&products));

        update(&mut tabs, Message::ShowAll);
        assert_eq!(tabs.active(), &Category::All);
        assert_eq!(tabs.visible(&products).len(), products.len());
    }

    #[test]
    fn products_view_renders_empty_state() {
        let i18n = I18n::default();
        let products = shelf();
        let mut tabs = FilterTabs::new(&products);
        tabs.select(Category::named("אין כזו"));
        let _element = view(ViewContext {
            i18n: &i18n,
            products: &products,
            tabs: &tabs,
        });
    }
}
