// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one canonical composition: navbar, hero, services,
//! promotions, products, gallery, stylists, policies, FAQ, location and
//! footer. The navbar and banners stay above the scroll area; the lightbox
//! is stacked over everything.

use super::Message;
use crate::content::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::components::banner::Banner;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections::{
    disclosure_list, footer, gallery, hero, location, products, promotions, services, stylists,
};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::scroll_gate;
use crate::widgets::{Countdown, Disclosure, FilterTabs, Lightbox, ScrollLock};
use chrono::{Datelike, Weekday};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};
use std::path::PathBuf;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub gallery_files: &'a [Option<PathBuf>],
    pub gallery_columns: usize,
    pub show_captions: bool,
    pub theme_mode: ThemeMode,
    pub menu_open: bool,
    pub services: &'a FilterTabs,
    pub products: &'a FilterTabs,
    pub lightbox: &'a Lightbox,
    pub scroll_lock: &'a ScrollLock,
    pub policies: &'a Disclosure,
    pub faq: &'a Disclosure,
    pub countdown: &'a Countdown,
    pub banners: &'a [String],
    pub today: Weekday,
    pub year: i32,
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let catalog = ctx.catalog;

    let gallery_ctx = gallery::ViewContext {
        i18n,
        images: &catalog.gallery,
        files: ctx.gallery_files,
        lightbox: ctx.lightbox,
        columns: ctx.gallery_columns,
        show_captions: ctx.show_captions,
    };

    let page = Column::new()
        .width(Length::Fill)
        .push(hero::view(i18n, &catalog.salon))
        .push(
            services::view(services::ViewContext {
                i18n,
                catalog,
                tabs: ctx.services,
            })
            .map(Message::Services),
        )
        .push(promotions::view(promotions::ViewContext {
            i18n,
            promotions: &catalog.promotions,
            countdown: ctx.countdown,
        }))
        .push(
            products::view(products::ViewContext {
                i18n,
                products: &catalog.products,
                tabs: ctx.products,
            })
            .map(Message::Products),
        )
        .push(gallery::view(&gallery_ctx).map(Message::Gallery))
        .push(stylists::view(i18n, &catalog.stylists))
        .push(
            disclosure_list::view(disclosure_list::ViewContext {
                i18n,
                title: i18n.tr("policies-title"),
                subtitle: Some(i18n.tr("policies-subtitle")),
                entries: &catalog.policies,
                disclosure: ctx.policies,
            })
            .map(Message::Policies),
        )
        .push(
            disclosure_list::view(disclosure_list::ViewContext {
                i18n,
                title: i18n.tr("faq-title"),
                subtitle: Some(i18n.tr("faq-subtitle")),
                entries: &catalog.faq,
                disclosure: ctx.faq,
            })
            .map(Message::Faq),
        )
        .push(location::view(location::ViewContext {
            i18n,
            salon: &catalog.salon,
            location: &catalog.location,
            today: ctx.today,
        }))
        .push(footer::view(i18n, &catalog.salon, ctx.year));

    let scroll_area = scroll_gate(
        ctx.scroll_lock.clone(),
        scrollable(page).width(Length::Fill).height(Length::Fill),
    );

    let mut layout = Column::new().width(Length::Fill).height(Length::Fill).push(
        navbar::view(NavbarViewContext {
            i18n,
            salon_name: &catalog.salon.name,
            menu_open: ctx.menu_open,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Navbar),
    );
    if let Some(key) = ctx.banners.first() {
        layout = layout.push(
            Banner::new(i18n.tr(key))
                .dismiss(i18n.tr("banner-dismiss"), Message::DismissBanner)
                .view(i18n.direction()),
        );
    }
    layout = layout.push(scroll_area);

    let base = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    // The stack is always present so opening the lightbox never rebuilds the
    // page tree underneath it.
    let mut stack = Stack::new().push(base);
    if let Some(overlay) = gallery::lightbox(&gallery_ctx) {
        stack = stack.push(overlay.map(Message::Gallery));
    }
    stack.into()
}

/// Day used to highlight today's opening hours.
pub fn local_today() -> (Weekday, i32) {
    let now = chrono::Local::now();
    (now.weekday(), now.year())
}
