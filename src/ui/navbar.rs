// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! The bar shows the salon name and a menu toggle. The dropdown it opens
//! lists the available languages and the theme modes; choosing an entry
//! applies it for the session and closes the menu.

use crate::i18n::fluent::I18n;
use crate::ui::components::bidi;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, Control, Surface};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Container, Space};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub salon_name: &'a str,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    SelectLanguage(LanguageIdentifier),
    SelectTheme(ThemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::SelectLanguage(locale) => {
            *menu_open = false;
            Event::LanguageSelected(locale)
        }
        Message::SelectTheme(mode) => {
            *menu_open = false;
            Event::ThemeSelected(mode)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let direction = ctx.i18n.direction();

    let menu_button = button(bidi::label(format!("☰  {}", ctx.i18n.tr("menu-toggle"))))
        .on_press(Message::ToggleMenu)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::control(Control::Link {
            selected: ctx.menu_open,
        }));

    let row = bidi::row(
        vec![
            bidi::label(ctx.salon_name)
                .size(typography::TITLE_MD)
                .into(),
            Space::new().width(Length::Fill).into(),
            menu_button.into(),
        ],
        direction,
    )
    .spacing(spacing::SM)
    .padding(spacing::SM)
    .width(Length::Fill);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::surface(Surface::Glass))
        .into()
}

/// Build the dropdown with the language and theme entries.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let direction = ctx.i18n.direction();
    let current = ctx.i18n.current_locale();

    let mut menu = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .push(build_menu_heading(ctx.i18n.tr("menu-language")));

    for locale in &ctx.i18n.available_locales {
        let label = ctx.i18n.tr(&language_label_key(locale));
        menu = menu.push(build_menu_item(
            label,
            locale == current,
            Message::SelectLanguage(locale.clone()),
        ));
    }

    menu = menu.push(build_menu_heading(ctx.i18n.tr("menu-theme")));
    for mode in ThemeMode::ALL {
        menu = menu.push(build_menu_item(
            ctx.i18n.tr(mode.label_key()),
            mode == ctx.theme_mode,
            Message::SelectTheme(mode),
        ));
    }

    let dropdown = Container::new(menu)
        .padding(spacing::XS)
        .style(styles::container::surface(Surface::Raised));

    Container::new(dropdown)
        .width(Length::Fill)
        .padding([0.0, spacing::SM])
        .align_x(bidi::trailing(direction))
        .into()
}

/// i18n key naming a locale in its own language, e.g. `lang-he`.
fn language_label_key(locale: &LanguageIdentifier) -> String {
    format!("lang-{}", locale.language)
}

fn build_menu_heading<'a>(label: String) -> Element<'a, Message> {
    Container::new(bidi::label(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .into()
}

fn build_menu_item<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    let text = if selected {
        format!("✓ {label}")
    } else {
        label
    };
    button(bidi::label(text).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::control(Control::Link { selected }))
        .into()
}
