// SPDX-License-Identifier: MPL-2.0
//! Page sections, in the order the page renders them.
//!
//! Interactive sections follow the component pattern used across the UI: a
//! `ViewContext` borrowed from application state, a local `Message`, and an
//! `update` that applies it to the widget state the section displays.
//! Static sections are generic over the message type since they emit none.

pub mod disclosure_list;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod location;
pub mod products;
pub mod promotions;
pub mod services;
pub mod stylists;

use crate::i18n::ReadingDirection;
use crate::ui::components::bidi;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, Control, Surface};
use crate::widgets::Category;
use iced::widget::{button, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

/// Wraps a section body with its heading, centered within the page width.
pub fn frame<'a, Message: 'a>(
    title: String,
    subtitle: Option<String>,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut heading = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(bidi::label(title).size(typography::TITLE_LG));
    if let Some(subtitle) = subtitle {
        heading = heading.push(bidi::label(subtitle).size(typography::BODY_LG));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading.width(Length::Fill))
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::LG])
        .center_x(Length::Fill)
        .into()
}

/// Lays `cells` out in rows of `columns`, in reading order. The last row is
/// padded so every cell keeps the same width.
pub fn grid<'a, Message: 'a>(
    cells: Vec<Element<'a, Message>>,
    columns: usize,
    direction: ReadingDirection,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::MD).width(Length::Fill);
    let mut current: Vec<Element<'a, Message>> = Vec::with_capacity(columns);

    for cell in cells {
        current.push(cell);
        if current.len() == columns {
            rows = rows.push(grid_row(std::mem::take(&mut current), columns, direction));
        }
    }
    if !current.is_empty() {
        rows = rows.push(grid_row(current, columns, direction));
    }

    rows.into()
}

fn grid_row<'a, Message: 'a>(
    mut cells: Vec<Element<'a, Message>>,
    columns: usize,
    direction: ReadingDirection,
) -> Row<'a, Message> {
    while cells.len() < columns {
        cells.push(Space::new().width(Length::Fill).into());
    }
    bidi::row(cells, direction)
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_y(alignment::Vertical::Top)
}

/// Category tab strip. `label` names each tab, `on_select` builds the
/// message for a press.
pub fn tab_strip<'a, Message: Clone + 'a>(
    tabs: Vec<Category>,
    active: &Category,
    label: impl Fn(&Category) -> String,
    on_select: impl Fn(Category) -> Message,
    direction: ReadingDirection,
) -> Element<'a, Message> {
    let buttons = tabs
        .into_iter()
        .map(|tab| {
            let is_active = &tab == active;
            button(bidi::label(label(&tab)).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::control(Control::Tab { active: is_active }))
                .on_press(on_select(tab))
                .into()
        })
        .collect();

    Container::new(bidi::row(buttons, direction).spacing(spacing::XS))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// Small pill label.
pub fn badge<'a, Message: 'a>(text: String, hot: bool) -> Element<'a, Message> {
    Container::new(bidi::label(text).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::surface(Surface::Badge { hot }))
        .into()
}

/// Card surface around `content`.
pub fn card<'a, Message: 'a>(content: Column<'a, Message>, surface: Surface) -> Element<'a, Message> {
    Container::new(content.spacing(spacing::XS))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::surface(surface))
        .into()
}
