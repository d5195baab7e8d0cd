// SPDX-License-Identifier: MPL-2.0
//! Gallery grid and the lightbox overlay.
//!
//! The grid is part of the scrolling page. The lightbox is a separate layer
//! stacked over the whole window by the application view: a backdrop that
//! closes on click, with the image panel on top of it capturing its own
//! clicks.

use super::{frame, grid};
use crate::content::GalleryImage;
use crate::i18n::{I18n, ReadingDirection};
use crate::ui::components::{bidi, empty_state};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, Control, Surface};
use crate::widgets::{Lightbox, Step};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, center, mouse_area, opaque, Column, Container};
use iced::{alignment, ContentFit, Element, Length};
use std::path::PathBuf;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [GalleryImage],
    /// Resolved file for each image, `None` when it is missing on disk.
    pub files: &'a [Option<PathBuf>],
    pub lightbox: &'a Lightbox,
    pub columns: usize,
    pub show_captions: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(usize),
    Close,
    Step(Step),
}

pub fn update(lightbox: &mut Lightbox, message: Message) {
    match message {
        Message::Open(index) => {
            lightbox.open(index);
        }
        Message::Close => lightbox.close(),
        Message::Step(step) => {
            lightbox.navigate(step);
        }
    }
}

/// The gallery section of the page.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let direction = ctx.i18n.direction();

    let body = if ctx.images.is_empty() {
        empty_state::view(ctx.i18n.tr("gallery-empty"), None)
    } else {
        let cells = ctx
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| thumbnail(ctx, index, image, direction))
            .collect();
        grid(cells, ctx.columns, direction)
    };

    frame(
        ctx.i18n.tr("gallery-title"),
        Some(ctx.i18n.tr("gallery-subtitle")),
        body,
    )
}

fn thumbnail<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    image: &'a GalleryImage,
    direction: ReadingDirection,
) -> Element<'a, Message> {
    let picture = picture(
        ctx.files.get(index).and_then(Option::as_ref),
        image,
        Length::Fixed(sizing::THUMBNAIL_HEIGHT),
        ContentFit::Cover,
    );

    let mut tile = Column::new().spacing(spacing::XS).push(picture);
    if ctx.show_captions {
        if let Some(caption) = &image.caption {
            tile = tile.push(
                bidi::paragraph(caption.as_str(), direction).size(typography::CAPTION),
            );
        }
    }

    button(tile)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::control(Control::Link { selected: false }))
        .on_press(Message::Open(index))
        .into()
}

/// The image itself, or a labelled placeholder tile when the file is missing.
fn picture<'a>(
    file: Option<&PathBuf>,
    image: &'a GalleryImage,
    height: Length,
    fit: ContentFit,
) -> Element<'a, Message> {
    match file {
        Some(path) => Image::new(Handle::from_path(path))
            .width(Length::Fill)
            .height(height)
            .content_fit(fit)
            .into(),
        None => Container::new(bidi::label(image.alt.as_str()).size(typography::BODY))
            .width(Length::Fill)
            .height(height)
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::surface(Surface::Inset))
            .into(),
    }
}

/// The lightbox layer, present only while the lightbox is open.
pub fn lightbox<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let position = ctx.lightbox.position()?;
    let image = ctx.images.get(position.index)?;
    let direction = ctx.i18n.direction();

    let (previous_glyph, next_glyph) = if direction.is_rtl() {
        ("›", "‹")
    } else {
        ("‹", "›")
    };
    let step_button = |glyph: &'static str, step: Step, enabled: bool| {
        let control = button(bidi::label(glyph).size(typography::TITLE_LG))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::control(Control::Overlay));
        if enabled {
            control.on_press(Message::Step(step))
        } else {
            control
        }
    };

    let picture = picture(
        ctx.files.get(position.index).and_then(Option::as_ref),
        image,
        Length::Fill,
        ContentFit::Contain,
    );

    let stage = bidi::row(
        vec![
            step_button(previous_glyph, Step::Backward, position.has_previous).into(),
            Container::new(picture)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            step_button(next_glyph, Step::Forward, position.has_next).into(),
        ],
        direction,
    )
    .spacing(spacing::MD)
    .height(Length::Fill);

    let counter = ctx.i18n.tr_with_args(
        "lightbox-counter",
        &[
            ("current", (position.index + 1).into()),
            ("total", position.count.into()),
        ],
    );
    let caption = image.caption.clone().unwrap_or_else(|| image.alt.clone());
    let close = button(bidi::label(ctx.i18n.tr("lightbox-close")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::control(Control::Overlay))
        .on_press(Message::Close);

    let footer = bidi::row(
        vec![
            bidi::paragraph(caption, direction)
                .size(typography::BODY_LG)
                .into(),
            bidi::label(counter).size(typography::BODY).into(),
            close.into(),
        ],
        direction,
    )
    .spacing(spacing::MD)
    .width(Length::Fill);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(stage)
            .push(footer),
    )
    .padding(spacing::LG)
    .width(Length::FillPortion(9))
    .height(Length::FillPortion(9))
    .style(styles::container::surface(Surface::Glass));

    let backdrop = center(opaque(panel))
        .padding(spacing::XXL)
        .style(styles::container::surface(Surface::Backdrop));

    Some(opaque(mouse_area(backdrop).on_press(Message::Close)))
}
