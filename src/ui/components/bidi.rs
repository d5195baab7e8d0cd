// SPDX-License-Identifier: MPL-2.0
//! Direction-aware layout primitives.
//!
//! Iced lays rows out left to right. For right-to-left locales the children
//! of a [`row`] are reversed so the first logical child sits on the right,
//! and text is right aligned.

use crate::i18n::ReadingDirection;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::{IntoFragment, Shaping, Wrapping};
use iced::widget::{Column, Row, Text};
use iced::{Element, Length};

/// Text with advanced shaping, required for Hebrew glyphs.
pub fn label<'a>(content: impl IntoFragment<'a>) -> Text<'a> {
    Text::new(content)
        .shaping(Shaping::Advanced)
        .wrapping(Wrapping::Word)
}

/// Wrapping paragraph that fills the available width, aligned to the
/// reading direction.
pub fn paragraph<'a>(content: impl IntoFragment<'a>, direction: ReadingDirection) -> Text<'a> {
    label(content).width(Length::Fill).align_x(leading(direction))
}

/// Horizontal alignment of the start of a line.
#[must_use]
pub fn leading(direction: ReadingDirection) -> Horizontal {
    if direction.is_rtl() {
        Horizontal::Right
    } else {
        Horizontal::Left
    }
}

/// Horizontal alignment of the end of a line.
#[must_use]
pub fn trailing(direction: ReadingDirection) -> Horizontal {
    if direction.is_rtl() {
        Horizontal::Left
    } else {
        Horizontal::Right
    }
}

/// Orders `children` visually for `direction`.
pub fn ordered<T>(mut children: Vec<T>, direction: ReadingDirection) -> Vec<T> {
    if direction.is_rtl() {
        children.reverse();
    }
    children
}

/// Row whose children appear in reading order.
pub fn row<'a, Message: 'a>(
    children: Vec<Element<'a, Message>>,
    direction: ReadingDirection,
) -> Row<'a, Message> {
    Row::with_children(ordered(children, direction)).align_y(Vertical::Center)
}

/// Column whose children hug the leading edge.
pub fn column<'a, Message: 'a>(
    children: Vec<Element<'a, Message>>,
    direction: ReadingDirection,
) -> Column<'a, Message> {
    Column::with_children(children)
        .width(Length::Fill)
        .align_x(leading(direction))
}
