// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::variants::{Control, Elevation, Paint};
use crate::ui::design_tokens::{opacity, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

pub(super) fn shadow_for(elevation: Elevation) -> Shadow {
    match elevation {
        Elevation::Flat => shadow::NONE,
        Elevation::Low => shadow::SM,
        Elevation::High => shadow::MD,
    }
}

fn paint_style(paint: Paint, scheme: &ColorScheme, dimmed: bool) -> button::Style {
    let mut background = paint.background.resolve(scheme);
    background.a *= paint.alpha;
    let mut text_color = paint.text.resolve(scheme);
    if dimmed {
        background.a *= opacity::OVERLAY_MEDIUM;
        text_color.a *= opacity::OVERLAY_MEDIUM;
    }

    button::Style {
        background: (background.a > 0.0).then_some(Background::Color(background)),
        text_color,
        border: Border {
            color: paint.border.resolve(scheme),
            width: paint.border_width,
            radius: paint.radius.into(),
        },
        shadow: if dimmed {
            shadow::NONE
        } else {
            shadow_for(paint.elevation)
        },
        snap: true,
    }
}

/// Style function for a [`Control`] variant.
pub fn control(variant: Control) -> impl Fn(&Theme, button::Status) -> button::Style {
    let paint = variant.paint();
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        match status {
            button::Status::Active => paint_style(paint.idle, &scheme, false),
            button::Status::Hovered | button::Status::Pressed => {
                paint_style(paint.hovered, &scheme, false)
            }
            button::Status::Disabled => paint_style(paint.idle, &scheme, true),
        }
    }
}

/// Style for primary action buttons.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    control(Control::Primary)(theme, status)
}

/// Fully transparent button used to make larger areas clickable.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_overlay_is_dimmed() {
        let style = control(Control::Overlay);
        let active = style(&Theme::Light, button::Status::Active);
        let disabled = style(&Theme::Light, button::Status::Disabled);
        assert!(disabled.text_color.a < active.text_color.a);
    }

    #[test]
    fn hover_changes_primary_background() {
        let active = primary(&Theme::Light, button::Status::Active);
        let hovered = primary(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn transparent_tone_has_no_background() {
        let style = control(Control::Link { selected: false });
        assert!(style(&Theme::Light, button::Status::Active)
            .background
            .is_none());
    }
}
