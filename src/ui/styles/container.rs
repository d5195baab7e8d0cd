// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::button::shadow_for;
use super::variants::Surface;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Style function for a [`Surface`] variant.
pub fn surface(variant: Surface) -> impl Fn(&Theme) -> container::Style {
    surface_faded(variant, 1.0)
}

/// Like [`surface`], with background and text multiplied by `alpha`.
/// Used by fading disclosure bodies.
pub fn surface_faded(variant: Surface, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let paint = variant.paint();
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let mut background = paint.background.resolve(&scheme);
        background.a *= paint.alpha * alpha;
        let mut text = paint.text.resolve(&scheme);
        text.a *= alpha;
        let mut border_color = paint.border.resolve(&scheme);
        border_color.a *= alpha;

        container::Style {
            text_color: Some(text),
            background: (background.a > 0.0).then_some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: paint.border_width,
                radius: paint.radius.into(),
            },
            shadow: shadow_for(paint.elevation),
            ..Default::default()
        }
    }
}

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        text_color: Some(scheme.text_primary),
        background: Some(Background::Color(scheme.surface_secondary)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_surface_scales_text_alpha() {
        let full = surface(Surface::Inset)(&Theme::Light);
        let half = surface_faded(Surface::Inset, 0.5)(&Theme::Light);
        let full_alpha = full.text_color.map(|c| c.a).unwrap_or_default();
        let half_alpha = half.text_color.map(|c| c.a).unwrap_or_default();
        assert!((half_alpha - full_alpha * 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn backdrop_is_translucent() {
        let style = surface(Surface::Backdrop)(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }
}
