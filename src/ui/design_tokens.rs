// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the salon page's design tokens.

## Organization

- **Palette**: Base colors (sage and cream brand scale)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use salon_beta::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.13, 0.13);
    pub const GRAY_800: Color = Color::from_rgb(0.18, 0.2, 0.2);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.32, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.47, 0.47);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.79, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.93);
    pub const GRAY_50: Color = Color::from_rgb(0.97, 0.97, 0.96);

    // Brand: sage (#588C7E)
    pub const SAGE_300: Color = Color::from_rgb(0.58, 0.74, 0.69);
    pub const SAGE_400: Color = Color::from_rgb(0.45, 0.64, 0.58);
    pub const SAGE_500: Color = Color::from_rgb(0.345, 0.549, 0.494);
    pub const SAGE_600: Color = Color::from_rgb(0.28, 0.46, 0.41);
    pub const SAGE_700: Color = Color::from_rgb(0.21, 0.36, 0.32);

    // Brand: cream (#FFEEAD)
    pub const CREAM_200: Color = Color::from_rgb(1.0, 0.96, 0.84);
    pub const CREAM_500: Color = Color::from_rgb(1.0, 0.933, 0.678);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    /// "Hot" promotion badge.
    pub const HOT_500: Color = Color::from_rgb(0.93, 0.36, 0.29);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;

    /// Frosted panels over the hero and cards
    pub const GLASS: f32 = 0.72;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Maximum width of the page content column.
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

    /// Height of a gallery thumbnail tile.
    pub const THUMBNAIL_HEIGHT: f32 = 180.0;

    /// Width of the navbar dropdown.
    pub const MENU_WIDTH: f32 = 220.0;

    /// Width of one countdown cell.
    pub const COUNTDOWN_CELL: f32 = 84.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero heading
    //! - Titles: section and card headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    pub const DISPLAY: f32 = 44.0;

    /// Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Salon name, countdown digits
    pub const TITLE_MD: f32 = 22.0;

    /// Card titles, disclosure headers
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Captions, badges, countdown unit labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SOFT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.12);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 14.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLASS > 0.0 && opacity::GLASS < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_sage_matches_hex() {
        let [r, g, b, _] = palette::SAGE_500.into_rgba8();
        assert_eq!((r, g, b), (0x58, 0x8C, 0x7E));
    }
}
