// SPDX-License-Identifier: MPL-2.0
//! Declarative style variants.
//!
//! Every visual state a widget can be in maps to one fixed descriptor. The
//! container and button style functions in this module's siblings only read
//! these tables, so a new look is a new table row rather than a new closure.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::Color;

/// Palette slot, resolved against the active [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    None,
    Surface,
    SurfaceSecondary,
    SurfaceTertiary,
    Text,
    TextSecondary,
    OnBrand,
    Brand,
    BrandHover,
    Accent,
    Hot,
    Overlay,
    OverlayText,
}

impl Tone {
    #[must_use]
    pub fn resolve(self, scheme: &ColorScheme) -> Color {
        match self {
            Tone::None => Color::TRANSPARENT,
            Tone::Surface => scheme.surface_primary,
            Tone::SurfaceSecondary => scheme.surface_secondary,
            Tone::SurfaceTertiary => scheme.surface_tertiary,
            Tone::Text => scheme.text_primary,
            Tone::TextSecondary => scheme.text_secondary,
            Tone::OnBrand => scheme.text_on_brand,
            Tone::Brand => scheme.brand_primary,
            Tone::BrandHover => scheme.brand_hover,
            Tone::Accent => scheme.brand_accent,
            Tone::Hot => scheme.hot,
            Tone::Overlay => scheme.overlay_background,
            Tone::OverlayText => scheme.overlay_text,
        }
    }
}

/// Shadow depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    Flat,
    Low,
    High,
}

/// Paint applied to one surface or one control state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub background: Tone,
    /// Multiplier on the background alpha.
    pub alpha: f32,
    pub text: Tone,
    pub border: Tone,
    pub border_width: f32,
    pub radius: f32,
    pub elevation: Elevation,
}

impl Paint {
    const fn new(background: Tone, text: Tone) -> Self {
        Self {
            background,
            alpha: opacity::OPAQUE,
            text,
            border: Tone::None,
            border_width: 0.0,
            radius: radius::MD,
            elevation: Elevation::Flat,
        }
    }

    const fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    const fn border(mut self, tone: Tone, width: f32) -> Self {
        self.border = tone;
        self.border_width = width;
        self
    }

    const fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    const fn elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = elevation;
        self
    }
}

/// Container looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Frosted panel (navbar, hero card).
    Glass,
    /// Card lifted off the page.
    Raised,
    /// Recessed well (disclosure bodies, countdown cells).
    Inset,
    /// Brand-colored band (promotions countdown, footer).
    Accent,
    /// Highlighted card for popular services.
    Popular,
    /// Lightbox backdrop.
    Backdrop,
    /// Small pill label ("popular", "hot", discount).
    Badge { hot: bool },
    /// Warning banner.
    Banner,
}

impl Surface {
    #[must_use]
    pub const fn paint(self) -> Paint {
        match self {
            Surface::Glass => Paint::new(Tone::Surface, Tone::Text)
                .alpha(opacity::GLASS)
                .radius(radius::LG)
                .elevation(Elevation::Low),
            Surface::Raised => Paint::new(Tone::Surface, Tone::Text)
                .radius(radius::LG)
                .border(Tone::SurfaceTertiary, border::WIDTH_SM)
                .elevation(Elevation::Low),
            Surface::Inset => Paint::new(Tone::SurfaceSecondary, Tone::TextSecondary),
            Surface::Accent => Paint::new(Tone::Brand, Tone::OnBrand).radius(radius::LG),
            Surface::Popular => Paint::new(Tone::Surface, Tone::Text)
                .radius(radius::LG)
                .border(Tone::Brand, border::WIDTH_MD)
                .elevation(Elevation::High),
            Surface::Backdrop => Paint::new(Tone::Overlay, Tone::OverlayText).radius(radius::NONE),
            Surface::Badge { hot: true } => Paint::new(Tone::Hot, Tone::OnBrand).radius(radius::FULL),
            Surface::Badge { hot: false } => {
                Paint::new(Tone::Accent, Tone::Text).radius(radius::FULL)
            }
            Surface::Banner => Paint::new(Tone::Accent, Tone::Text)
                .border(Tone::Hot, border::WIDTH_SM)
                .radius(radius::SM),
        }
    }
}

/// Button looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Primary,
    Secondary,
    /// Filter or category tab.
    Tab { active: bool },
    /// Disclosure header.
    Header { open: bool, focused: bool },
    /// Lightbox and thumbnail controls over imagery.
    Overlay,
    /// Borderless navbar/menu entry.
    Link { selected: bool },
}

/// Paints for the idle and hovered states of a control. Pressed uses
/// `hovered`; disabled is derived from `idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPaint {
    pub idle: Paint,
    pub hovered: Paint,
}

impl Control {
    #[must_use]
    pub const fn paint(self) -> ControlPaint {
        match self {
            Control::Primary => ControlPaint {
                idle: Paint::new(Tone::Brand, Tone::OnBrand)
                    .radius(radius::FULL)
                    .elevation(Elevation::Low),
                hovered: Paint::new(Tone::BrandHover, Tone::OnBrand)
                    .radius(radius::FULL)
                    .elevation(Elevation::High),
            },
            Control::Secondary => ControlPaint {
                idle: Paint::new(Tone::None, Tone::Brand)
                    .border(Tone::Brand, border::WIDTH_SM)
                    .radius(radius::FULL),
                hovered: Paint::new(Tone::SurfaceSecondary, Tone::BrandHover)
                    .border(Tone::BrandHover, border::WIDTH_SM)
                    .radius(radius::FULL),
            },
            Control::Tab { active: true } => ControlPaint {
                idle: Paint::new(Tone::Brand, Tone::OnBrand)
                    .radius(radius::FULL)
                    .elevation(Elevation::Low),
                hovered: Paint::new(Tone::BrandHover, Tone::OnBrand)
                    .radius(radius::FULL)
                    .elevation(Elevation::Low),
            },
            Control::Tab { active: false } => ControlPaint {
                idle: Paint::new(Tone::SurfaceSecondary, Tone::Text).radius(radius::FULL),
                hovered: Paint::new(Tone::SurfaceTertiary, Tone::Text).radius(radius::FULL),
            },
            Control::Header { open, focused } => {
                let (background, text) = if open {
                    (Tone::Brand, Tone::OnBrand)
                } else {
                    (Tone::Surface, Tone::Text)
                };
                let (ring, width) = if focused {
                    (Tone::Accent, border::WIDTH_MD)
                } else {
                    (Tone::SurfaceTertiary, border::WIDTH_SM)
                };
                ControlPaint {
                    idle: Paint::new(background, text).border(ring, width),
                    hovered: Paint::new(if open { Tone::BrandHover } else { Tone::SurfaceSecondary }, text)
                        .border(ring, width),
                }
            }
            Control::Overlay => ControlPaint {
                idle: Paint::new(Tone::Overlay, Tone::OverlayText)
                    .alpha(opacity::OVERLAY_MEDIUM)
                    .radius(radius::FULL),
                hovered: Paint::new(Tone::Overlay, Tone::OverlayText).radius(radius::FULL),
            },
            Control::Link { selected } => ControlPaint {
                idle: Paint::new(Tone::None, if selected { Tone::Brand } else { Tone::Text })
                    .radius(radius::SM),
                hovered: Paint::new(Tone::SurfaceSecondary, Tone::Brand).radius(radius::SM),
            },
        }
    }
}
