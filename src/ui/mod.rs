// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The page follows the Elm-style "state down, messages up" pattern: widget
//! state lives in [`crate::widgets`] and is owned by the application, while
//! this module only renders it.
//!
//! - [`sections`] - Page sections, from the hero banner to the footer
//! - [`navbar`] - Navigation bar with the language and theme menu
//! - [`components`] - Direction-aware layout, banner, empty state
//! - [`widgets`] - Custom Iced widgets (scroll gate)
//! - [`styles`] - Style-variant table and the Iced style functions built on it
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod navbar;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;
