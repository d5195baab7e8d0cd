// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across page sections.
//!
//! - [`bidi`] - Direction-aware rows, columns and shaped text
//! - [`banner`] - Dismissible warning banner
//! - [`empty_state`] - Placeholder for lists with nothing to show

pub mod banner;
pub mod bidi;
pub mod empty_state;
