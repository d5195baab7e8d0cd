// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.
//!
//! [`variants`] holds the declarative look tables; [`button`] and
//! [`container`] turn them into Iced style functions.

pub mod button;
pub mod container;
pub mod variants;

pub use variants::{Control, Surface};
