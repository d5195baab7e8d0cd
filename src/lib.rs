// SPDX-License-Identifier: MPL-2.0
//! `salon_beta` is the right-to-left showcase page of the Beta hair salon,
//! built with the Iced GUI framework.
//!
//! The interactive parts of the page live in [`widgets`] as plain state
//! machines (selection, disclosure, lightbox, filter tabs, countdown). The
//! [`ui`] module renders them and [`app`] wires them to Iced.

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod widgets;
