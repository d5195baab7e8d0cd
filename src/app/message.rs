// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::sections::{disclosure_list, gallery, products, services};
use crate::widgets::KeyInput;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// section messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Services(services::Message),
    Products(products::Message),
    Gallery(gallery::Message),
    Policies(disclosure_list::Message),
    Faq(disclosure_list::Message),
    /// A key press the page widgets understand.
    Key(KeyInput),
    /// Countdown tick, present only while the countdown runs.
    CountdownTick,
    /// Animation frame, present only while a disclosure is fading.
    Frame(Instant),
    DismissBanner,
}

/// Runtime flags passed from `main` to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `he`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SALON_BETA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional content catalog replacing the embedded one.
    pub content: Option<PathBuf>,
}
