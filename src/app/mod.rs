// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct owns every widget state on the page and builds it from
//! the content catalog and the configuration defaults. Nothing is persisted:
//! the state lives as long as the window.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::content::{self, Catalog};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::widgets::{Countdown, Disclosure, FilterTabs, ItemId, Lightbox, ScrollLock};
use chrono::{DateTime, Utc};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    catalog: Catalog,
    /// Resolved gallery files, parallel to `catalog.gallery`.
    gallery_files: Vec<Option<PathBuf>>,
    theme_mode: ThemeMode,
    /// Whether the navbar menu is open.
    menu_open: bool,
    services: FilterTabs,
    products: FilterTabs,
    scroll_lock: ScrollLock,
    lightbox: Lightbox,
    policies: Disclosure,
    faq: Disclosure,
    countdown: Countdown,
    /// i18n keys of pending warnings, oldest first.
    banners: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("lightbox", &self.lightbox.state())
            .field("menu_open", &self.menu_open)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once
    // and later calls fall back to defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let i18n = I18n::new(None, &config);
        let (catalog, _) = content::load(None);
        Self::with_catalog(i18n, config, catalog, Instant::now(), Utc::now())
    }
}

impl App {
    /// Loads configuration and content, then builds the page state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (catalog, content_warning) = content::load(flags.content.as_deref());
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_catalog(i18n, config, catalog, Instant::now(), Utc::now());
        app.banners.extend(config_warning);
        app.banners.extend(content_warning);

        (app, Task::none())
    }

    /// Builds every widget from `catalog` with the defaults in `config`.
    pub fn with_catalog(
        i18n: I18n,
        config: Config,
        catalog: Catalog,
        now: Instant,
        now_utc: DateTime<Utc>,
    ) -> Self {
        let scroll_lock = ScrollLock::new();
        let entry_ids = |entries: &[content::Entry]| -> Vec<ItemId> {
            entries.iter().map(|e| ItemId::new(e.id.clone())).collect()
        };

        let policies = Disclosure::new(
            entry_ids(&catalog.policies),
            config.policies.selection_mode(),
            config.policies.default_ids(),
            now,
        );
        let faq = Disclosure::new(
            entry_ids(&catalog.faq),
            config.faq.selection_mode(),
            config.faq.default_ids(),
            now,
        );
        let services =
            FilterTabs::with_categories(catalog.service_category_ids()).without_all_tab();
        let products = FilterTabs::new(&catalog.products);
        let lightbox = Lightbox::new(catalog.gallery.len(), scroll_lock.clone());
        let countdown = Countdown::new(
            catalog.deadlines(),
            config.promotions.countdown_policy,
            now_utc,
        );
        let gallery_files = catalog
            .gallery
            .iter()
            .map(|image| image.resolve(catalog.base_dir.as_deref()))
            .collect();

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            catalog,
            gallery_files,
            menu_open: false,
            services,
            products,
            scroll_lock,
            lightbox,
            policies,
            faq,
            countdown,
            banners: Vec::new(),
        }
    }

    fn title(&self) -> String {
        format!("{} - {}", self.catalog.salon.name, self.i18n.tr("app-title"))
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_countdown_subscription(self.countdown.is_running()),
            subscription::create_frame_subscription(
                self.policies.is_animating() || self.faq.is_animating(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            services: &mut self.services,
            products: &mut self.products,
            lightbox: &mut self.lightbox,
            policies: &mut self.policies,
            faq: &mut self.faq,
            countdown: &mut self.countdown,
            banners: &mut self.banners,
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        let (today, year) = view::local_today();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            gallery_files: &self.gallery_files,
            gallery_columns: self.config.gallery.clamped_columns(),
            show_captions: self.config.gallery.show_captions,
            theme_mode: self.theme_mode,
            menu_open: self.menu_open,
            services: &self.services,
            products: &self.products,
            lightbox: &self.lightbox,
            scroll_lock: &self.scroll_lock,
            policies: &self.policies,
            faq: &self.faq,
            countdown: &self.countdown,
            banners: &self.banners,
            today,
            year,
        })
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    #[must_use]
    pub fn faq(&self) -> &Disclosure {
        &self.faq
    }

    #[must_use]
    pub fn policies(&self) -> &Disclosure {
        &self.policies
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn banners(&self) -> &[String] {
        &self.banners
    }
}
