// SPDX-License-Identifier: MPL-2.0
use chrono::{TimeZone, Utc};
use salon_beta::app::config::{self, Config};
use salon_beta::content::{self, Catalog};
use salon_beta::i18n::fluent::I18n;
use salon_beta::i18n::ReadingDirection;
use salon_beta::ui::theming::ThemeMode;
use salon_beta::widgets::{
    Category, Countdown, Disclosure, FilterTabs, ItemId, KeyInput, Lightbox, ScrollLock,
    SelectionMode, Step, TargetPolicy,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ids(raw: &[&str]) -> Vec<ItemId> {
    raw.iter().map(|id| ItemId::new(*id)).collect()
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.direction(), ReadingDirection::LeftToRight);

    let mut hebrew = Config::default();
    hebrew.general.language = Some("he".to_string());
    config::save_to_path(&hebrew, &temp_config_file_path)
        .expect("Failed to write hebrew config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load hebrew config from path");
    let i18n_he = I18n::new(None, &loaded);
    assert_eq!(i18n_he.current_locale().to_string(), "he");
    assert!(i18n_he.direction().is_rtl());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_beats_config() {
    let mut config = Config::default();
    config.general.language = Some("he".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn config_round_trip_keeps_every_section() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.faq.allow_multiple = true;
    config.faq.default_open = vec!["faq-2".to_string(), "faq-4".to_string()];
    config.policies.default_open = vec!["policy-1".to_string()];
    config.gallery.columns = 2;
    config.gallery.show_captions = false;
    config.promotions.countdown_policy = TargetPolicy::Fixed;

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, config);
    assert_eq!(loaded.faq.selection_mode(), SelectionMode::Multiple);
}

#[test]
fn malformed_config_falls_back_with_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("settings.toml"), "[faq\nallow_multiple = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("banner-config-load-error"));
}

#[test]
fn absent_config_is_not_a_warning() {
    let dir = tempdir().expect("temp dir");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn partial_config_fills_in_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[gallery]\ncolumns = 9\n").expect("write");

    let config = config::load_from_path(&path).expect("load");
    assert_eq!(config.faq, Config::default().faq);
    assert_eq!(config.gallery.clamped_columns(), 4);
}

#[test]
fn printed_default_config_parses_back() {
    let toml = config::to_toml_string(&Config::default()).expect("serialize");
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, toml).expect("write");
    assert_eq!(config::load_from_path(&path).expect("load"), Config::default());
}

#[test]
fn content_load_falls_back_to_embedded_catalog() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("salon.toml");
    fs::write(&path, "[[services]]\nid = 1").expect("write");

    let (catalog, warning) = content::load(Some(&path));
    assert_eq!(warning.as_deref(), Some("banner-content-parse-error"));
    assert_eq!(catalog, Catalog::embedded().expect("embedded catalog"));
}

#[test]
fn embedded_catalog_feeds_every_widget() {
    let catalog = Catalog::embedded().expect("embedded catalog");
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    let services = FilterTabs::with_categories(catalog.service_category_ids()).without_all_tab();
    assert!(!services.visible(&catalog.services).is_empty());

    let products = FilterTabs::new(&catalog.products);
    assert_eq!(products.visible(&catalog.products).len(), catalog.products.len());

    let countdown = Countdown::new(catalog.deadlines(), TargetPolicy::default(), now);
    assert!(countdown.active_target().is_some());
}

// Accordion: opening a third FAQ entry closes the first one.
#[test]
fn single_mode_disclosure_keeps_one_entry_open() {
    let now = Instant::now();
    let mut faq = Disclosure::new(
        ids(&["faq-1", "faq-2", "faq-3"]),
        SelectionMode::Single,
        ids(&["faq-1"]),
        now,
    );

    faq.press_header(2, now);
    assert!(faq.is_open(&ItemId::new("faq-3")));
    assert!(!faq.is_open(&ItemId::new("faq-1")));
    assert_eq!(faq.selection().len(), 1);

    faq.press_header(2, now);
    assert!(faq.selection().is_empty());
}

#[test]
fn multiple_mode_disclosure_keeps_independent_entries() {
    let now = Instant::now();
    let mut policies = Disclosure::new(
        ids(&["policy-1", "policy-2"]),
        SelectionMode::Multiple,
        Vec::new(),
        now,
    );
    policies.press_header(0, now);
    policies.press_header(1, now);
    assert_eq!(policies.selection().len(), 2);
}

#[test]
fn disclosure_keyboard_walks_and_toggles() {
    let now = Instant::now();
    let mut faq = Disclosure::new(
        ids(&["a", "b", "c"]),
        SelectionMode::Single,
        Vec::new(),
        now,
    );
    assert!(!faq.handle_key(KeyInput::ArrowDown, now));

    faq.focus(0);
    assert!(faq.handle_key(KeyInput::End, now));
    assert_eq!(faq.focused(), Some(2));
    assert!(faq.handle_key(KeyInput::ArrowDown, now));
    assert_eq!(faq.focused(), Some(0));
    assert!(faq.handle_key(KeyInput::Enter, now));
    assert!(faq.is_open(&ItemId::new("a")));
}

#[test]
fn disclosure_reveal_finishes_after_frames() {
    let start = Instant::now();
    let mut faq = Disclosure::new(ids(&["a"]), SelectionMode::Single, Vec::new(), start);

    faq.toggle(&ItemId::new("a"), start);
    assert!(faq.is_animating());

    faq.on_frame(start + Duration::from_secs(2));
    assert!(!faq.is_animating());
    assert_eq!(faq.body_alpha(&ItemId::new("a")), Some(1.0));
}

#[test]
fn lightbox_holds_scroll_lock_while_open() {
    let lock = ScrollLock::new();
    let mut lightbox = Lightbox::new(6, lock.clone());

    assert!(lightbox.open(2));
    assert!(lock.is_engaged());
    assert_eq!(lightbox.counter().as_deref(), Some("3 / 6"));

    assert!(lightbox.handle_key(KeyInput::ArrowLeft, ReadingDirection::RightToLeft));
    assert_eq!(lightbox.current(), Some(3));

    assert!(lightbox.handle_key(KeyInput::Escape, ReadingDirection::RightToLeft));
    assert!(!lightbox.is_open());
    assert!(!lock.is_engaged());
}

#[test]
fn lightbox_stops_at_both_ends() {
    let mut lightbox = Lightbox::new(3, ScrollLock::new());
    lightbox.open(0);
    assert!(!lightbox.navigate(Step::Backward));
    lightbox.open(2);
    assert!(!lightbox.navigate(Step::Forward));
    assert_eq!(lightbox.current(), Some(2));
}

#[test]
fn dropping_the_lightbox_releases_the_lock() {
    let lock = ScrollLock::new();
    {
        let mut lightbox = Lightbox::new(2, lock.clone());
        lightbox.open(1);
        assert_eq!(lock.holders(), 1);
    }
    assert!(!lock.is_engaged());
}

#[test]
fn empty_lightbox_never_opens() {
    let lock = ScrollLock::new();
    let mut lightbox = Lightbox::new(0, lock.clone());
    assert!(!lightbox.open(0));
    assert!(!lock.is_engaged());
}

#[test]
fn product_filter_reports_empty_category() {
    let catalog = Catalog::embedded().expect("embedded catalog");
    let mut tabs = FilterTabs::new(&catalog.products);

    tabs.select(Category::named("no-such-category"));
    assert!(tabs.is_empty_for(&catalog.products));

    tabs.reset();
    assert_eq!(tabs.active(), &Category::All);
    assert!(!tabs.is_empty_for(&catalog.products));
}

#[test]
fn countdown_moves_to_next_deadline_then_stops() {
    let first = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
    let start = Utc.with_ymd_and_hms(2026, 2, 28, 0, 0, 0).unwrap();

    let mut countdown = Countdown::new(vec![second, first], TargetPolicy::NearestUpcoming, start);
    assert_eq!(countdown.active_target(), Some(first));
    assert_eq!(countdown.remaining().days, 1);

    countdown.tick(first);
    assert_eq!(countdown.active_target(), Some(second));
    assert!(countdown.is_running());

    countdown.tick(second + chrono::Duration::seconds(5));
    assert!(countdown.active_target().is_none());
    assert!(!countdown.is_running());
}

#[test]
fn fixed_countdown_holds_at_zero() {
    let first = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
    let start = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

    let mut countdown = Countdown::new(vec![first, second], TargetPolicy::Fixed, start);
    countdown.tick(first + chrono::Duration::days(1));
    assert_eq!(countdown.active_target(), Some(first));
    assert!(countdown.remaining().is_zero());
}

fn message_ids(path: &Path) -> BTreeSet<String> {
    let source = fs::read_to_string(path).expect("read ftl");
    source
        .lines()
        .filter(|line| !line.starts_with([' ', '#', '.', '*', '[', '}']))
        .filter_map(|line| line.split_once(" ="))
        .map(|(id, _)| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

#[test]
fn both_locales_define_the_same_messages() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/i18n");
    let hebrew = message_ids(&dir.join("he.ftl"));
    let english = message_ids(&dir.join("en-US.ftl"));

    assert!(!hebrew.is_empty());
    let only_he: Vec<_> = hebrew.difference(&english).collect();
    let only_en: Vec<_> = english.difference(&hebrew).collect();
    assert!(only_he.is_empty(), "missing in en-US: {only_he:?}");
    assert!(only_en.is_empty(), "missing in he: {only_en:?}");
}

#[test]
fn banner_keys_resolve_in_every_locale() {
    let mut i18n = I18n::default();
    let keys = [
        "banner-dismiss",
        "banner-io-error",
        "banner-config-load-error",
        "banner-content-missing",
        "banner-content-parse-error",
        "banner-content-invalid",
    ];
    for locale in i18n.available_locales.clone() {
        i18n.set_locale(locale.clone());
        for key in keys {
            assert!(!i18n.tr(key).starts_with("MISSING"), "{locale}: {key}");
        }
    }
}

#[test]
fn lightbox_counter_message_takes_numbers() {
    let mut i18n = I18n::default();
    i18n.set_locale("en-US".parse().expect("locale"));
    let text = i18n.tr_with_args(
        "lightbox-counter",
        &[("current", 3.into()), ("total", 6.into())],
    );
    assert!(text.contains('3') && text.contains('6'), "{text}");
}
