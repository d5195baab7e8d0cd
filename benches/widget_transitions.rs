// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for widget state transitions.
//!
//! Measures the performance of:
//! - Filter projection over the product shelf
//! - Lightbox navigation across a large gallery
//! - Single-select toggling

use criterion::{criterion_group, criterion_main, Criterion};
use salon_beta::content::Catalog;
use salon_beta::widgets::{
    Category, FilterTabs, ItemId, Lightbox, ScrollLock, SelectionMode, SelectionState, Step,
};
use std::hint::black_box;

fn bench_filter_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_tabs");

    let catalog = Catalog::embedded().unwrap();
    // Repeat the shelf so the projection has something to chew on.
    let products: Vec<_> = (0..250)
        .flat_map(|_| catalog.products.iter().cloned())
        .collect();
    let mut tabs = FilterTabs::new(&products);
    let categories = tabs.tabs();

    group.bench_function("select_and_project", |b| {
        b.iter(|| {
            for category in &categories {
                tabs.select(category.clone());
                black_box(tabs.visible(&products).len());
            }
        });
    });

    group.bench_function("empty_check_unknown_category", |b| {
        tabs.select(Category::named("unknown"));
        b.iter(|| black_box(tabs.is_empty_for(&products)));
    });

    group.finish();
}

fn bench_lightbox_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox");

    group.bench_function("sweep_forward_and_back", |b| {
        let mut lightbox = Lightbox::new(1_000, ScrollLock::new());
        b.iter(|| {
            lightbox.open(0);
            while lightbox.navigate(Step::Forward) {}
            while lightbox.navigate(Step::Backward) {}
            lightbox.close();
            black_box(lightbox.state());
        });
    });

    group.finish();
}

fn bench_selection_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let ids: Vec<ItemId> = (1..=50).map(|i| ItemId::new(format!("faq-{i}"))).collect();

    group.bench_function("single_select_toggle_sequence", |b| {
        let mut state = SelectionState::new(SelectionMode::Single);
        b.iter(|| {
            for id in &ids {
                state.toggle(id.clone());
            }
            black_box(state.len());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_projection,
    bench_lightbox_navigation,
    bench_selection_toggle
);
criterion_main!(benches);
