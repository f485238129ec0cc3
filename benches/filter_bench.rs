// ABOUTME: Criterion benchmarks for filtering, pagination and slideshow sampling
// ABOUTME: Measures filter recomputation over growing collections and a full page refilter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recipe page engine.
//!
//! Every keystroke that survives the debounce recomputes the filtered view
//! from the full collection, so filtering cost is what these track.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{generate_recipes, CollectionSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use recipe_browser::filter::apply_filters;
use recipe_browser::models::Recipe;
use recipe_browser::page::{PageSettings, RecipePage};
use recipe_browser::presentation::RecipeCard;
use recipe_browser::slideshow::sample_indices;
use recipe_browser::view::ViewRenderer;
use tokio::time::Instant;

/// Renderer that only builds the cards a real one would draw
struct CardRenderer;

impl ViewRenderer for CardRenderer {
    fn on_filtered_view_changed(&mut self, view: &[&Recipe], cursor: usize) {
        for recipe in view.iter().take(cursor) {
            black_box(RecipeCard::from(*recipe));
        }
    }

    fn on_slideshow_changed(&mut self, selection: &[&Recipe], index: usize) {
        black_box((selection.len(), index));
    }

    fn on_fetch_error(&mut self, message: &str) {
        black_box(message);
    }
}

fn bench_apply_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_filters");

    for size in [
        CollectionSize::Page,
        CollectionSize::Catalogue,
        CollectionSize::Large,
    ] {
        let recipes = generate_recipes(size);
        group.throughput(Throughput::Elements(size.count() as u64));

        group.bench_with_input(BenchmarkId::new("text", size.name()), &recipes, |b, recipes| {
            b.iter(|| apply_filters(black_box(recipes), black_box("chicken"), ""));
        });

        group.bench_with_input(
            BenchmarkId::new("text_and_cuisine", size.name()),
            &recipes,
            |b, recipes| {
                b.iter(|| apply_filters(black_box(recipes), black_box("garlic"), "Italian"));
            },
        );

        group.bench_with_input(BenchmarkId::new("no_match", size.name()), &recipes, |b, recipes| {
            b.iter(|| apply_filters(black_box(recipes), black_box("zzzz"), ""));
        });
    }

    group.finish();
}

fn bench_page_refilter(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_refilter");

    for size in [CollectionSize::Catalogue, CollectionSize::Large] {
        let mut page = RecipePage::with_rng(
            CardRenderer,
            PageSettings::default(),
            ChaCha8Rng::seed_from_u64(1),
        );
        page.install_collection(generate_recipes(size), Instant::now());

        group.bench_function(BenchmarkId::new("cuisine_change", size.name()), |b| {
            let mut toggle = false;
            b.iter(|| {
                toggle = !toggle;
                page.on_cuisine_change(if toggle { "Thai" } else { "" });
            });
        });
    }

    group.finish();
}

fn bench_slideshow_sample(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    c.bench_function("slideshow_sample_5_of_5000", |b| {
        b.iter(|| sample_indices(black_box(5_000), 5, &mut rng));
    });
}

criterion_group!(
    benches,
    bench_apply_filters,
    bench_page_refilter,
    bench_slideshow_sample,
);
criterion_main!(benches);
