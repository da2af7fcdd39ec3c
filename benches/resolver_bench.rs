// ABOUTME: Criterion benchmarks for recipe resolution and name normalization
// ABOUTME: Measures deep dependency chains, wide shared sub-recipes, and the normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recipe resolver.
//!
//! Deep chains stress the explicit traversal stack; wide diamonds stress
//! memo reuse of shared sub-recipes.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use cookbook_server::models::EntryRequest;
use cookbook_server::services::{normalizer, registration, resolver};
use cookbook_server::store::Cookbook;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn build(requests: Vec<EntryRequest>) -> Cookbook {
    let mut cookbook = Cookbook::new();
    for request in requests {
        registration::register(&mut cookbook, request).unwrap();
    }
    cookbook
}

/// `Level {depth-1}` -> ... -> `Level 0` -> `Grain`
fn deep_chain(depth: usize) -> (Cookbook, String) {
    let mut requests = vec![
        EntryRequest::ingredient("Grain", 1),
        EntryRequest::recipe("Level 0", &[("Grain", 1)]),
    ];
    for level in 1..depth {
        let below = format!("Level {}", level - 1);
        requests.push(EntryRequest::recipe(
            format!("Level {level}"),
            &[(below.as_str(), 1)],
        ));
    }
    (build(requests), format!("Level {}", depth - 1))
}

/// `Feast` needs `width` courses, each of which needs the same `Stock`
fn wide_diamond(width: usize) -> Cookbook {
    let mut requests = vec![
        EntryRequest::ingredient("Bone", 3),
        EntryRequest::ingredient("Water", 0),
        EntryRequest::recipe("Stock", &[("Bone", 2), ("Water", 5)]),
    ];
    let courses: Vec<String> = (0..width).map(|i| format!("Course {i}")).collect();
    for course in &courses {
        requests.push(EntryRequest::recipe(course.clone(), &[("Stock", 1)]));
    }
    let items: Vec<(&str, i64)> = courses.iter().map(|c| (c.as_str(), 2)).collect();
    requests.push(EntryRequest::recipe("Feast", &items));
    build(requests)
}

fn bench_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_chain");
    for depth in [100_usize, 1_000, 10_000] {
        let (cookbook, top) = deep_chain(depth);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &top, |b, top| {
            b.iter(|| resolver::resolve(black_box(&cookbook), black_box(top)).unwrap());
        });
    }
    group.finish();
}

fn bench_wide_diamond(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_diamond");
    for width in [10_usize, 100, 1_000] {
        let cookbook = wide_diamond(width);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_function(BenchmarkId::from_parameter(width), |b| {
            b.iter(|| resolver::resolve(black_box(&cookbook), "Feast").unwrap());
        });
    }
    group.finish();
}

fn bench_normalizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.bench_function("short", |b| {
        b.iter(|| normalizer::normalize(black_box("Riz@z RISO00tto!")).unwrap());
    });
    let long = "----yummy-wagyu_".repeat(64);
    group.bench_function("long", |b| {
        b.iter(|| normalizer::normalize(black_box(&long)).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_deep_chain,
    bench_wide_diamond,
    bench_normalizer
);
criterion_main!(benches);
