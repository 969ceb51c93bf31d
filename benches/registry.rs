// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the message registry.
//!
//! Measures the performance of:
//! - Creating messages into a growing stack (each create reflows)
//! - Full churn: create, dismiss and finish exits through ticks
//! - Reflowing a deep stack after a height measurement

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_element::ui::notifications::{MessageOptions, Registry, ToastLayer, ToastMessage};
use std::hint::black_box;
use std::time::{Duration, Instant};

const STACK_SIZES: [usize; 3] = [8, 64, 256];

fn later() -> Instant {
    Instant::now() + Duration::from_secs(3600)
}

fn filled(count: usize) -> Registry<ToastLayer> {
    let mut registry = Registry::new(ToastLayer::new());
    for _ in 0..count {
        registry.create(MessageOptions::new("bench")).unwrap();
    }
    registry
}

/// Benchmark creating `n` messages from an empty registry.
fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    for size in STACK_SIZES {
        group.bench_with_input(BenchmarkId::new("create", size), &size, |b, &size| {
            b.iter(|| black_box(filled(size)));
        });
    }

    group.finish();
}

/// Benchmark the whole lifecycle: create, expire, finish exits.
fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    for size in STACK_SIZES {
        group.bench_with_input(BenchmarkId::new("churn", size), &size, |b, &size| {
            b.iter(|| {
                let mut registry = filled(size);
                registry.tick(later());
                registry.tick(later());
                black_box(registry.is_empty());
            });
        });
    }

    group.finish();
}

/// Benchmark a measurement at the top of a deep stack.
fn bench_measure_reflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let mut registry = filled(256);
    let first = registry
        .instances()
        .next()
        .map(|instance| instance.id())
        .unwrap();
    let mut height = 40.0;

    group.bench_function("measure_reflow_256", |b| {
        b.iter(|| {
            height = if height > 100.0 { 40.0 } else { height + 1.0 };
            registry.handle_message(&ToastMessage::Measured(first, height));
            black_box(registry.last_instance().map(|instance| instance.id()));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_create, bench_churn, bench_measure_reflow);
criterion_main!(benches);
