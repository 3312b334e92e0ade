// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rackplan_layout::{ClusterConfig, LayoutConfig, OverlaySelection, RowConfig, plan_layout};

fn config(scale: usize) -> LayoutConfig {
    LayoutConfig {
        clusters: ClusterConfig {
            columns: 3 * scale,
            rows: 3 * scale,
            ..ClusterConfig::default()
        },
        rows: RowConfig {
            columns: 6 * scale,
            rows: 2 * scale,
            ..RowConfig::default()
        },
        ..LayoutConfig::default()
    }
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/plan");
    for scale in [1usize, 4, 16, 64] {
        let config = config(scale);
        group.throughput(Throughput::Elements(config.rack_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(scale), &config, |b, config| {
            b.iter(|| black_box(plan_layout(black_box(config))));
        });
    }
    group.finish();
}

fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/labels");
    for scale in [1usize, 16] {
        let layout = plan_layout(&config(scale));
        group.throughput(Throughput::Elements(layout.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(scale), &layout, |b, layout| {
            b.iter(|| black_box(layout.labels().collect::<Vec<_>>()));
        });
    }
    group.finish();
}

fn bench_overlay(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/overlay");
    for scale in [1usize, 16] {
        let layout = plan_layout(&config(scale));
        let selection = OverlaySelection {
            columns: 0..=(6 * scale - 1),
            ..OverlaySelection::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(scale), &layout, |b, layout| {
            b.iter(|| black_box(layout.group_overlay(black_box(&selection))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan, bench_labels, bench_overlay);
criterion_main!(benches);
