// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use rackplan_layout::{LayoutConfig, OverlaySelection, plan_layout};
use rackplan_scene::{FloorOptions, FloorView, SvgSurface, rack_draw_items};
use rackplan_view::OrthoCamera;

fn camera() -> OrthoCamera {
    let mut camera = OrthoCamera::default();
    camera.set_viewport_size(Size::new(1920.0, 1080.0));
    camera
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/projection");
    let mut camera = camera();
    let points: Vec<Point> = (0..1_000)
        .map(|i| Point::new(f64::from(i) * 0.01, f64::from(i) * -0.02))
        .collect();

    group.bench_function("world_to_screen", |b| {
        b.iter(|| {
            for p in &points {
                black_box(camera.world_to_screen(*p));
            }
        });
    });
    group.bench_function("drag_zoom_cycle", |b| {
        b.iter(|| {
            camera.apply_drag(black_box(Vec2::new(3.0, -2.0)));
            camera.set_zoom(black_box(7.5));
            black_box(camera.frustum());
        });
    });
    group.finish();
}

fn bench_floor(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/floor");
    let layout = plan_layout(&LayoutConfig::default());
    let camera = camera();

    group.bench_function("draw_items", |b| {
        b.iter(|| black_box(rack_draw_items(&layout, true)));
    });
    group.bench_function("mount_and_export", |b| {
        b.iter(|| {
            let surface = SvgSurface::new();
            let mut floor =
                FloorView::new(&surface, layout.clone(), FloorOptions::default(), &camera);
            let _ = floor.set_overlay(&OverlaySelection::default());
            black_box(surface.to_svg(&camera))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_projection, bench_floor);
criterion_main!(benches);
