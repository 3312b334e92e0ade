// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `rackplan_scene` crate.
//!
//! These wire a full floor onto the SVG surface and check what a renderer
//! would receive, plus the release guarantees of the scoped guards.

use kurbo::{Point, Size};
use rackplan_layout::{LayoutConfig, OverlaySelection, plan_layout};
use rackplan_scene::{
    FloorOptions, FloorView, PointerSubscription, QueuedPointerSource, SvgSurface,
};
use rackplan_view::{OrthoCamera, PointerEvent};

fn camera() -> OrthoCamera {
    let mut camera = OrthoCamera::default();
    camera.set_viewport_size(Size::new(1024.0, 768.0));
    camera
}

#[test]
fn full_floor_svg() {
    let surface = SvgSurface::new();
    let camera = camera();
    let mut floor = FloorView::new(
        &surface,
        plan_layout(&LayoutConfig::default()),
        FloorOptions::default(),
        &camera,
    );
    floor.set_overlay(&OverlaySelection::default()).unwrap();

    let svg = surface.to_svg(&camera).unwrap();
    assert_eq!(svg.matches("<polyline").count(), 31);
    assert_eq!(svg.matches("<text").count(), 30);
    assert_eq!(svg.matches("rotate(-90").count(), 18);
    assert_eq!(svg.matches("stroke=\"#ff0000\"").count(), 1);
    for id in 1..=30 {
        assert!(svg.contains(&format!(">Rack {id}</text>")), "missing rack {id}");
    }
}

#[test]
fn dropping_the_floor_releases_every_mesh() {
    let surface = SvgSurface::new();
    let camera = camera();
    {
        let mut floor = FloorView::new(
            &surface,
            plan_layout(&LayoutConfig::default()),
            FloorOptions::default(),
            &camera,
        );
        floor.set_overlay(&OverlaySelection::default()).unwrap();
        assert_eq!(surface.live_meshes(), 61);
    }
    assert_eq!(surface.live_meshes(), 0);
}

#[test]
fn releases_on_unwind() {
    let surface = SvgSurface::new();
    let camera = camera();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut floor = FloorView::new(
            &surface,
            plan_layout(&LayoutConfig::default()),
            FloorOptions::default(),
            &camera,
        );
        floor.set_overlay(&OverlaySelection::default()).unwrap();
        panic!("unmount during render");
    }));
    assert!(result.is_err());
    assert_eq!(surface.live_meshes(), 0);
}

#[test]
fn pointer_drag_moves_the_rendered_floor() {
    let surface = SvgSurface::new();
    let pointer = QueuedPointerSource::new();
    let mut camera = camera();
    let _floor = FloorView::new(
        &surface,
        plan_layout(&LayoutConfig::default()),
        FloorOptions::default(),
        &camera,
    );
    let before = surface.to_svg(&camera).unwrap();

    {
        let subscription = PointerSubscription::new(&pointer);
        pointer.push(PointerEvent::Down(Point::new(500.0, 400.0)));
        pointer.push(PointerEvent::Move(Point::new(600.0, 400.0)));
        pointer.push(PointerEvent::Up);
        assert_eq!(subscription.pump(&mut camera), 3);
    }
    assert_eq!(pointer.listener_count(), 0);
    assert!((camera.position().x - -1.0).abs() < 1e-12);

    let after = surface.to_svg(&camera).unwrap();
    assert_ne!(before, after);
}

#[test]
fn label_size_follows_zoom() {
    let surface = SvgSurface::new();
    let mut camera = camera();
    let mut floor = FloorView::new(
        &surface,
        plan_layout(&LayoutConfig::default()),
        FloorOptions::default(),
        &camera,
    );
    let font_sizes = |svg: &str| -> Vec<String> {
        svg.match_indices("font-size=\"")
            .map(|(i, m)| {
                let rest = &svg[i + m.len()..];
                rest[..rest.find('"').unwrap()].to_string()
            })
            .collect()
    };

    let before = font_sizes(&surface.to_svg(&camera).unwrap());
    camera.set_zoom(12.0);
    floor.sync_labels(&camera);
    let after = font_sizes(&surface.to_svg(&camera).unwrap());
    // Constant on-screen size regardless of zoom.
    assert_eq!(before, after);
    assert!(before.iter().all(|s| s == "14"));
}
