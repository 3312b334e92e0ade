// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera session.
//!
//! Drive an `OrthoCamera` the way an interactive host would: a zoom slider,
//! a window resize, and a pointer drag routed through a scoped subscription.
//!
//! Run:
//! - `cargo run -p rackplan_demos --example camera_session`

use kurbo::{Point, Size};
use rackplan_layout::{LayoutConfig, plan_layout};
use rackplan_scene::{
    FloorOptions, FloorView, PointerSubscription, QueuedPointerSource, SvgSurface,
};
use rackplan_view::{OrthoCamera, PointerEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let surface = SvgSurface::new();
    let pointer = QueuedPointerSource::new();
    let mut camera = OrthoCamera::default();

    // Before the host sizes the surface there is nothing to project.
    println!("Ready before sizing: {}", camera.is_ready());
    camera.set_viewport_size(Size::new(800.0, 600.0));
    println!("Initial: {:?}", camera.debug_info());

    let mut floor = FloorView::new(
        &surface,
        plan_layout(&LayoutConfig::default()),
        FloorOptions::default(),
        &camera,
    );

    // Slider input, including values past either end.
    for value in [4.0, 1.0, 20.0, 9.5] {
        let applied = camera.set_zoom(value);
        floor.sync_labels(&camera);
        println!(
            "Slider {value:>4} -> zoom {applied:>4}, visible {:?}",
            camera.visible_world_rect()
        );
    }

    camera.set_viewport_size(Size::new(1024.0, 512.0));
    println!("Resized frustum: {:?}", camera.frustum());

    {
        let subscription = PointerSubscription::new(&pointer);
        pointer.push(PointerEvent::Down(Point::new(400.0, 300.0)));
        pointer.push(PointerEvent::Move(Point::new(450.0, 280.0)));
        pointer.push(PointerEvent::Move(Point::new(520.0, 250.0)));
        pointer.push(PointerEvent::Up);
        // Motion after release is ignored.
        pointer.push(PointerEvent::Move(Point::new(900.0, 900.0)));
        let handled = subscription.pump(&mut camera);
        println!("Handled {handled} pointer events, camera at {:?}", camera.position());
    }
    println!("Listeners after scope: {}", pointer.listener_count());

    let svg = surface.to_svg(&camera).ok_or("camera has no viewport")?;
    println!("SVG has {} outlines", svg.matches("<polyline").count());
    println!("Final: {:?}", camera.debug_info());
    Ok(())
}
