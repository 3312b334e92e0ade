// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a rack floor to SVG.
//!
//! Plans the floor from an optional JSON configuration, draws it with labels
//! and the highlighted group, and writes the SVG seen by the camera.
//!
//! Run:
//! - `cargo run -p rackplan_demos --example floor_svg`
//! - `cargo run -p rackplan_demos --example floor_svg -- config.json floor.svg`
//!
//! Set `RUST_LOG=debug` to see the planner and camera logs.

use std::path::PathBuf;

use kurbo::Size;
use rackplan_demos::DemoConfig;
use rackplan_layout::plan_layout;
use rackplan_scene::{FloorOptions, FloorView, SvgSurface};
use rackplan_view::OrthoCamera;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let out_path = args
        .next()
        .map_or_else(|| PathBuf::from("floor.svg"), PathBuf::from);

    let config = DemoConfig::load(config_path.as_deref())?;
    let layout = plan_layout(&config.layout);
    println!(
        "Planned {} racks ({} in clusters, {} in rows)",
        layout.len(),
        layout.vertical_region().len(),
        layout.horizontal_region().len(),
    );

    let mut camera = OrthoCamera::new(config.camera);
    camera.set_viewport_size(Size::new(1280.0, 720.0));
    if let Some(bounds) = layout.bounds() {
        camera.center_on(bounds.center());
    }

    let surface = SvgSurface::new();
    let mut floor = FloorView::new(&surface, layout, FloorOptions::default(), &camera);
    if let Some(selection) = &config.overlay {
        match floor.set_overlay(selection) {
            Ok(overlay) => println!("Highlighted group: {:?}", overlay.outline.bounding_box()),
            Err(err) => println!("No highlight: {err}"),
        }
    }

    let svg = surface.to_svg(&camera).ok_or("camera has no viewport")?;
    std::fs::write(&out_path, svg)?;
    println!("Wrote {}", out_path.display());
    Ok(())
}
