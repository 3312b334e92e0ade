// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rackplan Scene: the seam between floor-plan geometry and a renderer.
//!
//! This crate turns a planned [`Layout`](rackplan_layout::Layout) and an
//! [`OrthoCamera`](rackplan_view::OrthoCamera) into meshes on a
//! [`RenderSurface`], and routes pointer input from a [`PointerSource`] into
//! the camera. It provides:
//! - [`rack_draw_items`]: per-rack outline and label data, renderer agnostic.
//! - [`MeshGuard`] and [`PointerSubscription`]: scoped registrations that are
//!   released on drop, whatever the exit path.
//! - [`FloorView`]: rack outlines, zoom-sized labels, and a replaceable group
//!   overlay on one surface.
//! - [`SvgSurface`] and [`QueuedPointerSource`]: in-memory implementations for
//!   headless hosts, debugging, and tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use rackplan_layout::{LayoutConfig, OverlaySelection, plan_layout};
//! use rackplan_scene::{
//!     FloorOptions, FloorView, PointerSubscription, QueuedPointerSource, SvgSurface,
//! };
//! use rackplan_view::{OrthoCamera, PointerEvent};
//!
//! let surface = SvgSurface::new();
//! let pointer = QueuedPointerSource::new();
//!
//! let mut camera = OrthoCamera::default();
//! camera.set_viewport_size(Size::new(800.0, 600.0));
//!
//! let layout = plan_layout(&LayoutConfig::default());
//! let mut floor = FloorView::new(&surface, layout, FloorOptions::default(), &camera);
//! floor.set_overlay(&OverlaySelection::default()).unwrap();
//!
//! let subscription = PointerSubscription::new(&pointer);
//! pointer.push(PointerEvent::Down(Point::new(10.0, 10.0)));
//! pointer.push(PointerEvent::Move(Point::new(60.0, 10.0)));
//! pointer.push(PointerEvent::Up);
//! subscription.pump(&mut camera);
//!
//! let svg = surface.to_svg(&camera).unwrap();
//! assert!(svg.contains("Rack 30"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod draw;
mod floor;
mod queue;
mod surface;
mod svg;

pub use draw::{LabelStyle, OutlineStyle, RackDrawItem, rack_draw_items};
pub use floor::{FloorOptions, FloorView};
pub use queue::{ListenerId, QueuedPointerSource};
pub use surface::{MeshGuard, PointerSource, PointerSubscription, RenderSurface};
pub use svg::{SvgMesh, SvgSurface};
