// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rackplan View: an orthographic top-down camera.
//!
//! This crate provides a small, headless camera model for rack floor plans:
//! - A zoom value clamped into a range (by default `[2, 15]`).
//! - An orthographic frustum derived from zoom and the surface aspect ratio.
//! - Pointer-drag panning with a fixed pixels-per-world-unit sensitivity.
//! - Conversion between screen pixels and world coordinates.
//!
//! It does **not** own a render surface or an input system. Callers are
//! expected to:
//! - Forward surface resizes to [`OrthoCamera::set_viewport_size`].
//! - Forward their zoom control's value to [`OrthoCamera::set_zoom`].
//! - Forward pointer input as [`PointerEvent`]s.
//! - Read [`OrthoCamera::frustum`] and [`OrthoCamera::position`] when drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use rackplan_view::{CameraConfig, OrthoCamera, PointerEvent};
//!
//! let mut camera = OrthoCamera::new(CameraConfig::default());
//!
//! // Not ready until the surface has a size.
//! assert!(camera.frustum().is_none());
//! camera.set_viewport_size(Size::new(800.0, 600.0));
//!
//! // Out-of-range zoom is clamped rather than rejected.
//! camera.set_zoom(20.0);
//! let frustum = camera.frustum().unwrap();
//! assert_eq!(frustum.top, 15.0);
//!
//! // Drag 10px right and 10px up.
//! camera.handle_pointer(PointerEvent::Down(Point::new(100.0, 100.0)));
//! camera.handle_pointer(PointerEvent::Move(Point::new(110.0, 90.0)));
//! camera.handle_pointer(PointerEvent::Up);
//! assert!((camera.position().x + 0.1).abs() < 1e-12);
//! assert!((camera.position().y + 0.1).abs() < 1e-12);
//! ```
//!
//! ## Design notes
//!
//! - The frustum is symmetric about the camera and is recomputed from zoom and
//!   aspect ratio on every query, never cached.
//! - Panning has no inertia, smoothing, or bounds.
//! - Everything runs on the caller's event thread; the camera is not shared.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod drag;
mod frustum;
mod pointer;

pub use camera::{CameraConfig, OrthoCamera, OrthoCameraDebugInfo, ZoomLimits};
pub use drag::DragTracker;
pub use frustum::{OrthoFrustum, aspect_ratio};
pub use pointer::PointerEvent;
