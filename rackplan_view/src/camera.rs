// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::drag::DragTracker;
use crate::frustum::{OrthoFrustum, aspect_ratio, is_positive};
use crate::pointer::PointerEvent;

/// Inclusive range the zoom value is clamped into.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLimits {
    /// Smallest zoom (closest view).
    pub min: f64,
    /// Largest zoom (widest view).
    pub max: f64,
}

impl ZoomLimits {
    /// Creates limits, swapping the bounds if they are given in reverse.
    ///
    /// Bounds that are not finite and positive fall back to the default
    /// `[2, 15]`, since a zoom of zero or less has no frustum.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if !is_positive(min) || !is_positive(max) {
            log::debug!("zoom limits [{min}, {max}] are unusable; using defaults");
            return Self::default();
        }
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps `zoom` into the limits.
    ///
    /// The fields are public, so the bounds are normalized the same way as
    /// [`new`](Self::new) before clamping.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        let Self { min, max } = Self::new(self.min, self.max);
        zoom.clamp(min, max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 2.0,
            max: 15.0,
        }
    }
}

/// Initial state and tuning for an [`OrthoCamera`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraConfig {
    /// Starting zoom, clamped into `limits`.
    pub zoom: f64,
    /// Zoom clamp range.
    pub limits: ZoomLimits,
    /// Screen pixels of drag per world unit of pan.
    pub drag_sensitivity: f64,
    /// Starting camera position.
    pub position: Point,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom: 6.0,
            limits: ZoomLimits::default(),
            drag_sensitivity: 100.0,
            position: Point::ZERO,
        }
    }
}

/// Orthographic top-down camera with clamped zoom and pointer-drag panning.
///
/// The camera owns all of its state. The frustum is never stored; it is
/// derived from the current zoom and aspect ratio on every query, so it cannot
/// go stale after a zoom change or a resize.
///
/// Until [`set_viewport_size`](Self::set_viewport_size) has been called with a
/// usable size, the camera is "not ready" and frustum queries return `None`.
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    zoom: f64,
    limits: ZoomLimits,
    viewport: Size,
    aspect: Option<f64>,
    position: Point,
    drag_sensitivity: f64,
    drag: DragTracker,
}

impl OrthoCamera {
    /// Creates a camera from `config`. The viewport starts unsized.
    #[must_use]
    pub fn new(config: CameraConfig) -> Self {
        let limits = ZoomLimits::new(config.limits.min, config.limits.max);
        let zoom = if config.zoom.is_finite() {
            limits.clamp(config.zoom)
        } else {
            limits.min
        };
        Self {
            zoom,
            limits,
            viewport: Size::ZERO,
            aspect: None,
            position: config.position,
            drag_sensitivity: config.drag_sensitivity,
            drag: DragTracker::default(),
        }
    }

    /// Current zoom: half the visible height in world units.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom, clamping it into the configured limits.
    ///
    /// Non-finite input is ignored. Returns the zoom now in effect.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        if !zoom.is_finite() {
            log::debug!("ignoring non-finite zoom {zoom}");
            return self.zoom;
        }
        self.zoom = self.limits.clamp(zoom);
        self.zoom
    }

    /// Current zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits and re-clamps the current zoom.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.limits = ZoomLimits::new(limits.min, limits.max);
        self.zoom = self.limits.clamp(self.zoom);
    }

    /// Size of the render surface in pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Records a new render surface size.
    ///
    /// A zero or non-finite size leaves the camera "not ready" until the next
    /// resize with a usable size.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
        self.aspect = aspect_ratio(size);
        if self.aspect.is_none() {
            log::debug!("viewport {size:?} is not ready; frustum deferred");
        }
    }

    /// Width / height ratio of the render surface, if sized.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.aspect
    }

    /// Returns `true` once the render surface has a usable size.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.aspect.is_some()
    }

    /// Frustum for the current zoom and aspect ratio.
    #[must_use]
    pub fn frustum(&self) -> Option<OrthoFrustum> {
        OrthoFrustum::from_zoom(self.zoom, self.aspect?)
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the camera so it looks at `pos`.
    pub fn center_on(&mut self, pos: Point) {
        self.position = pos;
    }

    /// Screen pixels of drag per world unit of pan.
    #[must_use]
    pub fn drag_sensitivity(&self) -> f64 {
        self.drag_sensitivity
    }

    /// Pans by a screen-space pointer delta.
    ///
    /// Screen Y grows downward while world Y grows upward, so a drag to the
    /// right and up moves the camera left and down, keeping the floor under
    /// the pointer moving with it.
    pub fn apply_drag(&mut self, delta: Vec2) {
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity == 0.0 {
            return;
        }
        self.position.x -= delta.x / self.drag_sensitivity;
        self.position.y += delta.y / self.drag_sensitivity;
    }

    /// Starts a drag at a screen position.
    pub fn pointer_down(&mut self, pos: Point) {
        log::trace!("pointer down at {pos:?}");
        self.drag.press(pos);
    }

    /// Pans by the movement since the last pointer position, if dragging.
    ///
    /// Returns the screen-space delta that was applied.
    pub fn pointer_move(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.drag.motion(pos)?;
        self.apply_drag(delta);
        Some(delta)
    }

    /// Ends the current drag.
    pub fn pointer_up(&mut self) {
        if self.drag.is_dragging() {
            log::trace!("pointer up; camera at {:?}", self.position);
        }
        self.drag.release();
    }

    /// Dispatches a pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos),
            PointerEvent::Move(pos) => {
                self.pointer_move(pos);
            }
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// World-space rectangle currently in view.
    #[must_use]
    pub fn visible_world_rect(&self) -> Option<Rect> {
        Some(self.frustum()?.world_rect(self.position))
    }

    /// World units covered by one screen pixel.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> Option<f64> {
        let frustum = self.frustum()?;
        Some(frustum.height() / self.viewport.height)
    }

    /// World position under a screen-space point, with the origin at the
    /// top-left of the viewport.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Option<Point> {
        let visible = self.visible_world_rect()?;
        let fx = pt.x / self.viewport.width;
        let fy = pt.y / self.viewport.height;
        Some(Point::new(
            visible.x0 + fx * visible.width(),
            visible.y1 - fy * visible.height(),
        ))
    }

    /// Screen-space position of a world point, with the origin at the
    /// top-left of the viewport.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Option<Point> {
        let visible = self.visible_world_rect()?;
        let fx = (pt.x - visible.x0) / visible.width();
        let fy = (visible.y1 - pt.y) / visible.height();
        Some(Point::new(
            fx * self.viewport.width,
            fy * self.viewport.height,
        ))
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> OrthoCameraDebugInfo {
        OrthoCameraDebugInfo {
            zoom: self.zoom,
            limits: self.limits,
            viewport: self.viewport,
            aspect: self.aspect,
            frustum: self.frustum(),
            position: self.position,
            dragging: self.drag.is_dragging(),
            last_pointer: self.drag.last_position(),
        }
    }
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

/// Debug snapshot of an [`OrthoCamera`] state.
#[derive(Clone, Copy, Debug)]
pub struct OrthoCameraDebugInfo {
    /// Current zoom.
    pub zoom: f64,
    /// Zoom clamp range.
    pub limits: ZoomLimits,
    /// Render surface size in pixels.
    pub viewport: Size,
    /// Aspect ratio, if the surface is sized.
    pub aspect: Option<f64>,
    /// Derived frustum, if the surface is sized.
    pub frustum: Option<OrthoFrustum>,
    /// Camera position.
    pub position: Point,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Last pointer position of the current drag.
    pub last_pointer: Option<Point>,
}
