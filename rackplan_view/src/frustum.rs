// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Bounds of an orthographic view volume, relative to the camera position.
///
/// The frustum is always symmetric about the camera: `left == -right` and
/// `bottom == -top`. `top` equals the zoom value, so zoom reads as "half the
/// visible height in world units".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthoFrustum {
    /// Left bound (`-zoom * aspect`).
    pub left: f64,
    /// Right bound (`zoom * aspect`).
    pub right: f64,
    /// Top bound (`zoom`).
    pub top: f64,
    /// Bottom bound (`-zoom`).
    pub bottom: f64,
}

impl OrthoFrustum {
    /// Computes the frustum for a zoom value and a width / height aspect ratio.
    ///
    /// Returns `None` when either input is not finite and positive, which is
    /// how an unsized render surface shows up.
    #[must_use]
    pub fn from_zoom(zoom: f64, aspect: f64) -> Option<Self> {
        if !is_positive(zoom) || !is_positive(aspect) {
            return None;
        }
        let half_width = zoom * aspect;
        Some(Self {
            left: -half_width,
            right: half_width,
            top: zoom,
            bottom: -zoom,
        })
    }

    /// Horizontal extent in world units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent in world units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// World-space rectangle seen by a camera at `position`.
    #[must_use]
    pub fn world_rect(&self, position: Point) -> Rect {
        Rect::new(
            position.x + self.left,
            position.y + self.bottom,
            position.x + self.right,
            position.y + self.top,
        )
    }
}

/// Width / height ratio of a surface, or `None` while it has no usable size.
#[must_use]
pub fn aspect_ratio(size: Size) -> Option<f64> {
    if !is_positive(size.width) || !is_positive(size.height) {
        return None;
    }
    let aspect = size.width / size.height;
    is_positive(aspect).then_some(aspect)
}

pub(crate) fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frustum_extents_follow_zoom_and_aspect() {
        let f = OrthoFrustum::from_zoom(6.0, 1.5).unwrap();
        assert_eq!(f.left, -9.0);
        assert_eq!(f.right, 9.0);
        assert_eq!(f.top, 6.0);
        assert_eq!(f.bottom, -6.0);
        assert_eq!(f.width(), 2.0 * 6.0 * 1.5);
        assert_eq!(f.height(), 2.0 * 6.0);
    }

    #[test]
    fn unusable_inputs_are_not_ready() {
        assert_eq!(OrthoFrustum::from_zoom(6.0, 0.0), None);
        assert_eq!(OrthoFrustum::from_zoom(6.0, f64::NAN), None);
        assert_eq!(OrthoFrustum::from_zoom(6.0, f64::INFINITY), None);
        assert_eq!(OrthoFrustum::from_zoom(0.0, 1.0), None);
    }

    #[test]
    fn aspect_ratio_requires_a_sized_surface() {
        assert_eq!(aspect_ratio(Size::new(800.0, 600.0)), Some(800.0 / 600.0));
        assert_eq!(aspect_ratio(Size::new(800.0, 0.0)), None);
        assert_eq!(aspect_ratio(Size::ZERO), None);
        assert_eq!(aspect_ratio(Size::new(f64::NAN, 10.0)), None);
    }

    #[test]
    fn world_rect_is_centered_on_position() {
        let f = OrthoFrustum::from_zoom(2.0, 2.0).unwrap();
        let r = f.world_rect(Point::new(1.0, -1.0));
        assert_eq!(r, Rect::new(-3.0, -3.0, 5.0, 1.0));
    }
}
