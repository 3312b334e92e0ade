// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed footprint polygons.

use kurbo::{BezPath, Point, Rect};

use crate::placement::Orientation;
use crate::units::RackDimensions;

/// A closed rectangle as five points: the four corners followed by the first
/// corner again.
///
/// Corners are wound bottom-left, bottom-right, top-right, top-left, with Y
/// growing upward in the projection plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RackOutline {
    points: [Point; 5],
}

impl RackOutline {
    /// Builds the closed outline of an axis-aligned rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        let bottom_left = Point::new(rect.x0, rect.y0);
        Self {
            points: [
                bottom_left,
                Point::new(rect.x1, rect.y0),
                Point::new(rect.x1, rect.y1),
                Point::new(rect.x0, rect.y1),
                bottom_left,
            ],
        }
    }

    /// The five points of the outline.
    #[must_use]
    pub fn points(&self) -> &[Point; 5] {
        &self.points
    }

    /// Returns `true` when the last point repeats the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points[0] == self.points[4]
    }

    /// Axis-aligned bounding box of the outline.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let [first, rest @ ..] = self.points;
        rest.iter()
            .fold(Rect::from_points(first, first), |acc, p| acc.union_pt(*p))
    }

    /// The outline as a closed path, for renderers that consume Kurbo paths.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.points[0]);
        for p in &self.points[1..4] {
            path.line_to(*p);
        }
        path.close_path();
        path
    }
}

/// Computes the footprint outline of a rack centered at `center`.
///
/// Horizontal racks extend `width / 2` along X and `depth / 2` along Y;
/// vertical racks swap the two.
#[must_use]
pub fn rack_outline(center: Point, orientation: Orientation, dims: &RackDimensions) -> RackOutline {
    let half_long = dims.width / 2.0;
    let half_short = dims.depth / 2.0;
    let (half_w, half_d) = match orientation {
        Orientation::Horizontal => (half_long, half_short),
        Orientation::Vertical => (half_short, half_long),
    };
    RackOutline::from_rect(Rect::new(
        center.x - half_w,
        center.y - half_d,
        center.x + half_w,
        center.y + half_d,
    ))
}
