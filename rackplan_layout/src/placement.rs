// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rack identifiers, orientation, and placements.

use core::fmt;
use core::num::NonZeroU32;

use kurbo::{Point, Rect};

use crate::outline::{RackOutline, rack_outline};
use crate::units::RackDimensions;

/// Which projection axis a rack's long side runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Long side along X.
    #[default]
    Horizontal,
    /// Long side along Y.
    Vertical,
}

/// Sequential rack identifier, starting at `1`.
///
/// Ids are assigned by [`plan_layout`](crate::plan_layout) in visitation order
/// and are contiguous across the whole layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RackId(NonZeroU32);

impl RackId {
    /// The first id handed out by the planner.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates an id, returning `None` for `0`.
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        match NonZeroU32::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the id following this one.
    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The two regions of a floor, in planning order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Columns of back-to-back vertical rack pairs around the origin.
    VerticalClusters,
    /// Parallel rows of horizontal racks below the clusters.
    HorizontalRows,
}

/// A single rack on the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RackPlacement {
    /// Sequential identifier.
    pub id: RackId,
    /// Center of the footprint in the projection plane.
    pub center: Point,
    /// Axis of the rack's long side.
    pub orientation: Orientation,
}

impl RackPlacement {
    /// Footprint rectangle of this rack.
    #[must_use]
    pub fn footprint(&self, dims: &RackDimensions) -> Rect {
        Rect::from_center_size(self.center, dims.footprint(self.orientation))
    }

    /// Closed outline polygon of this rack.
    #[must_use]
    pub fn outline(&self, dims: &RackDimensions) -> RackOutline {
        rack_outline(self.center, self.orientation, dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rack_id_rejects_zero_and_counts_up() {
        assert_eq!(RackId::new(0), None);
        let first = RackId::FIRST;
        assert_eq!(first.get(), 1);
        assert_eq!(first.next().get(), 2);
        assert!(first < first.next());
    }

    #[test]
    fn footprint_is_centered_on_placement() {
        let dims = RackDimensions::new(2.0, 1.0, 1.0);
        let placement = RackPlacement {
            id: RackId::FIRST,
            center: Point::new(3.0, -1.0),
            orientation: Orientation::Vertical,
        };
        assert_eq!(placement.footprint(&dims), Rect::new(2.5, -2.0, 3.5, 0.0));
    }
}
