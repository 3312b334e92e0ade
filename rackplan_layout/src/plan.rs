// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floor layout planning.
//!
//! A floor has two regions, always planned in the same order so that rack ids
//! are stable across re-plans:
//!
//! 1. [`Region::VerticalClusters`]: a grid of back-to-back vertical rack pairs
//!    centered on the origin. Columns are visited outermost, then rows, then the
//!    left rack of each pair before the right one.
//! 2. [`Region::HorizontalRows`]: parallel rows of horizontal racks starting at
//!    [`RowConfig::base_y`]. Columns are visited outermost, then rows from the
//!    near row (at `base_y`) outward.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::label::{LabelRule, LabelSpec};
use crate::placement::{Orientation, RackId, RackPlacement, Region};
use crate::units::{DimensionError, RackDimensions, non_negative_gap};

/// Spacing and counts for the vertical double-rack clusters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClusterConfig {
    /// Number of pair columns.
    pub columns: usize,
    /// Number of pairs stacked in each column.
    pub rows: usize,
    /// Gap between consecutive pairs in a column.
    pub pair_gap: f64,
    /// Gap between the two back-to-back racks of a pair.
    pub double_rack_gap: f64,
    /// Walking aisle between neighboring pair columns.
    pub aisle_gap: f64,
}

impl ClusterConfig {
    /// Number of racks in the cluster region.
    ///
    /// Saturates at `usize::MAX`; [`LayoutConfig::validate`] rejects such counts.
    #[must_use]
    pub fn rack_count(&self) -> usize {
        self.columns.saturating_mul(self.rows).saturating_mul(2)
    }

    /// Distance between neighboring column centers.
    #[must_use]
    pub fn column_spacing(&self, dims: &RackDimensions) -> f64 {
        2.0 * dims.depth + self.double_rack_gap + self.aisle_gap
    }

    /// Distance between neighboring pair centers within a column.
    #[must_use]
    pub fn row_spacing(&self, dims: &RackDimensions) -> f64 {
        dims.width + self.pair_gap
    }

    /// Offset of each rack of a pair from the pair's center.
    #[must_use]
    pub fn back_offset(&self, dims: &RackDimensions) -> f64 {
        (dims.depth + self.double_rack_gap) / 2.0
    }
}

impl ClusterConfig {
    /// Default aisle between pair columns.
    ///
    /// Together with the default double-rack gap this puts neighboring column
    /// centers `3 * (depth / 2 + 0.3)` apart for the standard rack, the pitch
    /// of the reference floor.
    pub const DEFAULT_AISLE_GAP: f64 = 0.3 - RackDimensions::STANDARD.depth / 2.0;
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            rows: 3,
            pair_gap: 0.3,
            double_rack_gap: 0.6,
            aisle_gap: Self::DEFAULT_AISLE_GAP,
        }
    }
}

/// Spacing and counts for the horizontal rack rows.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RowConfig {
    /// Racks per row.
    pub columns: usize,
    /// Number of parallel rows.
    pub rows: usize,
    /// Gap between neighboring racks, both along a row and between rows.
    pub pair_gap: f64,
    /// Y coordinate of the near row's centers.
    pub base_y: f64,
}

impl RowConfig {
    /// Number of racks in the row region.
    ///
    /// Saturates at `usize::MAX`; [`LayoutConfig::validate`] rejects such counts.
    #[must_use]
    pub fn rack_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Distance between neighboring rack centers along a row.
    #[must_use]
    pub fn column_spacing(&self, dims: &RackDimensions) -> f64 {
        dims.width + self.pair_gap
    }

    /// Distance between neighboring row baselines.
    #[must_use]
    pub fn row_spacing(&self, dims: &RackDimensions) -> f64 {
        dims.depth + self.pair_gap
    }

    /// X coordinate of the first column, chosen so the row is centered on the origin.
    #[must_use]
    pub fn start_x(&self, dims: &RackDimensions) -> f64 {
        centered_index(0, self.columns) * self.column_spacing(dims)
    }
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            columns: 6,
            rows: 2,
            pair_gap: 0.1,
            base_y: 3.5,
        }
    }
}

/// Everything the planner needs to lay out a floor.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Footprint shared by every rack.
    pub dimensions: RackDimensions,
    /// Vertical cluster region.
    pub clusters: ClusterConfig,
    /// Horizontal row region.
    pub rows: RowConfig,
}

impl LayoutConfig {
    /// Largest floor [`validate`](Self::validate) accepts, in racks.
    pub const MAX_RACKS: usize = 1 << 20;

    /// Checks dimensions, spacing, and rack counts.
    ///
    /// [`plan_layout`] itself never fails; call this at the boundary where a
    /// configuration enters the program (for example when it is deserialized).
    pub fn validate(&self) -> Result<(), DimensionError> {
        self.dimensions.validate()?;
        non_negative_gap("clusters.pair_gap", self.clusters.pair_gap)?;
        non_negative_gap("clusters.double_rack_gap", self.clusters.double_rack_gap)?;
        non_negative_gap("clusters.aisle_gap", self.clusters.aisle_gap)?;
        non_negative_gap("rows.pair_gap", self.rows.pair_gap)?;
        if !self.rows.base_y.is_finite() {
            return Err(DimensionError::NonFinite {
                field: "rows.base_y",
            });
        }
        let total = self
            .clusters
            .columns
            .checked_mul(self.clusters.rows)
            .and_then(|pairs| pairs.checked_mul(2))
            .zip(self.rows.columns.checked_mul(self.rows.rows))
            .and_then(|(vertical, horizontal)| vertical.checked_add(horizontal));
        match total {
            Some(total) if total <= Self::MAX_RACKS => Ok(()),
            _ => Err(DimensionError::TooManyRacks {
                max: Self::MAX_RACKS,
            }),
        }
    }

    /// Number of racks in the vertical cluster region.
    #[must_use]
    pub fn vertical_count(&self) -> usize {
        self.clusters.rack_count()
    }

    /// Total number of racks on the floor.
    #[must_use]
    pub fn rack_count(&self) -> usize {
        self.clusters
            .rack_count()
            .saturating_add(self.rows.rack_count())
    }
}

/// A planned floor: every rack placement in visitation order.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    dimensions: RackDimensions,
    placements: Vec<RackPlacement>,
    vertical_count: usize,
    row_count: usize,
}

impl Layout {
    /// Rack dimensions the layout was planned with.
    #[must_use]
    pub fn dimensions(&self) -> &RackDimensions {
        &self.dimensions
    }

    /// All placements, vertical region first.
    #[must_use]
    pub fn placements(&self) -> &[RackPlacement] {
        &self.placements
    }

    /// Number of placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if the layout has no racks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements of one region.
    #[must_use]
    pub fn region(&self, region: Region) -> &[RackPlacement] {
        match region {
            Region::VerticalClusters => &self.placements[..self.vertical_count],
            Region::HorizontalRows => &self.placements[self.vertical_count..],
        }
    }

    /// Placements of the vertical cluster region.
    #[must_use]
    pub fn vertical_region(&self) -> &[RackPlacement] {
        self.region(Region::VerticalClusters)
    }

    /// Placements of the horizontal row region.
    #[must_use]
    pub fn horizontal_region(&self) -> &[RackPlacement] {
        self.region(Region::HorizontalRows)
    }

    /// Number of parallel horizontal rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Placements of a single horizontal row, ordered by column.
    ///
    /// Row `0` is the near row at the configured baseline. Returns an empty
    /// vector for a row index past the last row.
    #[must_use]
    pub fn row(&self, row: usize) -> Vec<RackPlacement> {
        if row >= self.row_count {
            return Vec::new();
        }
        self.horizontal_region()
            .iter()
            .skip(row)
            .step_by(self.row_count)
            .copied()
            .collect()
    }

    /// Looks up a placement by id.
    #[must_use]
    pub fn get(&self, id: RackId) -> Option<&RackPlacement> {
        // Ids are contiguous from 1 in placement order.
        let index = usize::try_from(id.get() - 1).ok()?;
        self.placements.get(index)
    }

    /// Region a rack belongs to.
    #[must_use]
    pub fn region_of(&self, id: RackId) -> Option<Region> {
        let index = usize::try_from(id.get() - 1).ok()?;
        if index < self.vertical_count {
            Some(Region::VerticalClusters)
        } else if index < self.placements.len() {
            Some(Region::HorizontalRows)
        } else {
            None
        }
    }

    /// Label rule derived from this layout's vertical region.
    #[must_use]
    pub fn label_rule(&self) -> LabelRule {
        LabelRule::from_vertical_count(self.vertical_count)
    }

    /// Label for a placement of this layout.
    #[must_use]
    pub fn label_for(&self, placement: &RackPlacement) -> LabelSpec {
        self.label_rule().label_for(placement)
    }

    /// Labels for every placement, in placement order.
    pub fn labels(&self) -> impl Iterator<Item = LabelSpec> + '_ {
        let rule = self.label_rule();
        self.placements.iter().map(move |p| rule.label_for(p))
    }

    /// Union of every rack footprint, or `None` for an empty layout.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self
            .placements
            .iter()
            .map(|p| p.footprint(&self.dimensions));
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

/// Position of index `i` among `n` slots centered on zero, in slot units.
///
/// For three slots this yields `-1, 0, 1`; for six, `-2.5 ..= 2.5`.
fn centered_index(i: usize, n: usize) -> f64 {
    i as f64 - (n.saturating_sub(1)) as f64 / 2.0
}

/// Plans every rack on the floor.
///
/// The result is a pure function of `config`: planning twice with the same
/// configuration yields equal layouts.
#[must_use]
pub fn plan_layout(config: &LayoutConfig) -> Layout {
    let dims = config.dimensions;
    let mut placements = Vec::with_capacity(config.rack_count());
    let mut next_id = RackId::FIRST;
    let mut push = |center: Point, orientation: Orientation| {
        placements.push(RackPlacement {
            id: next_id,
            center,
            orientation,
        });
        next_id = next_id.next();
    };

    let clusters = &config.clusters;
    let column_spacing = clusters.column_spacing(&dims);
    let pair_spacing = clusters.row_spacing(&dims);
    let back_offset = clusters.back_offset(&dims);
    for col in 0..clusters.columns {
        let col_x = centered_index(col, clusters.columns) * column_spacing;
        for row in 0..clusters.rows {
            let row_y = centered_index(row, clusters.rows) * pair_spacing;
            push(Point::new(col_x - back_offset, row_y), Orientation::Vertical);
            push(Point::new(col_x + back_offset, row_y), Orientation::Vertical);
        }
    }

    let rows = &config.rows;
    let start_x = rows.start_x(&dims);
    let step_x = rows.column_spacing(&dims);
    let step_y = rows.row_spacing(&dims);
    for col in 0..rows.columns {
        let x = start_x + col as f64 * step_x;
        for row in 0..rows.rows {
            let y = rows.base_y + row as f64 * step_y;
            push(Point::new(x, y), Orientation::Horizontal);
        }
    }

    log::debug!(
        "planned {} racks ({} vertical, {} horizontal)",
        placements.len(),
        config.vertical_count(),
        rows.rack_count()
    );

    Layout {
        dimensions: dims,
        placements,
        vertical_count: config.vertical_count(),
        row_count: rows.rows,
    }
}
