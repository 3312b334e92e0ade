// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight outlines around a run of racks in one horizontal row.
//!
//! The outline is the bounding box of the selected placements grown by a
//! margin. That is only a faithful outline when the selection is a contiguous
//! run of one row: every rack horizontal and every center on the same line.
//! [`group_outline`] checks this and rejects anything else instead of
//! returning an oversized box.

use core::fmt;
use core::ops::RangeInclusive;

use kurbo::Rect;
use peniko::Color;

use crate::outline::RackOutline;
use crate::placement::{Orientation, RackId, RackPlacement};
use crate::plan::Layout;
use crate::units::RackDimensions;

/// Largest difference in center Y still treated as the same row.
const ROW_TOLERANCE: f64 = 1e-9;

/// A highlighted outline and its stroke color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupOverlay {
    /// Closed outline around the selected racks.
    pub outline: RackOutline,
    /// Stroke color.
    pub color: Color,
}

/// Which racks to highlight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlaySelection {
    /// Horizontal row index, `0` being the near row.
    pub row: usize,
    /// Inclusive range of column indices within the row.
    pub columns: RangeInclusive<usize>,
    /// Distance the outline keeps from the selected racks.
    pub margin: f64,
    /// Stroke color.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub color: Color,
}

impl Default for OverlaySelection {
    /// Racks 20, 22 and 24 of the default floor: the first three racks of the far row.
    fn default() -> Self {
        Self {
            row: 1,
            columns: 0..=2,
            margin: 0.05,
            color: Color::from_rgba8(255, 0, 0, 255),
        }
    }
}

/// Error returned when an overlay selection does not fit the layout.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayError {
    /// The range ends before it starts.
    EmptyRange {
        /// First index.
        start: usize,
        /// Last index.
        end: usize,
    },
    /// The range reaches past the selected placements.
    OutOfBounds {
        /// First index.
        start: usize,
        /// Last index.
        end: usize,
        /// Number of placements available.
        len: usize,
    },
    /// The requested row does not exist.
    UnknownRow {
        /// Requested row.
        row: usize,
        /// Number of rows in the layout.
        rows: usize,
    },
    /// A selected rack is vertical.
    NotHorizontal {
        /// Offending rack.
        id: RackId,
    },
    /// A selected rack is off the row line of the first selected rack.
    NotColinear {
        /// Offending rack.
        id: RackId,
    },
    /// The margin is negative or not finite.
    InvalidMargin {
        /// The rejected margin.
        margin: f64,
    },
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange { start, end } => {
                write!(f, "overlay range {start}..={end} is empty")
            }
            Self::OutOfBounds { start, end, len } => write!(
                f,
                "overlay range {start}..={end} is out of bounds for {len} racks"
            ),
            Self::UnknownRow { row, rows } => {
                write!(f, "overlay row {row} does not exist (layout has {rows} rows)")
            }
            Self::NotHorizontal { id } => {
                write!(f, "rack {id} is vertical and cannot be outlined as a row")
            }
            Self::NotColinear { id } => {
                write!(f, "rack {id} is not on the same row as the rest of the selection")
            }
            Self::InvalidMargin { margin } => {
                write!(f, "overlay margin must be finite and non-negative, got {margin}")
            }
        }
    }
}

impl core::error::Error for OverlayError {}

/// Outline around `placements[range]`, grown by `margin` on every side.
///
/// The selection must be a run of horizontal racks sharing one row line.
pub fn group_outline(
    placements: &[RackPlacement],
    range: RangeInclusive<usize>,
    margin: f64,
    dims: &RackDimensions,
) -> Result<RackOutline, OverlayError> {
    if !margin.is_finite() || margin < 0.0 {
        return Err(OverlayError::InvalidMargin { margin });
    }
    let (start, end) = range.into_inner();
    if start > end {
        return Err(OverlayError::EmptyRange { start, end });
    }
    let Some(selected) = placements.get(start..=end) else {
        return Err(OverlayError::OutOfBounds {
            start,
            end,
            len: placements.len(),
        });
    };

    let row_y = selected[0].center.y;
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for p in selected {
        if p.orientation != Orientation::Horizontal {
            return Err(OverlayError::NotHorizontal { id: p.id });
        }
        if (p.center.y - row_y).abs() > ROW_TOLERANCE {
            return Err(OverlayError::NotColinear { id: p.id });
        }
        min_x = min_x.min(p.center.x);
        max_x = max_x.max(p.center.x);
    }

    let half_w = dims.width / 2.0;
    let half_d = dims.depth / 2.0;
    Ok(RackOutline::from_rect(Rect::new(
        min_x - half_w - margin,
        row_y - half_d - margin,
        max_x + half_w + margin,
        row_y + half_d + margin,
    )))
}

impl Layout {
    /// Resolves a selection against one of this layout's horizontal rows.
    pub fn group_overlay(&self, selection: &OverlaySelection) -> Result<GroupOverlay, OverlayError> {
        if selection.row >= self.row_count() {
            return Err(OverlayError::UnknownRow {
                row: selection.row,
                rows: self.row_count(),
            });
        }
        let row = self.row(selection.row);
        let outline = group_outline(
            &row,
            selection.columns.clone(),
            selection.margin,
            self.dimensions(),
        )?;
        Ok(GroupOverlay {
            outline,
            color: selection.color,
        })
    }
}
