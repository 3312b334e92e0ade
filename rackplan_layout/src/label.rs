// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-rack label placement.

use alloc::format;
use alloc::string::String;

use kurbo::Point;

use crate::placement::RackPlacement;

/// Where and how to draw a rack's label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSpec {
    /// Center of the label, which is also the center of the rack.
    pub anchor: Point,
    /// Label text, `"Rack <id>"`.
    pub text: String,
    /// Whether the text is turned 90° to read along a vertical rack.
    pub rotated: bool,
}

/// Decides which labels are rotated.
///
/// Racks of the vertical cluster region come first in id order, so a rack is
/// rotated exactly when its id does not exceed the size of that region. The
/// threshold is always derived from a planned region count; use
/// [`Layout::label_rule`](crate::Layout::label_rule) rather than building one by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelRule {
    rotated_through: u32,
}

impl LabelRule {
    /// Rule for a layout whose vertical region holds `count` racks.
    #[must_use]
    pub fn from_vertical_count(count: usize) -> Self {
        Self {
            rotated_through: u32::try_from(count).unwrap_or(u32::MAX),
        }
    }

    /// The highest rotated id, or `0` when nothing is rotated.
    #[must_use]
    pub fn rotated_through(&self) -> u32 {
        self.rotated_through
    }

    /// Resolves the label for one placement.
    #[must_use]
    pub fn label_for(&self, placement: &RackPlacement) -> LabelSpec {
        LabelSpec {
            anchor: placement.center,
            text: format!("Rack {}", placement.id),
            rotated: placement.id.get() <= self.rotated_through,
        }
    }
}
