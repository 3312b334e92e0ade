// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical units and rack dimensions.

use core::fmt;

use kurbo::Size;

use crate::placement::Orientation;

/// Meters per foot.
pub const UNIT: f64 = 0.3048;

/// Physical footprint of a single rack, in meters.
///
/// `width` is the long side of the footprint and `depth` the short side.
/// `height` is carried for completeness; the top-down projection never uses it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RackDimensions {
    /// Long side of the footprint, in meters.
    pub width: f64,
    /// Short side of the footprint, in meters.
    pub depth: f64,
    /// Vertical extent, in meters.
    pub height: f64,
}

impl RackDimensions {
    /// A standard shelving rack: 4 ft wide, 1.5 ft deep, 7 ft tall.
    pub const STANDARD: Self = Self::from_feet(4.0, 1.5, 7.0);

    /// Creates dimensions from values already expressed in meters.
    #[must_use]
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Creates dimensions from values expressed in feet.
    #[must_use]
    pub const fn from_feet(width: f64, depth: f64, height: f64) -> Self {
        Self::new(width * UNIT, depth * UNIT, height * UNIT)
    }

    /// Size of the footprint in the projection plane for the given orientation.
    ///
    /// Vertical racks run their long axis along Y, so width and depth swap.
    #[must_use]
    pub fn footprint(&self, orientation: Orientation) -> Size {
        match orientation {
            Orientation::Horizontal => Size::new(self.width, self.depth),
            Orientation::Vertical => Size::new(self.depth, self.width),
        }
    }

    /// Checks that the footprint is finite and non-degenerate.
    pub fn validate(&self) -> Result<(), DimensionError> {
        positive("width", self.width)?;
        positive("depth", self.depth)?;
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(DimensionError::InvalidExtent {
                field: "height",
                value: self.height,
            });
        }
        Ok(())
    }
}

impl Default for RackDimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), DimensionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DimensionError::InvalidExtent { field, value })
    }
}

/// Checks that a spacing value is finite and non-negative.
pub(crate) fn non_negative_gap(field: &'static str, value: f64) -> Result<(), DimensionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DimensionError::InvalidGap { field, value })
    }
}

/// Error returned when rack dimensions or layout spacing are unusable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DimensionError {
    /// A rack extent is zero, negative, or not finite.
    InvalidExtent {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A spacing value is negative or not finite.
    InvalidGap {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A coordinate in the configuration is not finite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The configured counts add up to more racks than a floor may hold.
    TooManyRacks {
        /// Largest accepted rack count.
        max: usize,
    },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { field, value } => {
                write!(f, "rack {field} must be finite and positive, got {value}")
            }
            Self::InvalidGap { field, value } => {
                write!(f, "{field} must be finite and non-negative, got {value}")
            }
            Self::NonFinite { field } => write!(f, "{field} must be finite"),
            Self::TooManyRacks { max } => {
                write!(f, "layout would hold more than {max} racks")
            }
        }
    }
}

impl core::error::Error for DimensionError {}
