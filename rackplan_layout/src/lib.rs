// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rackplan Layout: deterministic geometry for top-down rack floor plans.
//!
//! This crate computes where racks go and what to draw for them. It covers:
//! - Rack dimensions in meters, converted from feet ([`RackDimensions`]).
//! - Closed footprint outlines for horizontal and vertical racks ([`rack_outline`]).
//! - A two-region floor plan with stable, sequential rack ids ([`plan_layout`]).
//! - Label text, anchor, and rotation per rack ([`LabelRule`]).
//! - Highlight outlines around a run of racks in one row ([`group_outline`]).
//!
//! It does **not** render anything. Callers hand the outlines and labels to
//! their renderer of choice; `rackplan_scene` provides one such binding.
//!
//! ## Minimal example
//!
//! ```rust
//! use rackplan_layout::{LayoutConfig, OverlaySelection, plan_layout};
//!
//! let layout = plan_layout(&LayoutConfig::default());
//! assert_eq!(layout.len(), 30);
//!
//! for placement in layout.placements() {
//!     let outline = placement.outline(layout.dimensions());
//!     let label = layout.label_for(placement);
//!     assert!(outline.is_closed());
//!     assert_eq!(label.text, format!("Rack {}", placement.id));
//! }
//!
//! // Highlight racks 20, 22 and 24.
//! let overlay = layout.group_overlay(&OverlaySelection::default()).unwrap();
//! assert!(overlay.outline.is_closed());
//! ```
//!
//! ## Coordinates
//!
//! All positions are in meters in the floor plane, X to the right and Y up.
//! The vertical clusters are centered on the origin and the horizontal rows
//! sit at [`RowConfig::base_y`] and beyond.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod label;
mod outline;
mod overlay;
mod placement;
mod plan;
mod units;

pub use label::{LabelRule, LabelSpec};
pub use outline::{RackOutline, rack_outline};
pub use overlay::{GroupOverlay, OverlayError, OverlaySelection, group_outline};
pub use placement::{Orientation, RackId, RackPlacement, Region};
pub use plan::{ClusterConfig, Layout, LayoutConfig, RowConfig, plan_layout};
pub use units::{DimensionError, RackDimensions, UNIT};
