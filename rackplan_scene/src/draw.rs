// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What to draw for each rack, independent of any renderer.

use alloc::vec::Vec;

use peniko::Color;
use rackplan_layout::{LabelSpec, Layout, RackId, RackOutline};
use rackplan_view::OrthoCamera;

/// Stroke color and draw-order offset of an outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineStyle {
    /// Stroke color.
    pub color: Color,
    /// Offset above the floor plane, used only for draw order.
    pub z: f64,
}

impl OutlineStyle {
    /// Solid black rack outlines on the floor plane.
    pub const RACK: Self = Self {
        color: Color::BLACK,
        z: 0.0,
    };

    /// Style of a group overlay in `color`, drawn just above the racks.
    #[must_use]
    pub fn overlay(color: Color) -> Self {
        Self { color, z: 0.01 }
    }
}

/// Label sizing that keeps text at a constant on-screen size.
///
/// The world-space text size is `pixel_size` screen pixels converted through
/// the camera, so it grows in proportion to zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    /// Text height in screen pixels.
    pub pixel_size: f64,
    /// World-space text height used while the camera is not ready.
    pub fallback_size: f64,
}

impl LabelStyle {
    /// World-space text height for the camera's current zoom.
    #[must_use]
    pub fn world_size(&self, camera: &OrthoCamera) -> f64 {
        camera
            .world_units_per_pixel()
            .map_or(self.fallback_size, |wupp| wupp * self.pixel_size)
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            pixel_size: 14.0,
            fallback_size: 0.2,
        }
    }
}

/// Everything a renderer needs for one rack.
#[derive(Clone, Debug, PartialEq)]
pub struct RackDrawItem {
    /// Rack the item belongs to.
    pub id: RackId,
    /// Footprint outline.
    pub outline: RackOutline,
    /// Label, when labeling is enabled.
    pub label: Option<LabelSpec>,
}

/// Builds draw items for every rack of `layout`, in placement order.
#[must_use]
pub fn rack_draw_items(layout: &Layout, with_labels: bool) -> Vec<RackDrawItem> {
    let rule = layout.label_rule();
    layout
        .placements()
        .iter()
        .map(|p| RackDrawItem {
            id: p.id,
            outline: p.outline(layout.dimensions()),
            label: with_labels.then(|| rule.label_for(p)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use rackplan_layout::{LayoutConfig, plan_layout};

    use super::*;

    #[test]
    fn one_item_per_rack() {
        let layout = plan_layout(&LayoutConfig::default());
        let items = rack_draw_items(&layout, true);
        assert_eq!(items.len(), layout.len());
        for (item, p) in items.iter().zip(layout.placements()) {
            assert_eq!(item.id, p.id);
            assert_eq!(item.outline, p.outline(layout.dimensions()));
            assert_eq!(item.label.as_ref().map(|l| l.anchor), Some(p.center));
        }
    }

    #[test]
    fn labels_can_be_disabled() {
        let layout = plan_layout(&LayoutConfig::default());
        assert!(rack_draw_items(&layout, false).iter().all(|i| i.label.is_none()));
    }

    #[test]
    fn label_size_is_proportional_to_zoom() {
        let style = LabelStyle::default();
        let mut camera = OrthoCamera::default();
        assert_eq!(style.world_size(&camera), style.fallback_size);

        camera.set_viewport_size(Size::new(800.0, 600.0));
        camera.set_zoom(3.0);
        let small = style.world_size(&camera);
        camera.set_zoom(12.0);
        let large = style.world_size(&camera);
        assert!((large / small - 4.0).abs() < 1e-12);
    }
}
