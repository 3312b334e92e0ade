// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use rackplan_layout::{GroupOverlay, Layout, OverlayError, OverlaySelection};
use rackplan_view::OrthoCamera;

use crate::draw::{LabelStyle, OutlineStyle, rack_draw_items};
use crate::surface::{MeshGuard, RenderSurface};

/// Options for a [`FloorView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorOptions {
    /// Whether rack labels are drawn.
    pub labels: bool,
    /// Label sizing.
    pub label_style: LabelStyle,
}

impl Default for FloorOptions {
    fn default() -> Self {
        Self {
            labels: true,
            label_style: LabelStyle::default(),
        }
    }
}

/// A planned floor drawn onto a [`RenderSurface`].
///
/// Every mesh the view creates is held by a [`MeshGuard`], so dropping the
/// view (or replacing the overlay or labels) removes the old meshes from the
/// surface.
pub struct FloorView<'s, S: RenderSurface + ?Sized> {
    surface: &'s S,
    layout: Layout,
    options: FloorOptions,
    racks: Vec<MeshGuard<'s, S>>,
    labels: Vec<MeshGuard<'s, S>>,
    overlay: Option<(GroupOverlay, MeshGuard<'s, S>)>,
}

impl<'s, S: RenderSurface + ?Sized> FloorView<'s, S> {
    /// Draws the rack outlines of `layout` and, if enabled, their labels.
    ///
    /// Labels are sized for `camera`; call [`sync_labels`](Self::sync_labels)
    /// after zoom or viewport changes.
    pub fn new(surface: &'s S, layout: Layout, options: FloorOptions, camera: &OrthoCamera) -> Self {
        let racks = layout
            .placements()
            .iter()
            .map(|p| MeshGuard::outline(surface, &p.outline(layout.dimensions()), OutlineStyle::RACK))
            .collect();
        let mut view = Self {
            surface,
            layout,
            options,
            racks,
            labels: Vec::new(),
            overlay: None,
        };
        view.sync_labels(camera);
        view
    }

    /// The layout being shown.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of rack outline meshes held.
    #[must_use]
    pub fn rack_mesh_count(&self) -> usize {
        self.racks.len()
    }

    /// Number of label meshes held.
    #[must_use]
    pub fn label_mesh_count(&self) -> usize {
        self.labels.len()
    }

    /// Rebuilds label meshes at the text size for `camera`'s current zoom.
    pub fn sync_labels(&mut self, camera: &OrthoCamera) {
        self.labels.clear();
        if !self.options.labels {
            return;
        }
        let size = self.options.label_style.world_size(camera);
        self.labels = rack_draw_items(&self.layout, true)
            .iter()
            .filter_map(|item| item.label.as_ref())
            .map(|label| MeshGuard::label(self.surface, label, size))
            .collect();
    }

    /// Replaces the highlighted group.
    ///
    /// The previous overlay is removed first. A selection that does not fit
    /// the layout is reported and leaves no overlay drawn.
    pub fn set_overlay(&mut self, selection: &OverlaySelection) -> Result<&GroupOverlay, OverlayError> {
        self.overlay = None;
        let overlay = self.layout.group_overlay(selection).inspect_err(|err| {
            log::warn!("overlay selection rejected: {err}");
        })?;
        let mesh = MeshGuard::outline(
            self.surface,
            &overlay.outline,
            OutlineStyle::overlay(overlay.color),
        );
        let (overlay, _) = self.overlay.insert((overlay, mesh));
        Ok(&*overlay)
    }

    /// Removes the highlighted group, if any.
    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    /// The highlighted group, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<&GroupOverlay> {
        self.overlay.as_ref().map(|(overlay, _)| overlay)
    }
}

impl<S: RenderSurface + ?Sized> fmt::Debug for FloorView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloorView")
            .field("layout", &self.layout)
            .field("options", &self.options)
            .field("racks", &self.racks.len())
            .field("labels", &self.labels.len())
            .field("overlay", &self.overlay())
            .finish_non_exhaustive()
    }
}
