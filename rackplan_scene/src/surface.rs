// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render surface and pointer source seams, with scoped resource guards.
//!
//! Anything a floor plan creates on a surface (outline meshes, label meshes)
//! or registers with a pointer source (listeners) is held by a guard that
//! releases it on drop. Replacing a guard, dropping its owner, or unwinding
//! all release the resource the same way.

use core::fmt;

use rackplan_layout::{LabelSpec, RackOutline};
use rackplan_view::{OrthoCamera, PointerEvent};

use crate::draw::OutlineStyle;

/// A rendering backend that can hold outline and label meshes.
///
/// Methods take `&self` so that several guards can borrow one surface at the
/// same time; implementations use interior mutability.
pub trait RenderSurface {
    /// Handle to a mesh created on this surface.
    type Mesh;

    /// Creates a closed polyline mesh.
    fn add_outline(&self, outline: &RackOutline, style: OutlineStyle) -> Self::Mesh;

    /// Creates a text mesh. `size` is the text height in world units.
    fn add_label(&self, label: &LabelSpec, size: f64) -> Self::Mesh;

    /// Destroys a mesh.
    fn remove(&self, mesh: Self::Mesh);
}

/// Owns one mesh on a [`RenderSurface`] and removes it on drop.
pub struct MeshGuard<'s, S: RenderSurface + ?Sized> {
    surface: &'s S,
    mesh: Option<S::Mesh>,
}

impl<'s, S: RenderSurface + ?Sized> MeshGuard<'s, S> {
    /// Creates an outline mesh owned by the returned guard.
    pub fn outline(surface: &'s S, outline: &RackOutline, style: OutlineStyle) -> Self {
        Self {
            surface,
            mesh: Some(surface.add_outline(outline, style)),
        }
    }

    /// Creates a label mesh owned by the returned guard.
    pub fn label(surface: &'s S, label: &LabelSpec, size: f64) -> Self {
        Self {
            surface,
            mesh: Some(surface.add_label(label, size)),
        }
    }

    /// The guarded mesh.
    pub fn mesh(&self) -> Option<&S::Mesh> {
        self.mesh.as_ref()
    }
}

impl<S: RenderSurface + ?Sized> Drop for MeshGuard<'_, S> {
    fn drop(&mut self) {
        if let Some(mesh) = self.mesh.take() {
            self.surface.remove(mesh);
        }
    }
}

impl<S: RenderSurface + ?Sized> fmt::Debug for MeshGuard<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeshGuard")
            .field("live", &self.mesh.is_some())
            .finish_non_exhaustive()
    }
}

/// A source of pointer events that listeners register with.
pub trait PointerSource {
    /// Handle identifying a registered listener.
    type Listener;

    /// Registers a listener.
    fn listen(&self) -> Self::Listener;

    /// Unregisters a listener. Events queued for it are discarded.
    fn unlisten(&self, listener: Self::Listener);

    /// Takes the next event queued for `listener`.
    fn next_event(&self, listener: &Self::Listener) -> Option<PointerEvent>;
}

/// A listener registration that is undone on drop.
pub struct PointerSubscription<'s, P: PointerSource + ?Sized> {
    source: &'s P,
    listener: Option<P::Listener>,
}

impl<'s, P: PointerSource + ?Sized> PointerSubscription<'s, P> {
    /// Registers with `source`.
    pub fn new(source: &'s P) -> Self {
        Self {
            source,
            listener: Some(source.listen()),
        }
    }

    /// Delivers every queued event to `camera`, returning how many were handled.
    pub fn pump(&self, camera: &mut OrthoCamera) -> usize {
        let Some(listener) = &self.listener else {
            return 0;
        };
        let mut handled = 0;
        while let Some(event) = self.source.next_event(listener) {
            camera.handle_pointer(event);
            handled += 1;
        }
        handled
    }
}

impl<P: PointerSource + ?Sized> Drop for PointerSubscription<'_, P> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.source.unlisten(listener);
        }
    }
}

impl<P: PointerSource + ?Sized> fmt::Debug for PointerSubscription<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("live", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
