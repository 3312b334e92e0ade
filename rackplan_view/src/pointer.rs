// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// A pointer event in screen pixels, origin at the top-left of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at a position.
    Down(Point),
    /// Pointer moved to a position.
    Move(Point),
    /// Button released.
    Up,
}
