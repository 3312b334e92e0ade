// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag tracking: turn a stream of positions into movement deltas.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::press`] with the pointer-down position.
//! 2) On each move, call [`DragTracker::motion`] to get the delta since the
//!    previous position. Moves while not pressed yield `None`.
//! 3) Call [`DragTracker::release`] on pointer-up.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use rackplan_view::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! assert_eq!(drag.motion(Point::new(5.0, 5.0)), None);
//!
//! drag.press(Point::new(100.0, 100.0));
//! assert_eq!(drag.motion(Point::new(110.0, 90.0)), Some(Vec2::new(10.0, -10.0)));
//! assert_eq!(drag.motion(Point::new(112.0, 90.0)), Some(Vec2::new(2.0, 0.0)));
//!
//! drag.release();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks whether a drag is in progress and where the pointer was last seen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    origin: Option<Point>,
    last: Option<Point>,
}

impl DragTracker {
    /// Begins a drag at `pos`, replacing any drag already in progress.
    pub fn press(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Records a new pointer position and returns the movement since the last one.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn motion(&mut self, pos: Point) -> Option<Vec2> {
        self.origin?;
        let last = self.last.replace(pos)?;
        Some(pos - last)
    }

    /// Ends the drag.
    pub fn release(&mut self) {
        self.origin = None;
        self.last = None;
    }

    /// Returns `true` between [`press`](Self::press) and [`release`](Self::release).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Position where the current drag began.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Most recent pointer position of the current drag.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last
    }

    /// Offset from the drag origin to `pos`.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.origin.map(|origin| pos - origin)
    }
}
