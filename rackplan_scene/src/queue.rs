// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use rackplan_view::PointerEvent;

use crate::surface::PointerSource;

/// Listener handle of a [`QueuedPointerSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// An in-memory pointer source for headless hosts and tests.
///
/// Events pushed while no listener is registered are dropped, as they would
/// be on a real surface with nothing attached.
#[derive(Debug, Default)]
pub struct QueuedPointerSource {
    next_id: Cell<u32>,
    queues: RefCell<Vec<(ListenerId, VecDeque<PointerEvent>)>>,
}

impl QueuedPointerSource {
    /// Creates a source with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `event` for every registered listener.
    pub fn push(&self, event: PointerEvent) {
        for (_, queue) in self.queues.borrow_mut().iter_mut() {
            queue.push_back(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.queues.borrow().len()
    }
}

impl PointerSource for QueuedPointerSource {
    type Listener = ListenerId;

    fn listen(&self) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));
        self.queues.borrow_mut().push((id, VecDeque::new()));
        id
    }

    fn unlisten(&self, listener: ListenerId) {
        self.queues.borrow_mut().retain(|(id, _)| *id != listener);
    }

    fn next_event(&self, listener: &ListenerId) -> Option<PointerEvent> {
        self.queues
            .borrow_mut()
            .iter_mut()
            .find(|(id, _)| id == listener)
            .and_then(|(_, queue)| queue.pop_front())
    }
}
