use std::collections::VecDeque;

use crate::{Selection, Tool};

use super::{SelectionHost, SelectionManager};

/// Notifications the selection manager reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// A selection tool finished drawing a selection. `None` is a malformed notification.
    Created(Option<Selection>),
    Dismissed,
    MoveRequested { col_delta: i32, row_delta: i32 },
    ToolChanged(Tool),
}

/// FIFO queue of selection notifications
#[derive(Debug, Default)]
pub struct SelectionEventQueue {
    events: VecDeque<SelectionEvent>,
}

impl SelectionEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SelectionEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Delivers all queued events in the order they were pushed
    pub fn drain_into<H: SelectionHost>(&mut self, manager: &mut SelectionManager<H>) {
        while let Some(event) = self.events.pop_front() {
            manager.handle_event(event);
        }
    }
}
