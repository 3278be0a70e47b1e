use std::cell::Cell;
use std::rc::Rc;

use super::{EventHandler, StoreEvent};

/// Turns store events into a pending-redraw flag.
///
/// Any number of events raised during one dispatch turn collapse into a
/// single request; whoever owns the surface takes it with [`Self::take`].
#[derive(Debug, Clone, Default)]
pub struct RedrawScheduler {
    pending: Rc<Cell<bool>>,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.pending.set(true);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Returns whether a redraw was pending and clears the flag
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }
}

impl EventHandler for RedrawScheduler {
    fn handle_event(&mut self, event: &StoreEvent) {
        log::trace!("Redraw requested by {:?}", event);
        self.request();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let scheduler = RedrawScheduler::new();
        let mut handler = scheduler.clone();

        handler.handle_event(&StoreEvent::Recolored { id: 1 });
        handler.handle_event(&StoreEvent::Recolored { id: 2 });

        assert!(scheduler.is_pending());
        assert!(scheduler.take());
        assert!(!scheduler.take());
    }
}
