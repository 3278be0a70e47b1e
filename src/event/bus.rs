use std::cell::RefCell;

use super::{EventHandler, StoreEvent};

/// A simple event bus for broadcasting store events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers, in subscription order
    pub fn emit(&self, event: StoreEvent) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<StoreEvent>>>);

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &StoreEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn every_handler_sees_every_event() {
        let bus = EventBus::new();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        bus.subscribe(Box::new(Recorder(first.clone())));
        bus.subscribe(Box::new(Recorder(second.clone())));

        bus.emit(StoreEvent::Recolored { id: 4 });
        bus.emit(StoreEvent::Removed { id: 4, count: 1 });

        assert_eq!(bus.handler_count(), 2);
        assert_eq!(*first.borrow(), *second.borrow());
        assert_eq!(first.borrow().len(), 2);
    }
}
