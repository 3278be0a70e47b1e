mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::StoreEvent;
pub use handlers::RedrawScheduler;

/// Receives every event emitted on an [`EventBus`] it is subscribed to
pub trait EventHandler {
    fn handle_event(&mut self, event: &StoreEvent);
}
