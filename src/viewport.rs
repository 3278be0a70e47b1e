use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::surface::Surface;

type ResizeListener = Box<dyn FnMut(f32)>;

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(u64, ResizeListener)>,
}

/// The host window's height and its resize notifications.
///
/// The eframe shell feeds it the window's inner height every frame; tests
/// drive it directly.
#[derive(Clone)]
pub struct HostWindow {
    height: Rc<Cell<f32>>,
    registry: Rc<RefCell<ListenerRegistry>>,
}

impl std::fmt::Debug for HostWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostWindow")
            .field("height", &self.height.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl HostWindow {
    pub fn new(height: f32) -> Self {
        Self {
            height: Rc::new(Cell::new(height)),
            registry: Rc::new(RefCell::new(ListenerRegistry::default())),
        }
    }

    pub fn height(&self) -> f32 {
        self.height.get()
    }

    /// Records the new height and notifies every listener
    pub fn resize(&self, height: f32) {
        self.height.set(height);
        for (_, listener) in self.registry.borrow_mut().listeners.iter_mut() {
            listener(height);
        }
    }

    /// Installs `listener` until the returned subscription is dropped
    pub fn add_resize_listener(&self, listener: impl FnMut(f32) + 'static) -> ResizeSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));

        ResizeSubscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Removes its listener from the host window when dropped
#[derive(Debug)]
pub struct ResizeSubscription {
    registry: Weak<RefCell<ListenerRegistry>>,
    id: u64,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Keeps the surface square and sized to the host window.
///
/// Heights arrive through a resize listener and are applied by
/// [`ViewportController::apply`] on the next dispatch. Point coordinates are
/// never touched.
#[derive(Debug)]
pub struct ViewportController {
    chrome_allowance: f32,
    pending_height: Rc<Cell<Option<f32>>>,
    subscription: Option<ResizeSubscription>,
}

impl ViewportController {
    pub fn new(chrome_allowance: f32) -> Self {
        Self {
            chrome_allowance,
            pending_height: Rc::new(Cell::new(None)),
            subscription: None,
        }
    }

    /// Installs the resize listener and queues the mount-time measurement
    pub fn start(&mut self, host: &HostWindow) {
        let pending = Rc::clone(&self.pending_height);
        self.subscription = Some(host.add_resize_listener(move |height| pending.set(Some(height))));
        self.pending_height.set(Some(host.height()));
        log::debug!("Viewport attached at height {}", host.height());
    }

    /// Removes the resize listener. Dropping the controller does the same.
    pub fn stop(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("Viewport detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending_height.get().is_some()
    }

    /// Square side for a host height, 0 when the chrome does not fit
    pub fn side_for(&self, host_height: f32) -> u32 {
        let side = (host_height - self.chrome_allowance).floor();
        if side > 0.0 { side as u32 } else { 0 }
    }

    /// Resizes `surface` to the latest measurement, if any arrived.
    ///
    /// Returns true when a measurement was applied; the caller owes a redraw.
    pub fn apply(&mut self, surface: &mut Surface) -> bool {
        let Some(height) = self.pending_height.take() else {
            return false;
        };

        let side = self.side_for(height);
        log::debug!("Viewport height {} -> canvas {}x{}", height, side, side);
        surface.resize(side);
        true
    }
}
