//! Pointer-driven drag state machine.
//!
//! ```text
//!            down on a handle
//!   ┌──────┐ ───────────────► ┌──────────────┐ ──┐
//!   │ Idle │                  │ Dragging(K)  │   │ move: point K follows
//!   └──────┘ ◄─────────────── └──────────────┘ ◄─┘
//!                   up
//! ```
//!
//! A press that misses every handle leaves the machine idle. There is no
//! terminal state; the controller lives as long as the canvas.

use crate::geometry::{hit_test, HANDLE_RADIUS};
use crate::store::PointStore;

use super::InputEvent;

/// The drag session, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Point at this collection index follows the pointer
    Dragging { index: usize },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn dragging_index(&self) -> Option<usize> {
        match self {
            DragState::Dragging { index } => Some(*index),
            DragState::Idle => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputController {
    state: DragState,
    handle_radius: f32,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(HANDLE_RADIUS)
    }
}

impl InputController {
    pub fn new(handle_radius: f32) -> Self {
        Self {
            state: DragState::Idle,
            handle_radius,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Feeds one pointer event through the state machine.
    ///
    /// Returns true when the event moved a point.
    pub fn handle_event(&mut self, event: &InputEvent, store: &mut PointStore) -> bool {
        match (self.state, event) {
            (DragState::Idle, InputEvent::PointerDown { location }) => {
                if let Some(index) = hit_test(store.all(), location.position, self.handle_radius) {
                    log::debug!("Drag started on index {} at {:?}", index, location.position);
                    self.state = DragState::Dragging { index };
                }
                false
            }
            (DragState::Dragging { index }, InputEvent::PointerMove { location }) => {
                store.set_position(index, location.position.x, location.position.y)
            }
            (DragState::Dragging { index }, InputEvent::PointerUp { .. }) => {
                log::debug!("Drag ended on index {}", index);
                self.state = DragState::Idle;
                false
            }
            // Moves and releases while idle, and presses during a drag, change nothing
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store_with_points(positions: &[(f32, f32)]) -> PointStore {
        let mut store =
            PointStore::with_rng(&EditorConfig::default(), Box::new(StdRng::seed_from_u64(7)));
        for (index, (x, y)) in positions.iter().enumerate() {
            store.add();
            store.set_position(index, *x, *y);
        }
        store
    }

    #[test]
    fn starts_idle() {
        assert_eq!(InputController::default().state(), DragState::Idle);
    }

    #[test]
    fn miss_stays_idle() {
        let mut store = store_with_points(&[(100.0, 100.0)]);
        let mut input = InputController::default();

        input.handle_event(&InputEvent::down(130.0, 100.0), &mut store);
        assert!(input.state().is_idle());

        assert!(!input.handle_event(&InputEvent::moved(140.0, 140.0), &mut store));
        assert_eq!(store.all()[0].pos(), egui::pos2(100.0, 100.0));
    }

    #[test]
    fn press_move_release_cycle() {
        let mut store = store_with_points(&[(100.0, 100.0), (300.0, 300.0)]);
        let mut input = InputController::default();

        input.handle_event(&InputEvent::down(302.0, 298.0), &mut store);
        assert_eq!(input.state(), DragState::Dragging { index: 1 });

        assert!(input.handle_event(&InputEvent::moved(-20.0, 900.0), &mut store));
        assert_eq!(store.all()[1].pos(), egui::pos2(-20.0, 900.0));

        input.handle_event(&InputEvent::up(-20.0, 900.0), &mut store);
        assert!(input.state().is_idle());
    }

    #[test]
    fn second_press_during_drag_is_ignored() {
        let mut store = store_with_points(&[(100.0, 100.0), (300.0, 300.0)]);
        let mut input = InputController::default();

        input.handle_event(&InputEvent::down(100.0, 100.0), &mut store);
        input.handle_event(&InputEvent::down(300.0, 300.0), &mut store);
        assert_eq!(input.state().dragging_index(), Some(0));
    }
}
