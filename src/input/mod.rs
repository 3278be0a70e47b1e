use egui::{Context, PointerButton, Pos2, Rect};

mod drag;
pub use drag::{DragState, InputController};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position in canvas-local pixels
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

impl InputLocation {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Pos2::new(x, y),
            is_in_canvas: true,
        }
    }
}

/// Pointer events the drag controller understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Pointer moved, with or without the button held
    PointerMove { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
}

impl InputEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self::PointerDown { location: InputLocation::new(x, y) }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::PointerMove { location: InputLocation::new(x, y) }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::PointerUp { location: InputLocation::new(x, y) }
    }
}

/// Converts raw egui pointer input into canvas-local [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the on-screen canvas rectangle (e.g. after a resize)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Screen position to canvas-local location
    pub fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Collects this frame's pointer activity, in the order move, press, release.
    ///
    /// Presses outside the canvas are dropped; moves and releases are always
    /// forwarded so a drag that leaves the canvas still tracks and still ends.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                    });
                }
            }

            let pos = hover.or(self.last_pointer_pos);
            if let Some(pos) = pos {
                let location = self.make_location(pos);
                if input.pointer.button_pressed(PointerButton::Primary) && location.is_in_canvas {
                    events.push(InputEvent::PointerDown { location });
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    events.push(InputEvent::PointerUp { location });
                }
            }

            if hover.is_some() {
                self.last_pointer_pos = hover;
            }
        });

        events
    }
}
