use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// One gradient light source.
///
/// Coordinates are absolute canvas pixels; they are never rescaled when the
/// surface changes size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    /// Gradient extent in pixels, fixed at creation
    pub radius: f32,
    /// Inner gradient stop; the outer stop is always fully transparent
    pub color: HexColor,
}

impl Point {
    pub fn new(id: u32, x: f32, y: f32, radius: f32, color: HexColor) -> Self {
        Self { id, x, y, radius, color }
    }

    pub fn pos(&self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    pub fn distance_to(&self, pos: egui::Pos2) -> f32 {
        self.pos().distance(pos)
    }
}
