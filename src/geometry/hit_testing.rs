use egui::Pos2;

use crate::point::Point;

/// Radius of the grab disk drawn over every point
pub const HANDLE_RADIUS: f32 = 10.0;

/// Whether `pos` lands on the handle of `point`. The boundary itself is a miss.
pub fn is_on_handle(pos: Pos2, point: &Point, handle_radius: f32) -> bool {
    point.distance_to(pos) < handle_radius
}

/// Index of the first point, in collection order, whose handle contains `pos`.
///
/// Overlapping handles resolve to the earliest-created point, not the nearest.
pub fn hit_test(points: &[Point], pos: Pos2, handle_radius: f32) -> Option<usize> {
    points
        .iter()
        .position(|point| is_on_handle(pos, point, handle_radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;

    fn point_at(id: u32, x: f32, y: f32) -> Point {
        Point::new(id, x, y, 550.0, HexColor::BLACK)
    }

    #[test]
    fn inside_radius_hits() {
        let points = [point_at(1, 100.0, 100.0)];
        assert_eq!(hit_test(&points, Pos2::new(100.0, 100.0), HANDLE_RADIUS), Some(0));
        assert_eq!(hit_test(&points, Pos2::new(109.9, 100.0), HANDLE_RADIUS), Some(0));
        assert_eq!(hit_test(&points, Pos2::new(106.0, 107.9), HANDLE_RADIUS), Some(0));
    }

    #[test]
    fn boundary_and_beyond_miss() {
        let points = [point_at(1, 100.0, 100.0)];
        assert_eq!(hit_test(&points, Pos2::new(110.0, 100.0), HANDLE_RADIUS), None);
        assert_eq!(hit_test(&points, Pos2::new(106.0, 108.0), HANDLE_RADIUS), None);
        assert_eq!(hit_test(&points, Pos2::new(300.0, 300.0), HANDLE_RADIUS), None);
    }

    #[test]
    fn overlap_prefers_lowest_index_over_nearest() {
        let points = [point_at(1, 100.0, 100.0), point_at(2, 108.0, 100.0)];
        // Closer to the second point, still inside both handles
        assert_eq!(hit_test(&points, Pos2::new(107.0, 100.0), HANDLE_RADIUS), Some(0));
    }

    #[test]
    fn empty_collection_never_hits() {
        assert_eq!(hit_test(&[], Pos2::new(0.0, 0.0), HANDLE_RADIUS), None);
    }
}
