use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::color::HexColor;
use crate::config::{EditorConfig, IdPolicy, SpawnRegion};
use crate::event::{EventBus, EventHandler, StoreEvent};
use crate::point::Point;

/// Where the three starting lights are scattered, in draw order.
const INITIAL_POINTS: [(HexColor, SpawnRegion); 3] = [
    (HexColor::RED, SpawnRegion::new([50.0, 50.0], [300.0, 100.0])),
    (HexColor::GREEN, SpawnRegion::new([150.0, 150.0], [300.0, 100.0])),
    (HexColor::BLUE, SpawnRegion::new([250.0, 300.0], [300.0, 100.0])),
];

/// Owns the ordered point collection.
///
/// Collection order is draw order: the last point is composited on top.
/// Every successful mutation is announced on the store's event bus; lookups
/// that miss are silent no-ops.
pub struct PointStore {
    points: Vec<Point>,
    next_id: u32,
    id_policy: IdPolicy,
    point_radius: f32,
    spawn_region: SpawnRegion,
    rng: Box<dyn RngCore>,
    event_bus: EventBus,
}

impl std::fmt::Debug for PointStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointStore")
            .field("points", &self.points)
            .field("next_id", &self.next_id)
            .field("id_policy", &self.id_policy)
            .field("event_bus", &self.event_bus)
            .finish_non_exhaustive()
    }
}

impl PointStore {
    /// Creates an empty store seeded from system entropy
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_rng(config, Box::new(StdRng::from_entropy()))
    }

    /// Creates an empty store drawing positions from `rng`
    pub fn with_rng(config: &EditorConfig, rng: Box<dyn RngCore>) -> Self {
        Self {
            points: Vec::new(),
            next_id: 1,
            id_policy: config.id_policy,
            point_radius: config.point_radius,
            spawn_region: config.spawn_region,
            rng,
            event_bus: EventBus::new(),
        }
    }

    /// Appends the red, green and blue starting lights
    pub fn seed_initial_points(&mut self) {
        for (color, region) in INITIAL_POINTS {
            self.spawn(color, region);
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    pub fn all(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point carrying `id`, in draw order
    pub fn get(&self, id: u32) -> Option<&Point> {
        self.points.iter().find(|point| point.id == id)
    }

    /// Appends a black point at a random spot in the spawn region.
    pub fn add(&mut self) -> Point {
        self.spawn(HexColor::BLACK, self.spawn_region)
    }

    /// Removes every point carrying `id`; returns whether anything was removed.
    /// Remaining points keep their ids and relative order.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.points.len();
        self.points.retain(|point| point.id != id);
        let count = before - self.points.len();
        if count == 0 {
            log::debug!("remove: no point with id {}", id);
            return false;
        }

        log::info!("Removed point {} ({} left)", id, self.points.len());
        self.event_bus.emit(StoreEvent::Removed { id, count });
        true
    }

    pub fn set_color(&mut self, id: u32, color: HexColor) -> bool {
        let mut found = false;
        for point in self.points.iter_mut().filter(|point| point.id == id) {
            point.color = color;
            found = true;
        }

        if found {
            self.event_bus.emit(StoreEvent::Recolored { id });
        } else {
            log::debug!("set_color: no point with id {}", id);
        }
        found
    }

    /// Moves the point at collection `index`. Drags address points by the
    /// index resolved at press time, not by id.
    pub fn set_position(&mut self, index: usize, x: f32, y: f32) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            log::debug!("set_position: index {} out of range", index);
            return false;
        };

        point.x = x;
        point.y = y;
        self.event_bus.emit(StoreEvent::Moved { index, x, y });
        true
    }

    fn spawn(&mut self, color: HexColor, region: SpawnRegion) -> Point {
        let id = self.allocate_id();
        let x = region.origin[0] + self.rng.r#gen::<f32>() * region.extent[0];
        let y = region.origin[1] + self.rng.r#gen::<f32>() * region.extent[1];
        let point = Point::new(id, x, y, self.point_radius, color);

        self.points.push(point.clone());
        log::info!("Added point {} at ({:.1}, {:.1})", id, x, y);
        self.event_bus.emit(StoreEvent::Added {
            id,
            index: self.points.len() - 1,
        });
        point
    }

    fn allocate_id(&mut self) -> u32 {
        match self.id_policy {
            IdPolicy::Monotonic => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
            IdPolicy::CollectionSize => self.points.len() as u32 + 1,
        }
    }
}
