/// Mutations reported by the point store.
///
/// Positions are reported by collection index because that is what drags
/// address; everything else is reported by id.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Added { id: u32, index: usize },
    Removed { id: u32, count: usize },
    Recolored { id: u32 },
    Moved { index: usize, x: f32, y: f32 },
}
