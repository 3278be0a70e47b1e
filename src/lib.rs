#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod geometry;
pub mod input;
pub mod point;
pub mod renderer;
pub mod state;
pub mod store;
pub mod surface;
pub mod viewport;

pub use app::GradientApp;
pub use color::HexColor;
pub use config::{EditorConfig, IdPolicy, SpawnRegion};
pub use error::{GradientError, Result};
pub use export::{DirectoryTarget, ExportService, MemoryTarget, SaveTarget};
pub use input::{DragState, InputController, InputEvent, InputLocation};
pub use point::Point;
pub use renderer::Renderer;
pub use state::EditorContext;
pub use store::PointStore;
pub use surface::Surface;
pub use viewport::{HostWindow, ViewportController};
