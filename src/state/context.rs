//! The main context for the gradient editor, coordinating the point store,
//! the surface and the controllers that act on them.
//!
//! Every public operation runs to completion and ends with [`EditorContext::flush`]:
//! a pending viewport measurement is applied, and if the store announced any
//! change (or the surface was resized) the whole surface is redrawn exactly
//! once from the post-mutation state.
//!
//! # Example
//!
//! ```rust,no_run
//! use ino_gradient::{EditorConfig, EditorContext, HostWindow, InputEvent};
//!
//! let config = EditorConfig::default();
//! let mut editor = EditorContext::new(&config);
//! let host = HostWindow::new(532.0);
//! editor.attach(&host);
//!
//! let point = editor.add_point();
//! editor.change_color(point.id, "#FF8800").unwrap();
//! editor.handle_input(&InputEvent::down(point.x, point.y));
//! editor.handle_input(&InputEvent::moved(200.0, 200.0));
//! editor.handle_input(&InputEvent::up(200.0, 200.0));
//! ```
use std::path::PathBuf;

use rand::RngCore;

use crate::color::HexColor;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::event::RedrawScheduler;
use crate::export::{DirectoryTarget, ExportService, SaveTarget};
use crate::input::{DragState, InputController, InputEvent};
use crate::point::Point;
use crate::renderer::Renderer;
use crate::store::PointStore;
use crate::surface::Surface;
use crate::viewport::{HostWindow, ViewportController};

#[derive(Debug)]
pub struct EditorContext {
    store: PointStore,
    surface: Surface,
    renderer: Renderer,
    input: InputController,
    viewport: ViewportController,
    exporter: ExportService,
    redraw: RedrawScheduler,
    export_dir: PathBuf,
    frames_rendered: u64,
}

impl EditorContext {
    /// Editor with an entropy-seeded store and labelled handles
    pub fn new(config: &EditorConfig) -> Self {
        Self::from_parts(config, PointStore::new(config), Renderer::new(config))
    }

    /// Editor whose point placement draws from `rng`
    pub fn with_rng(config: &EditorConfig, rng: Box<dyn RngCore>) -> Self {
        Self::from_parts(
            config,
            PointStore::with_rng(config, rng),
            Renderer::new(config),
        )
    }

    /// Builds the context around an existing store and renderer.
    ///
    /// Seeds the starting points when the config asks for them and renders
    /// the first frame at the initial canvas size.
    pub fn from_parts(config: &EditorConfig, store: PointStore, renderer: Renderer) -> Self {
        let redraw = RedrawScheduler::new();
        store.subscribe(Box::new(redraw.clone()));

        let mut context = Self {
            store,
            surface: Surface::new(config.initial_canvas_size),
            renderer,
            input: InputController::new(config.handle_radius),
            viewport: ViewportController::new(config.chrome_allowance),
            exporter: ExportService::new(config.export_file_name.clone()),
            redraw,
            export_dir: config.export_dir.clone(),
            frames_rendered: 0,
        };

        if config.seed_initial_points {
            context.store.seed_initial_points();
        }
        context.redraw.request();
        context.flush();
        context
    }

    /// Starts tracking the host window size (mount)
    pub fn attach(&mut self, host: &HostWindow) {
        self.viewport.start(host);
        self.flush();
    }

    /// Stops tracking the host window size (teardown)
    pub fn detach(&mut self) {
        self.viewport.stop();
    }

    pub fn add_point(&mut self) -> Point {
        let point = self.store.add();
        self.flush();
        point
    }

    /// Removes the point(s) with `id`; absent ids are ignored
    pub fn remove_point(&mut self, id: u32) -> bool {
        let removed = self.store.remove(id);
        self.flush();
        removed
    }

    /// Recolors the point(s) with `id` from a hex string.
    ///
    /// A malformed color is rejected before anything changes; an absent id
    /// is a no-op that returns `Ok(false)`.
    pub fn change_color(&mut self, id: u32, color: &str) -> Result<bool> {
        let color: HexColor = color.parse()?;
        Ok(self.set_color(id, color))
    }

    pub fn set_color(&mut self, id: u32, color: HexColor) -> bool {
        let changed = self.store.set_color(id, color);
        self.flush();
        changed
    }

    /// Feeds one pointer event to the drag controller
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let moved = self.input.handle_event(event, &mut self.store);
        self.flush();
        moved
    }

    /// Exports a handle-free PNG to `target`, then restores the handles
    pub fn export_image(&mut self, target: &mut dyn SaveTarget) -> Result<bool> {
        self.flush();
        if self.surface.is_available() {
            self.frames_rendered += 2;
        }
        self.exporter
            .export(&self.renderer, &mut self.surface, self.store.all(), target)
    }

    /// Exports into the configured export directory
    pub fn export_to_dir(&mut self) -> Result<bool> {
        let mut target = DirectoryTarget::new(self.export_dir.clone());
        self.export_image(&mut target)
    }

    /// Applies pending resizes and redraws once if anything changed.
    ///
    /// Returns whether a frame was rendered.
    pub fn flush(&mut self) -> bool {
        let resized = self.viewport.apply(&mut self.surface);
        let changed = self.redraw.take();
        if !(resized || changed) {
            return false;
        }
        // The next resize to a usable side redraws anyway
        if !self.surface.is_available() {
            log::debug!("Redraw dropped: no surface");
            return false;
        }

        self.renderer.draw(&mut self.surface, self.store.all(), true);
        self.frames_rendered += 1;
        log::debug!(
            "Redrew {} points at {}px (frame {})",
            self.store.len(),
            self.surface.side(),
            self.frames_rendered
        );
        true
    }

    pub fn points(&self) -> &[Point] {
        self.store.all()
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn drag_state(&self) -> DragState {
        self.input.state()
    }

    pub fn is_attached(&self) -> bool {
        self.viewport.is_attached()
    }

    pub fn export_file_name(&self) -> &str {
        self.exporter.file_name()
    }

    /// Total full redraws performed, including the two an export makes
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
