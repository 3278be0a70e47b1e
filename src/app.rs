use egui::{Color32, Rect, TextureHandle, TextureOptions};

use crate::color::HexColor;
use crate::config::EditorConfig;
use crate::input::InputHandler;
use crate::state::EditorContext;
use crate::viewport::HostWindow;

/// eframe shell around [`EditorContext`]: a control column on the right and
/// the canvas in the central panel.
///
/// Point sets are not persisted; every launch starts from the config.
pub struct GradientApp {
    editor: EditorContext,
    host: HostWindow,
    input: InputHandler,
    texture: Option<TextureHandle>,
    uploaded_frame: Option<u64>,
    status: Option<String>,
}

impl GradientApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        Self::with_config(config)
    }

    /// Mounts at the configured window height.
    ///
    /// egui has not measured the window yet at this point; the real height
    /// arrives with the first frame and resizes the host from there.
    pub fn with_config(config: EditorConfig) -> Self {
        let host = HostWindow::new(config.initial_canvas_size as f32 + config.chrome_allowance);
        let mut editor = EditorContext::new(&config);
        editor.attach(&host);

        Self {
            editor,
            host,
            input: InputHandler::new(Rect::NOTHING),
            texture: None,
            uploaded_frame: None,
            status: None,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    /// One frame of UI: track the window height, settle the editor, draw the panels
    pub fn show(&mut self, ctx: &egui::Context) {
        let height = ctx.screen_rect().height();
        if height != self.host.height() {
            self.host.resize(height);
        }
        self.editor.flush();

        self.controls_panel(ctx);
        self.canvas_panel(ctx);
    }

    fn controls_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("dots_control")
            .resizable(false)
            .default_width(140.0)
            .show(ctx, |ui| {
                let mut recolored = None;
                let mut removed = None;

                for (index, point) in self.editor.points().iter().enumerate() {
                    ui.push_id(index, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(format!("{}:", point.id));
                            let mut rgb = point.color.rgb();
                            if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
                                let [r, g, b] = rgb;
                                recolored = Some((point.id, HexColor::from_rgb(r, g, b)));
                            }
                            if ui.button("-").clicked() {
                                removed = Some(point.id);
                            }
                        });
                    });
                }

                if let Some((id, color)) = recolored {
                    self.editor.set_color(id, color);
                }
                if let Some(id) = removed {
                    self.editor.remove_point(id);
                }

                if ui.button("+").clicked() {
                    self.editor.add_point();
                }

                ui.add_space(8.0);
                let download = egui::Button::new("Download");
                if ui.add_sized([ui.available_width(), 24.0], download).clicked() {
                    self.download();
                }

                if let Some(status) = &self.status {
                    ui.small(status.as_str());
                }
            });
    }

    fn canvas_panel(&mut self, ctx: &egui::Context) {
        // Input is mapped with last frame's canvas rect, before repainting
        for event in self.input.process_input(ctx) {
            if self.editor.handle_input(&event) {
                ctx.request_repaint();
            }
        }

        self.sync_texture(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let side = self.editor.surface().side() as f32;
            let (rect, _response) =
                ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click_and_drag());
            self.input.set_canvas_rect(rect);

            let painter = ui.painter();
            painter.rect_filled(rect, 8.0, Color32::WHITE);
            if let Some(texture) = &self.texture {
                let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
        });
    }

    /// Re-uploads the surface when the editor rendered a new frame
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let frame = self.editor.frames_rendered();
        if self.uploaded_frame == Some(frame) {
            return;
        }
        self.uploaded_frame = Some(frame);

        let Some(image) = self.editor.surface().to_color_image() else {
            self.texture = None;
            return;
        };
        if let Some(texture) = &mut self.texture {
            texture.set(image, TextureOptions::LINEAR);
        } else {
            self.texture = Some(ctx.load_texture("gradient_canvas", image, TextureOptions::LINEAR));
        }
    }

    fn download(&mut self) {
        let file_name = self.editor.export_file_name().to_owned();
        self.status = match self.editor.export_to_dir() {
            Ok(true) => Some(format!("Saved {}", file_name)),
            Ok(false) => None,
            Err(err) => {
                log::warn!("Download failed: {}", err);
                Some(format!("Could not save {}", file_name))
            }
        };
    }
}

impl eframe::App for GradientApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_of_height(height: f32) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(900.0, height))),
            ..Default::default()
        }
    }

    #[test]
    fn mount_stays_at_configured_size_until_first_frame() {
        let config = EditorConfig::default();
        let ctx = egui::Context::default();
        let mut app = GradientApp::with_config(config.clone());

        assert!(app.editor().is_attached());
        assert_eq!(app.editor().surface().side(), config.initial_canvas_size);

        let _ = ctx.run(window_of_height(632.0), |ctx| app.show(ctx));
        assert_eq!(app.editor().surface().side(), 600);
        assert!(app.texture.is_some());

        let _ = ctx.run(window_of_height(332.0), |ctx| app.show(ctx));
        assert_eq!(app.editor().surface().side(), 300);
    }
}
