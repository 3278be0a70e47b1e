use tiny_skia::{
    Color, FillRule, GradientStop, Paint, PathBuilder, Pixmap, PixmapPaint, RadialGradient,
    SpreadMode, Stroke, Transform,
};

use crate::config::EditorConfig;
use crate::point::Point;
use crate::surface::Surface;

/// egui default fonts tried, in order, for the handle labels
const LABEL_FONT_CANDIDATES: [&str; 2] = ["Ubuntu-Light", "Hack"];

/// Paints the point set onto a [`Surface`].
///
/// Every call is a full redraw in two passes: all gradients in collection
/// order, then (optionally) all handles. Handles therefore always sit above
/// every gradient regardless of index.
pub struct Renderer {
    inner_radius: f32,
    handle_radius: f32,
    outline_width: f32,
    label_size: f32,
    label_font: Option<fontdue::Font>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("inner_radius", &self.inner_radius)
            .field("handle_radius", &self.handle_radius)
            .field("outline_width", &self.outline_width)
            .field("label_size", &self.label_size)
            .field("has_label_font", &self.label_font.is_some())
            .finish()
    }
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            label_font: load_label_font(),
            ..Self::without_labels(config)
        }
    }

    /// A renderer that draws handle disks but no id text
    pub fn without_labels(config: &EditorConfig) -> Self {
        Self {
            inner_radius: config.gradient_inner_radius,
            handle_radius: config.handle_radius,
            outline_width: config.handle_outline_width,
            label_size: config.label_size,
            label_font: None,
        }
    }

    pub fn has_labels(&self) -> bool {
        self.label_font.is_some()
    }

    /// Clears `surface` and repaints every point. No-op when the surface is
    /// unavailable.
    pub fn draw(&self, surface: &mut Surface, points: &[Point], show_handles: bool) {
        let Some(pixmap) = surface.pixmap_mut() else {
            log::debug!("Skipping draw: no surface");
            return;
        };

        pixmap.fill(Color::TRANSPARENT);

        for point in points {
            self.draw_gradient(pixmap, point);
        }

        if show_handles {
            for point in points {
                self.draw_handle(pixmap, point);
            }
        }
    }

    fn draw_gradient(&self, pixmap: &mut Pixmap, point: &Point) {
        if point.radius.is_nan() || point.radius <= 0.0 {
            return;
        }

        // Solid out to the inner radius, then a linear fade. The outer stop
        // keeps the hue at zero alpha so the ramp never darkens.
        let inner = (self.inner_radius / point.radius).clamp(0.0, 1.0);
        let stops = vec![
            GradientStop::new(0.0, point.color.to_skia(255)),
            GradientStop::new(inner, point.color.to_skia(255)),
            GradientStop::new(1.0, point.color.to_skia(0)),
        ];

        let center = tiny_skia::Point::from_xy(point.x, point.y);
        let Some(shader) = RadialGradient::new(
            center,
            center,
            point.radius,
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        ) else {
            return;
        };
        let Some(path) = PathBuilder::from_circle(point.x, point.y, point.radius) else {
            return;
        };

        let paint = Paint {
            shader,
            anti_alias: true,
            ..Paint::default()
        };
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn draw_handle(&self, pixmap: &mut Pixmap, point: &Point) {
        let Some(disk) = PathBuilder::from_circle(point.x, point.y, self.handle_radius) else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color_rgba8(0, 0, 0, 255);
        pixmap.fill_path(&disk, &paint, FillRule::Winding, Transform::identity(), None);

        paint.set_color_rgba8(255, 255, 255, 255);
        let outline = Stroke {
            width: self.outline_width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&disk, &paint, &outline, Transform::identity(), None);

        if let Some(font) = &self.label_font {
            self.draw_label(pixmap, font, &point.id.to_string(), point.x, point.y);
        }
    }

    /// White text centered on (cx, cy), both horizontally and on the em box
    fn draw_label(&self, pixmap: &mut Pixmap, font: &fontdue::Font, text: &str, cx: f32, cy: f32) {
        let size = self.label_size;
        let glyphs: Vec<_> = text.chars().map(|c| font.rasterize(c, size)).collect();
        let width: f32 = glyphs.iter().map(|(metrics, _)| metrics.advance_width).sum();

        let (ascent, descent) = font
            .horizontal_line_metrics(size)
            .map_or((size * 0.8, -size * 0.2), |line| (line.ascent, line.descent));
        let baseline = cy + (ascent + descent) / 2.0;

        let mut pen = cx - width / 2.0;
        for (metrics, coverage) in &glyphs {
            if let Some(glyph) = coverage_pixmap(metrics.width, metrics.height, coverage) {
                let left = (pen + metrics.xmin as f32).round() as i32;
                let top = (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i32;
                pixmap.draw_pixmap(
                    left,
                    top,
                    glyph.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    None,
                );
            }
            pen += metrics.advance_width;
        }
    }
}

/// White glyph whose alpha is the rasterized coverage (premultiplied, so
/// every channel equals the coverage)
fn coverage_pixmap(width: usize, height: usize, coverage: &[u8]) -> Option<Pixmap> {
    let mut glyph = Pixmap::new(width as u32, height as u32)?;
    for (pixel, &alpha) in glyph.data_mut().chunks_exact_mut(4).zip(coverage) {
        pixel.copy_from_slice(&[alpha, alpha, alpha, alpha]);
    }
    Some(glyph)
}

fn load_label_font() -> Option<fontdue::Font> {
    let definitions = egui::FontDefinitions::default();
    let data = LABEL_FONT_CANDIDATES
        .iter()
        .find_map(|name| definitions.font_data.get(*name));

    let Some(data) = data else {
        log::warn!("No default font available; handle labels disabled");
        return None;
    };

    match fontdue::Font::from_bytes(&data.font[..], fontdue::FontSettings::default()) {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Failed to load label font: {}; handle labels disabled", err);
            None
        }
    }
}
