use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use tiny_skia::Pixmap;

use crate::error::Result;

/// The square pixel buffer the renderer paints into.
///
/// A zero side (or an allocation tiny-skia refuses) leaves the surface
/// unavailable; drawing to or exporting from it is then a no-op.
#[derive(Debug, Clone)]
pub struct Surface {
    pixmap: Option<Pixmap>,
}

impl Surface {
    pub fn new(side: u32) -> Self {
        Self {
            pixmap: Pixmap::new(side, side),
        }
    }

    pub fn unavailable() -> Self {
        Self { pixmap: None }
    }

    /// Reallocates to `side × side`. Previous contents are discarded.
    pub fn resize(&mut self, side: u32) {
        if self.side() == side && self.pixmap.is_some() {
            return;
        }
        self.pixmap = Pixmap::new(side, side);
        if self.pixmap.is_none() {
            log::debug!("Surface unavailable at side {}", side);
        }
    }

    pub fn is_available(&self) -> bool {
        self.pixmap.is_some()
    }

    /// Side length in pixels, 0 when unavailable
    pub fn side(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, Pixmap::width)
    }

    pub fn pixmap_mut(&mut self) -> Option<&mut Pixmap> {
        self.pixmap.as_mut()
    }

    /// Straight-alpha RGBA of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Copy for uploading as an egui texture
    pub fn to_color_image(&self) -> Option<egui::ColorImage> {
        let pixmap = self.pixmap.as_ref()?;
        let size = [pixmap.width() as usize, pixmap.height() as usize];
        Some(egui::ColorImage::from_rgba_premultiplied(size, pixmap.data()))
    }

    /// PNG bytes of the current contents, `None` when the surface is unavailable
    pub fn encode_png(&self) -> Result<Option<Vec<u8>>> {
        let Some(pixmap) = self.pixmap.as_ref() else {
            return Ok(None);
        };

        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for pixel in pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            &rgba,
            pixmap.width(),
            pixmap.height(),
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(Some(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_side_is_unavailable() {
        let mut surface = Surface::new(0);
        assert!(!surface.is_available());
        assert_eq!(surface.side(), 0);
        assert!(surface.encode_png().unwrap().is_none());
        assert!(surface.to_color_image().is_none());

        surface.resize(64);
        assert!(surface.is_available());
        assert_eq!(surface.side(), 64);
    }

    #[test]
    fn png_round_trips_dimensions() {
        let surface = Surface::new(12);
        let bytes = surface.encode_png().unwrap().unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (12, 12));
    }
}
