use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::point::Point;
use crate::renderer::Renderer;
use crate::surface::Surface;

/// Where exported PNG bytes end up
pub trait SaveTarget {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes exports into a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Keeps exports in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    pub saved: Vec<(String, Vec<u8>)>,
}

impl SaveTarget for MemoryTarget {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<()> {
        self.saved.push((file_name.to_owned(), bytes.to_vec()));
        Ok(())
    }
}

/// Captures a handle-free frame as PNG under a fixed file name.
#[derive(Debug, Clone)]
pub struct ExportService {
    file_name: String,
}

impl ExportService {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Renders without handles, saves the PNG, then renders with handles again.
    ///
    /// Returns whether a file was produced. An unavailable surface produces
    /// nothing and is not an error. The interactive frame is restored even
    /// when encoding or saving fails; that failure is returned afterwards.
    pub fn export(
        &self,
        renderer: &Renderer,
        surface: &mut Surface,
        points: &[Point],
        target: &mut dyn SaveTarget,
    ) -> Result<bool> {
        if !surface.is_available() {
            log::debug!("Export skipped: no surface");
            return Ok(false);
        }

        renderer.draw(surface, points, false);
        let captured = self.capture(surface, target);
        renderer.draw(surface, points, true);

        if let Err(err) = &captured {
            log::error!("Export of {} failed: {}", self.file_name, err);
        }
        captured
    }

    fn capture(&self, surface: &Surface, target: &mut dyn SaveTarget) -> Result<bool> {
        let Some(bytes) = surface.encode_png()? else {
            return Ok(false);
        };
        target.save(&self.file_name, &bytes)?;
        log::info!("Exported {} ({}x{})", self.file_name, surface.side(), surface.side());
        Ok(true)
    }
}
