use crate::draw::{BrushError, SettingValue, SurfaceError};
use crate::export::{self, FileSaveConfig};
use log::{debug, info};
use std::path::PathBuf;

use super::Whiteboard;

impl Whiteboard {
    /// Sets the brush width from a number or numeric text.
    ///
    /// Invalid input (`"abc"`, zero, negative, non-finite) leaves the brush
    /// unchanged. The returned error is informational; callers treating the
    /// setter as fire-and-forget can drop it.
    pub fn set_brush_size(&mut self, size: impl Into<SettingValue>) -> Result<(), BrushError> {
        let result = self.brush.set_size(size);
        self.log_brush_update("size", result.as_ref().err());
        result
    }

    /// Sets the brush color from a palette name or `#rgb`/`#rrggbb` text.
    pub fn set_brush_color(&mut self, color: impl Into<SettingValue>) -> Result<(), BrushError> {
        let result = self.brush.set_color(color);
        self.log_brush_update("color", result.as_ref().err());
        result
    }

    /// Sets the line cap (`butt`, `round`, `square`).
    pub fn set_line_cap(&mut self, cap: impl Into<SettingValue>) -> Result<(), BrushError> {
        let result = self.brush.set_cap(cap);
        self.log_brush_update("line cap", result.as_ref().err());
        result
    }

    /// Sets the line join (`miter`, `round`, `bevel`).
    pub fn set_line_join(&mut self, join: impl Into<SettingValue>) -> Result<(), BrushError> {
        let result = self.brush.set_join(join);
        self.log_brush_update("line join", result.as_ref().err());
        result
    }

    /// Toggles antialiased ink for subsequent redraws.
    pub fn set_smoothing(&mut self, enabled: bool) {
        self.brush.smoothing = enabled;
        debug!("Brush smoothing {}", if enabled { "on" } else { "off" });
    }

    fn log_brush_update(&self, field: &str, error: Option<&BrushError>) {
        match error {
            Some(err) => debug!("Ignoring brush {field} update: {err}"),
            None => debug!(
                "Brush now {:.1}px {:?}, cap {}, join {}",
                self.brush.width, self.brush.color, self.brush.cap, self.brush.join
            ),
        }
    }

    /// Encodes the board as PNG.
    ///
    /// Only committed ink is included; the part of a stroke still on the
    /// ghost is not.
    pub fn export_snapshot(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surfaces.export_png()
    }

    /// Board snapshot as a `data:image/png;base64,...` URI.
    pub fn export_data_url(&self) -> Result<String, SurfaceError> {
        self.surfaces.export_data_url()
    }

    /// Writes the board snapshot to a timestamped file and returns its path.
    pub fn save_snapshot(&self, config: &FileSaveConfig) -> Result<PathBuf, SurfaceError> {
        let png = self.export_snapshot()?;
        let path = export::save_snapshot(&png, config)?;
        info!("Board snapshot written to {}", path.display());
        Ok(path)
    }
}
