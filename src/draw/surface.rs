//! Board and ghost raster surfaces.
//!
//! The board holds committed ink and is the only surface ever exported. The
//! ghost is a transparent preview layer that is repainted on every sample and
//! flattened into the board when a stroke ends.

use super::color::Color;
use super::render::{clear_surface, render_board_background};
use base64::Engine;
use cairo::{Context, Format, ImageSurface};
use log::{debug, warn};
use thiserror::Error;

/// Largest edge Cairo image surfaces accept.
pub const MAX_SURFACE_EDGE: i32 = 32_767;

/// Errors raised while creating, reading or encoding surfaces.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface data is still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Copy of a surface's ARGB32 pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSnapshot {
    pub width: i32,
    pub height: i32,
    pub stride: i32,
    pub data: Vec<u8>,
}

impl PixelSnapshot {
    /// Premultiplied `[a, r, g, b]` at `(x, y)`, or `None` outside the surface.
    pub fn argb(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let offset = pixel_offset(x, y, self.stride)?;
        let bytes: [u8; 4] = self.data.get(offset..offset.checked_add(4)?)?.try_into().ok()?;
        let pixel = u32::from_ne_bytes(bytes);
        Some([
            (pixel >> 24) as u8,
            (pixel >> 16) as u8,
            (pixel >> 8) as u8,
            pixel as u8,
        ])
    }

    pub fn alpha(&self, x: i32, y: i32) -> u8 {
        self.argb(x, y).map_or(0, |[a, ..]| a)
    }

    /// True when every pixel is fully transparent.
    pub fn is_clear(&self) -> bool {
        self.data.iter().all(|byte| *byte == 0)
    }
}

/// Byte offset of the ARGB32 pixel at `(x, y)`, computed without `i32` overflow.
fn pixel_offset(x: i32, y: i32, stride: i32) -> Option<usize> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    let stride = usize::try_from(stride).ok()?;
    y.checked_mul(stride)?.checked_add(x.checked_mul(4)?)
}

/// Owns the board and ghost surfaces and moves ink between them.
pub struct Compositor {
    board: ImageSurface,
    ghost: ImageSurface,
    width: i32,
    height: i32,
    fill: Color,
    /// Number of times ghost content has been flattened into the board
    flush_count: usize,
}

impl Compositor {
    /// Creates both surfaces and fills the board with `fill`.
    pub fn new(width: i32, height: i32, fill: Color) -> Result<Self, SurfaceError> {
        if !(1..=MAX_SURFACE_EDGE).contains(&width) || !(1..=MAX_SURFACE_EDGE).contains(&height) {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let board = ImageSurface::create(Format::ARgb32, width, height)?;
        let ghost = ImageSurface::create(Format::ARgb32, width, height)?;

        {
            let ctx = Context::new(&board)?;
            render_board_background(&ctx, fill);
        }

        debug!("Created {width}x{height} board and ghost surfaces");

        Ok(Self {
            board,
            ghost,
            width,
            height,
            fill,
            flush_count: 0,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Background color the board was initialised with.
    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Runs `draw` against a fresh context on the ghost surface.
    ///
    /// Context creation failures are logged and the draw is skipped.
    pub fn draw_ghost(&self, draw: impl FnOnce(&Context)) {
        match Context::new(&self.ghost) {
            Ok(ctx) => draw(&ctx),
            Err(err) => warn!("Failed to create ghost context: {err}"),
        }
    }

    /// Paints the ghost onto the board at the origin (source-over), leaving
    /// the ghost as it is.
    pub fn flatten(&mut self) {
        let ctx = match Context::new(&self.board) {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!("Failed to create board context: {err}");
                return;
            }
        };

        if let Err(err) = ctx.set_source_surface(&self.ghost, 0.0, 0.0) {
            warn!("Failed to use ghost as paint source: {err}");
            return;
        }
        let _ = ctx.paint();

        self.flush_count += 1;
        debug!("Flattened ghost into board (flush #{})", self.flush_count);
    }

    /// Flattens the ghost into the board, then clears the ghost.
    pub fn commit(&mut self) {
        self.flatten();
        self.clear_ghost();
    }

    /// Erases the ghost; the board is untouched.
    pub fn clear_ghost(&mut self) {
        self.draw_ghost(clear_surface);
    }

    /// Encodes the board (never the ghost) as PNG bytes.
    pub fn export_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.board.flush();
        let mut bytes = Vec::new();
        self.board.write_to_png(&mut bytes)?;
        Ok(bytes)
    }

    /// Board PNG wrapped in a `data:image/png;base64,` URI.
    pub fn export_data_url(&self) -> Result<String, SurfaceError> {
        let png = self.export_png()?;
        Ok(format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(png)
        ))
    }

    pub fn board_pixels(&mut self) -> Result<PixelSnapshot, SurfaceError> {
        snapshot(&mut self.board)
    }

    pub fn ghost_pixels(&mut self) -> Result<PixelSnapshot, SurfaceError> {
        snapshot(&mut self.ghost)
    }
}

fn snapshot(surface: &mut ImageSurface) -> Result<PixelSnapshot, SurfaceError> {
    surface.flush();
    let width = surface.width();
    let height = surface.height();
    let stride = surface.stride();
    let data = surface.data()?.to_vec();
    Ok(PixelSnapshot {
        width,
        height,
        stride,
        data,
    })
}
