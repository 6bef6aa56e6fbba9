//! Rendering primitives (Cairo-based).
//!
//! This module defines the drawing side of the widget:
//! - [`Color`] and [`BrushConfig`]: ink style read on every redraw
//! - [`StrokeGeometry`]: quadratic-through-midpoints smoothing of samples
//! - [`Compositor`]: the board and ghost surfaces plus commit/export
//! - Rendering functions for Cairo-based output

pub mod brush;
pub mod color;
pub mod curve;
pub mod point;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use brush::{BrushConfig, BrushError, LineCap, LineJoin, SettingValue};
pub use color::Color;
pub use curve::{QuadSegment, StrokeGeometry};
pub use point::Point;
pub use render::{clear_surface, render_geometry, render_stroke};
pub use surface::{Compositor, PixelSnapshot, SurfaceError};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
