//! Stroke state machine and whiteboard session state.

use crate::config::Config;
use crate::draw::{BrushConfig, Color, Compositor, Point, SurfaceError, WHITE, render_stroke};
use crate::input::buffer::{PointBuffer, TrimPolicy};
use crate::util;
use log::debug;

/// Whether a stroke is being sampled.
///
/// Moves are only recorded while `Active`; everything else about a stroke
/// lives in the point buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    /// Not drawing - pointer moves are ignored
    #[default]
    Idle,
    /// Pointer is down and samples are being recorded
    Active,
}

impl StrokeState {
    pub fn is_active(self) -> bool {
        matches!(self, StrokeState::Active)
    }
}

/// Construction parameters for a [`Whiteboard`].
#[derive(Debug, Clone)]
pub struct WhiteboardOptions {
    /// Surface width in pixels
    pub width: i32,
    /// Surface height in pixels
    pub height: i32,
    /// Board background painted once at creation
    pub board_fill: Color,
    /// Initial brush style
    pub brush: BrushConfig,
    /// Long-stroke buffer trimming; clamped to a valid policy on construction
    pub trim: TrimPolicy,
}

impl Default for WhiteboardOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            board_fill: WHITE,
            brush: BrushConfig::default(),
            trim: TrimPolicy::default(),
        }
    }
}

impl WhiteboardOptions {
    /// Builds options from a loaded (and already validated) configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.board.width,
            height: config.board.height,
            board_fill: config.board.fill.to_color(),
            brush: config.drawing.brush(),
            trim: config.sampler.trim_policy(),
        }
    }
}

/// One drawing widget: board and ghost surfaces, brush, and stroke sampler.
///
/// Every handler takes `&mut self`, so events are processed strictly one at a
/// time in the order the host delivers them. Independent instances share
/// nothing.
pub struct Whiteboard {
    /// Board and ghost surfaces
    pub(super) surfaces: Compositor,
    /// Current brush, read on every redraw
    pub(super) brush: BrushConfig,
    /// Samples of the stroke in progress
    pub(super) buffer: PointBuffer,
    /// Idle or sampling
    pub(super) state: StrokeState,
    /// Most recent accepted pointer position
    pub(super) last_pointer: Option<Point>,
}

impl Whiteboard {
    /// Creates the surfaces and an idle sampler.
    pub fn new(options: WhiteboardOptions) -> Result<Self, SurfaceError> {
        let surfaces = Compositor::new(options.width, options.height, options.board_fill)?;
        let buffer = PointBuffer::new(options.trim);
        let trim = buffer.policy();

        debug!(
            "Whiteboard ready: {}x{}, brush {} {:.1}px, trim {}→{}",
            options.width,
            options.height,
            util::color_to_name(&options.brush.color),
            options.brush.width,
            trim.threshold,
            trim.keep
        );

        Ok(Self {
            surfaces,
            brush: options.brush,
            buffer,
            state: StrokeState::Idle,
            last_pointer: None,
        })
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    pub fn buffer(&self) -> &PointBuffer {
        &self.buffer
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    pub fn compositor(&self) -> &Compositor {
        &self.surfaces
    }

    /// Mutable access for pixel inspection; drawing goes through the handlers.
    pub fn compositor_mut(&mut self) -> &mut Compositor {
        &mut self.surfaces
    }

    /// Clamps a host sample into the surface, dropping non-finite input.
    pub(super) fn sample(&self, x: f64, y: f64) -> Option<Point> {
        let point = util::clamp_to_surface(x, y, self.surfaces.width(), self.surfaces.height());
        if point.is_none() {
            debug!("Dropping non-finite pointer sample ({x}, {y})");
        }
        point
    }

    /// Repaints the ghost from the current buffer.
    pub(super) fn redraw_ghost(&self) {
        if self.buffer.is_empty() {
            return;
        }
        let points = self.buffer.points();
        let brush = &self.brush;
        self.surfaces.draw_ghost(|ctx| render_stroke(ctx, points, brush));
    }

    /// Commits the ghost, empties the buffer and returns to idle.
    pub(super) fn end_stroke(&mut self) {
        self.surfaces.commit();
        self.buffer.clear();
        self.state = StrokeState::Idle;
    }
}
