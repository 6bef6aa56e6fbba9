use crate::draw::Point;
use crate::input::events::PointerEvent;
use log::{debug, trace};

use super::{StrokeState, Whiteboard};

impl Whiteboard {
    /// Dispatches a host pointer event to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y } => self.on_pointer_press(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Release => self.on_pointer_release(),
            PointerEvent::Click { x, y } => self.on_click(x, y),
        }
    }

    /// Processes a pointer press.
    ///
    /// # Behavior
    /// - Idle: starts a stroke with the buffer reset to the press sample
    /// - Active: ends the current stroke as a release would, then starts a new one
    ///
    /// The ghost is cleared so a leftover tap dot can never be committed by
    /// the stroke that follows it.
    pub fn on_pointer_press(&mut self, x: f64, y: f64) {
        let Some(point) = self.sample(x, y) else {
            return;
        };

        if self.state.is_active() {
            debug!("Press while a stroke is active; committing it first");
            self.end_stroke();
        }

        self.surfaces.clear_ghost();
        self.buffer.reset_to(point);
        self.last_pointer = Some(point);
        self.state = StrokeState::Active;
        debug!("Stroke started at ({:.1}, {:.1})", point.x, point.y);
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Idle: ignored without touching the buffer or surfaces
    /// - Active: appends the sample and repaints the ghost; once the buffer
    ///   exceeds its threshold the ghost is flattened into the board and the
    ///   buffer cut back to its newest samples
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.state.is_active() {
            return;
        }
        let Some(point) = self.sample(x, y) else {
            return;
        };

        self.buffer.push(point);
        self.last_pointer = Some(point);
        self.redraw_ghost();

        if self.buffer.needs_trim() {
            self.surfaces.flatten();
            let dropped = self.buffer.trim();
            trace!(
                "Trimmed {dropped} samples; {} remain after flattening",
                self.buffer.len()
            );
        }
    }

    /// Processes a pointer release.
    ///
    /// # Behavior
    /// Commits the ghost into the board (clearing the ghost even if it is
    /// empty) and returns to idle. A stroke that never moved skips the commit
    /// and is drawn as a preview dot instead.
    pub fn on_pointer_release(&mut self) {
        if !self.state.is_active() {
            debug!("Release without an active stroke; ignoring");
            return;
        }

        let tap = match self.buffer.points() {
            [only] => Some(*only),
            _ => None,
        };

        match tap {
            Some(point) => {
                // Nothing reached the ghost, so there is nothing to commit.
                self.buffer.clear();
                self.state = StrokeState::Idle;
                debug!("Tap at ({:.1}, {:.1})", point.x, point.y);
                self.draw_tap(point);
            }
            None => {
                self.end_stroke();
                debug!("Stroke committed (flush #{})", self.surfaces.flush_count());
            }
        }
    }

    /// Processes a dedicated tap/click.
    ///
    /// Draws a dot the width of the brush on the ghost only; ignored while a
    /// stroke is active.
    pub fn on_click(&mut self, x: f64, y: f64) {
        if self.state.is_active() {
            debug!("Click during an active stroke; ignoring");
            return;
        }
        let Some(point) = self.sample(x, y) else {
            return;
        };

        self.last_pointer = Some(point);
        self.draw_tap(point);
    }

    fn draw_tap(&mut self, point: Point) {
        self.buffer.reset_to(point);
        self.redraw_ghost();
        self.buffer.clear();
    }
}
