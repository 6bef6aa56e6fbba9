//! Input handling and stroke state machine.
//!
//! This module turns host pointer events into ink. It owns the sample buffer
//! of the stroke in progress, decides when preview ink is committed to the
//! board, and exposes the brush setters a host wires to its controls.

pub mod buffer;
pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use buffer::{PointBuffer, TrimPolicy};
pub use events::PointerEvent;
pub use state::{StrokeState, Whiteboard, WhiteboardOptions};
