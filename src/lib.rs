//! Library exports for the inkboard drawing core.
//!
//! Exposes the whiteboard state machine, rendering primitives and
//! configuration types so that hosts (the bundled command-line replayer, GUI
//! front ends, tests) share one implementation of stroke sampling and
//! surface compositing.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::{PointerEvent, Whiteboard, WhiteboardOptions};
