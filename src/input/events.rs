//! Generic pointer event types forwarded by a host.

/// Pointer input in surface-local coordinates.
///
/// Hosts map their native events (mouse, stylus, recorded scripts) onto
/// these variants before handing them to
/// [`Whiteboard::handle_event`](super::Whiteboard::handle_event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button or contact went down; starts a stroke
    Press { x: f64, y: f64 },
    /// Pointer moved; only has an effect while a stroke is active
    Move { x: f64, y: f64 },
    /// Button or contact released; ends the active stroke
    Release,
    /// Dedicated tap input, drawn as a preview dot only
    Click { x: f64, y: f64 },
}
