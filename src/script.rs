//! Recorded pointer-event scripts.
//!
//! A script is a JSON array of tagged events that the command-line host
//! replays through a [`Whiteboard`], standing in for a live pointer device
//! and toolbar:
//!
//! ```json
//! [
//!   { "type": "set_brush_size", "value": "5" },
//!   { "type": "press", "x": 10, "y": 10 },
//!   { "type": "move", "x": 20, "y": 12 },
//!   { "type": "release" }
//! ]
//! ```

use crate::config::ToolbarConfig;
use crate::draw::SettingValue;
use crate::input::{PointerEvent, Whiteboard};
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scripted host action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release,
    Click { x: f64, y: f64 },
    SetBrushSize { value: SettingValue },
    SetBrushColor { value: SettingValue },
    SetLineCap { value: SettingValue },
    SetLineJoin { value: SettingValue },
    SetSmoothing { enabled: bool },
    /// Picks `toolbar.brush_sizes[index]`
    SelectSize { index: usize },
    /// Picks `toolbar.brush_colors[index]`
    SelectColor { index: usize },
}

/// Counters reported after a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Pointer events delivered to the whiteboard
    pub pointer_events: usize,
    /// Brush updates applied
    pub brush_updates: usize,
    /// Brush updates rejected as invalid
    pub rejected_updates: usize,
}

/// Parses a script from JSON text.
pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>> {
    serde_json::from_str(text).context("Invalid event script")
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script {}", path.display()))?;
    let events = parse_script(&text)
        .with_context(|| format!("Failed to parse event script {}", path.display()))?;
    debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Feeds `events` to `board` in order.
///
/// Invalid brush updates are counted and skipped, exactly as a live host
/// would see them silently ignored.
pub fn replay(
    board: &mut Whiteboard,
    events: &[ScriptEvent],
    toolbar: &ToolbarConfig,
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for event in events {
        if let Some(pointer) = event.pointer_event() {
            board.handle_event(pointer);
            summary.pointer_events += 1;
            continue;
        }

        let applied = match event {
            ScriptEvent::SetBrushSize { value } => board.set_brush_size(value.clone()).is_ok(),
            ScriptEvent::SetBrushColor { value } => board.set_brush_color(value.clone()).is_ok(),
            ScriptEvent::SetLineCap { value } => board.set_line_cap(value.clone()).is_ok(),
            ScriptEvent::SetLineJoin { value } => board.set_line_join(value.clone()).is_ok(),
            ScriptEvent::SetSmoothing { enabled } => {
                board.set_smoothing(*enabled);
                true
            }
            ScriptEvent::SelectSize { index } => match toolbar.brush_sizes.get(*index) {
                Some(size) => board.set_brush_size(*size).is_ok(),
                None => {
                    warn!("No toolbar size preset at index {index}");
                    false
                }
            },
            ScriptEvent::SelectColor { index } => match toolbar.brush_colors.get(*index) {
                Some(spec) => board.set_brush_color(spec.as_setting()).is_ok(),
                None => {
                    warn!("No toolbar color preset at index {index}");
                    false
                }
            },
            ScriptEvent::Press { .. }
            | ScriptEvent::Move { .. }
            | ScriptEvent::Release
            | ScriptEvent::Click { .. } => continue,
        };

        if applied {
            summary.brush_updates += 1;
        } else {
            summary.rejected_updates += 1;
        }
    }

    summary
}

impl ScriptEvent {
    /// The pointer input this event stands for, if it is one.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        match *self {
            ScriptEvent::Press { x, y } => Some(PointerEvent::Press { x, y }),
            ScriptEvent::Move { x, y } => Some(PointerEvent::Move { x, y }),
            ScriptEvent::Release => Some(PointerEvent::Release),
            ScriptEvent::Click { x, y } => Some(PointerEvent::Click { x, y }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorSpec;
    use crate::draw::{BLUE, RED};
    use crate::input::{StrokeState, WhiteboardOptions};

    fn board() -> Whiteboard {
        Whiteboard::new(WhiteboardOptions {
            width: 64,
            height: 64,
            ..WhiteboardOptions::default()
        })
        .unwrap()
    }

    #[test]
    fn parses_tagged_events_with_loose_values() {
        let events = parse_script(
            r#"[
                {"type": "set_brush_size", "value": "abc"},
                {"type": "set_brush_size", "value": 5},
                {"type": "set_line_cap", "value": "square"},
                {"type": "press", "x": 10, "y": 10.5},
                {"type": "release"},
                {"type": "select_color", "index": 1}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            events[0],
            ScriptEvent::SetBrushSize {
                value: SettingValue::Text("abc".into())
            }
        );
        assert_eq!(
            events[1],
            ScriptEvent::SetBrushSize {
                value: SettingValue::Number(5.0)
            }
        );
        assert_eq!(events[3], ScriptEvent::Press { x: 10.0, y: 10.5 });
        assert_eq!(events[4], ScriptEvent::Release);
        assert_eq!(events[5], ScriptEvent::SelectColor { index: 1 });
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        assert!(parse_script(r#"[{"type": "undo"}]"#).is_err());
    }

    #[test]
    fn replay_counts_pointer_events_and_updates() {
        let mut board = board();
        let events = vec![
            ScriptEvent::SetBrushSize {
                value: SettingValue::Text("abc".into()),
            },
            ScriptEvent::SetBrushSize {
                value: SettingValue::Number(5.0),
            },
            ScriptEvent::Press { x: 10.0, y: 10.0 },
            ScriptEvent::Move { x: 20.0, y: 10.0 },
            ScriptEvent::Move { x: 30.0, y: 10.0 },
            ScriptEvent::Release,
        ];

        let summary = replay(&mut board, &events, &ToolbarConfig::default());
        assert_eq!(
            summary,
            ReplaySummary {
                pointer_events: 4,
                brush_updates: 1,
                rejected_updates: 1,
            }
        );
        assert_eq!(board.brush().width, 5.0);
        assert_eq!(board.state(), StrokeState::Idle);
        assert_eq!(board.compositor().flush_count(), 1);
    }

    #[test]
    fn toolbar_presets_select_by_index() {
        let mut board = board();
        let toolbar = ToolbarConfig {
            brush_sizes: vec![2.0, 12.0],
            brush_colors: vec![ColorSpec::Name("red".into()), ColorSpec::Rgb([0, 0, 255])],
        };

        let summary = replay(
            &mut board,
            &[
                ScriptEvent::SelectSize { index: 1 },
                ScriptEvent::SelectColor { index: 0 },
                ScriptEvent::SelectColor { index: 1 },
                ScriptEvent::SelectSize { index: 9 },
            ],
            &toolbar,
        );

        assert_eq!(summary.brush_updates, 3);
        assert_eq!(summary.rejected_updates, 1);
        assert_eq!(board.brush().width, 12.0);
        assert_eq!(board.brush().color, BLUE);
        assert_ne!(board.brush().color, RED);
    }
}
