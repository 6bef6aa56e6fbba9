//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{BrushConfig, LineCap, LineJoin};
use crate::input::buffer::{DEFAULT_TRIM_KEEP, DEFAULT_TRIM_THRESHOLD, TrimPolicy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush defaults applied when a whiteboard is created.
///
/// Hosts can change every value at runtime through the brush setters.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default ink color - a named color, `#rgb`/`#rrggbb` hex, or an RGB array
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush width in pixels (valid range: 0.5 - 200.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Line cap for stroke ends (butt, round, square)
    #[serde(default = "default_line_cap")]
    pub line_cap: LineCap,

    /// Line join between curve segments (miter, round, bevel)
    #[serde(default = "default_line_join")]
    pub line_join: LineJoin,

    /// Antialias ink
    #[serde(default = "default_smoothing")]
    pub smoothing: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            line_cap: default_line_cap(),
            line_join: default_line_join(),
            smoothing: default_smoothing(),
        }
    }
}

impl DrawingConfig {
    /// Brush built from these defaults.
    pub fn brush(&self) -> BrushConfig {
        BrushConfig {
            color: self.default_color.to_color(),
            width: self.default_width,
            cap: self.line_cap,
            join: self.line_join,
            smoothing: self.smoothing,
        }
    }
}

/// Drawing surface geometry and background.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BoardConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_board_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_board_height")]
    pub height: i32,

    /// Background painted onto the board when it is created
    #[serde(default = "default_board_fill")]
    pub fill: ColorSpec,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: default_board_width(),
            height: default_board_height(),
            fill: default_board_fill(),
        }
    }
}

/// Long-stroke sampling limits.
///
/// While a stroke is drawn, the preview is flattened into the board and the
/// sample buffer cut back to its newest points whenever it grows past
/// `trim_threshold`. This keeps per-sample cost flat on very long strokes.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SamplerConfig {
    /// Buffer length that triggers a trim (valid range: 4 - 100000)
    #[serde(default = "default_trim_threshold")]
    pub trim_threshold: usize,

    /// Newest samples kept by a trim (at least 3, below `trim_threshold`)
    #[serde(default = "default_trim_keep")]
    pub trim_keep: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            trim_threshold: default_trim_threshold(),
            trim_keep: default_trim_keep(),
        }
    }
}

impl SamplerConfig {
    pub fn trim_policy(&self) -> TrimPolicy {
        TrimPolicy {
            threshold: self.trim_threshold,
            keep: self.trim_keep,
        }
    }
}

/// Snapshot file settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory snapshots are written to (`~/` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template using chrono format specifiers
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Image format; only "png" is supported
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            format: default_format(),
        }
    }
}

/// Preset values a host toolbar offers as buttons.
///
/// Event scripts select them by index with `select_size` / `select_color`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ToolbarConfig {
    /// Brush width presets in pixels
    #[serde(default = "default_brush_sizes")]
    pub brush_sizes: Vec<f64>,

    /// Brush color presets
    #[serde(default = "default_brush_colors")]
    pub brush_colors: Vec<ColorSpec>,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            brush_sizes: default_brush_sizes(),
            brush_colors: default_brush_colors(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    3.0
}

fn default_line_cap() -> LineCap {
    LineCap::Round
}

fn default_line_join() -> LineJoin {
    LineJoin::Round
}

fn default_smoothing() -> bool {
    true
}

fn default_board_width() -> i32 {
    800
}

fn default_board_height() -> i32 {
    600
}

fn default_board_fill() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_trim_threshold() -> usize {
    DEFAULT_TRIM_THRESHOLD
}

fn default_trim_keep() -> usize {
    DEFAULT_TRIM_KEEP
}

fn default_save_directory() -> String {
    crate::export::default_save_directory()
        .to_string_lossy()
        .into_owned()
}

fn default_filename_template() -> String {
    "inkboard_%Y-%m-%d_%H%M%S".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

fn default_brush_sizes() -> Vec<f64> {
    vec![2.0, 5.0, 10.0, 20.0]
}

fn default_brush_colors() -> Vec<ColorSpec> {
    ["black", "red", "blue", "green"]
        .into_iter()
        .map(|name| ColorSpec::Name(name.to_string()))
        .collect()
}
