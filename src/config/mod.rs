//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkboard/config.toml`. Settings include brush defaults,
//! board geometry, long-stroke sampling limits, snapshot export and toolbar presets.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{BoardConfig, DrawingConfig, ExportConfig, SamplerConfig, ToolbarConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest board edge accepted from configuration.
pub const MAX_BOARD_EDGE: i32 = 16_384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 3.0
/// line_cap = "round"
/// line_join = "round"
///
/// [board]
/// width = 1024
/// height = 768
/// fill = "white"
///
/// [sampler]
/// trim_threshold = 100
/// trim_keep = 10
///
/// [export]
/// save_directory = "~/Pictures/Inkboard"
///
/// [toolbar]
/// brush_sizes = [2.0, 5.0, 10.0]
/// brush_colors = ["black", "#cc0000"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults (color, width, cap, join, smoothing)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Surface size and background
    #[serde(default)]
    pub board: BoardConfig,

    /// Long-stroke buffer limits
    #[serde(default)]
    pub sampler: SamplerConfig,

    /// Snapshot output settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Toolbar presets
    #[serde(default)]
    pub toolbar: ToolbarConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by
    /// the default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 0.5 - 200.0
    /// - `board.width` / `board.height`: 1 - 16384
    /// - `trim_threshold`: 4 - 100000
    /// - `trim_keep`: 3 - (`trim_threshold` - 1)
    pub(crate) fn validate_and_clamp(&mut self) {
        // Width: 0.5 - 200.0
        if !(0.5..=200.0).contains(&self.drawing.default_width) {
            warn!(
                "Invalid default_width {:.1}, clamping to 0.5-200.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = if self.drawing.default_width.is_nan() {
                3.0
            } else {
                self.drawing.default_width.clamp(0.5, 200.0)
            };
        }

        if self.drawing.default_color.try_to_color().is_none() {
            warn!(
                "Invalid default_color {:?}, falling back to black",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("black".to_string());
        }

        // Board size: 1 - 16384
        for (name, edge) in [
            ("width", &mut self.board.width),
            ("height", &mut self.board.height),
        ] {
            if !(1..=MAX_BOARD_EDGE).contains(edge) {
                warn!("Invalid board {name} {edge}, clamping to 1-{MAX_BOARD_EDGE} range");
                *edge = (*edge).clamp(1, MAX_BOARD_EDGE);
            }
        }

        if self.board.fill.try_to_color().is_none() {
            warn!(
                "Invalid board fill {:?}, falling back to white",
                self.board.fill
            );
            self.board.fill = ColorSpec::Name("white".to_string());
        }

        // Trim threshold: 4 - 100000
        if !(4..=100_000).contains(&self.sampler.trim_threshold) {
            warn!(
                "Invalid trim_threshold {}, clamping to 4-100000 range",
                self.sampler.trim_threshold
            );
            self.sampler.trim_threshold = self.sampler.trim_threshold.clamp(4, 100_000);
        }

        // Trim keep: 3 - threshold-1
        let max_keep = self.sampler.trim_threshold - 1;
        if !(3..=max_keep).contains(&self.sampler.trim_keep) {
            warn!(
                "Invalid trim_keep {}, clamping to 3-{} range",
                self.sampler.trim_keep, max_keep
            );
            self.sampler.trim_keep = self.sampler.trim_keep.clamp(3, max_keep);
        }

        if !self.export.format.eq_ignore_ascii_case("png") {
            warn!(
                "Unsupported export format '{}', falling back to 'png'",
                self.export.format
            );
            self.export.format = "png".to_string();
        }
        self.export.format.make_ascii_lowercase();

        let before = self.toolbar.brush_sizes.len();
        self.toolbar
            .brush_sizes
            .retain(|size| size.is_finite() && *size > 0.0);
        if self.toolbar.brush_sizes.len() != before {
            warn!(
                "Dropped {} non-positive toolbar brush size(s)",
                before - self.toolbar.brush_sizes.len()
            );
        }

        for spec in &mut self.toolbar.brush_colors {
            if spec.try_to_color().is_none() {
                warn!("Invalid toolbar color {:?}, replacing with black", spec);
                *spec = ColorSpec::Name("black".to_string());
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        // Parsing also validates and clamps values to acceptable ranges
        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses TOML text and validates the result.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, LineCap, LineJoin, WHITE};
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.drawing.default_width, 3.0);
        assert_eq!(config.drawing.line_cap, LineCap::Round);
        assert_eq!(config.drawing.line_join, LineJoin::Round);
        assert_eq!(config.board.fill.to_color(), WHITE);
        assert_eq!(config.sampler.trim_threshold, 100);
        assert_eq!(config.sampler.trim_keep, 10);
        assert_eq!(config.export.format, "png");
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::from_toml_str(
            r##"
            [drawing]
            default_color = "#336699"
            default_width = 6.5
            line_cap = "square"
            line_join = "bevel"
            smoothing = false

            [board]
            width = 320
            height = 200
            fill = [10, 20, 30]

            [sampler]
            trim_threshold = 50
            trim_keep = 5

            [toolbar]
            brush_sizes = [1.0, 4.0]
            brush_colors = ["red"]
            "##,
        )
        .unwrap();

        let brush = config.drawing.brush();
        assert_eq!(brush.width, 6.5);
        assert_eq!(brush.cap, LineCap::Square);
        assert_eq!(brush.join, LineJoin::Bevel);
        assert!(!brush.smoothing);
        assert_eq!(config.board.width, 320);
        assert_eq!(config.sampler.trim_policy().keep, 5);
        assert_eq!(config.toolbar.brush_sizes, vec![1.0, 4.0]);
    }

    #[test]
    fn unknown_line_cap_is_a_parse_error() {
        assert!(Config::from_toml_str("[drawing]\nline_cap = \"pointy\"").is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [drawing]
            default_width = 900.0
            default_color = "nope"

            [board]
            width = 0
            height = 99999

            [sampler]
            trim_threshold = 2
            trim_keep = 50

            [export]
            format = "gif"

            [toolbar]
            brush_sizes = [-1.0, 3.0, 0.0]
            brush_colors = ["blue", "sparkly"]
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_width, 200.0);
        assert_eq!(config.drawing.brush().color, BLACK);
        assert_eq!(config.board.width, 1);
        assert_eq!(config.board.height, MAX_BOARD_EDGE);
        assert_eq!(config.sampler.trim_threshold, 4);
        assert_eq!(config.sampler.trim_keep, 3);
        assert_eq!(config.export.format, "png");
        assert_eq!(config.toolbar.brush_sizes, vec![3.0]);
        assert_eq!(config.toolbar.brush_colors[1].to_color(), BLACK);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.board.width, 800);
    }

    #[test]
    fn load_from_reports_syntax_errors_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[board\nwidth = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        for section in ["drawing", "board", "sampler", "export", "toolbar"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
