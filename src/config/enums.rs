//! Configuration enum types.

use crate::draw::{BLACK, Color, SettingValue};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named/hex color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "black"
///
/// # Hex color
/// color = "#336699"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or `#rgb`/`#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Parses the specification, or `None` when a name is not recognised.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => name.parse().ok(),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names default to black with a warning.
    pub fn to_color(&self) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color '{:?}', using black", self);
            BLACK
        })
    }

    /// Text form accepted by the brush color setter.
    pub fn as_setting(&self) -> SettingValue {
        match self {
            ColorSpec::Name(name) => SettingValue::Text(name.clone()),
            ColorSpec::Rgb([r, g, b]) => SettingValue::Text(format!("#{r:02x}{g:02x}{b:02x}")),
        }
    }
}
