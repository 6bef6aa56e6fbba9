//! Brush style: width, color, line cap/join and smoothing.
//!
//! The brush is owned by the [`Whiteboard`](crate::input::Whiteboard) session and
//! read on every redraw, so changes made mid-stroke show up on the next sample.

use super::color::{BLACK, Color};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Line cap style applied to open stroke ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Line join style applied where curve segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineCap {
    pub fn to_cairo(self) -> cairo::LineCap {
        match self {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

impl LineJoin {
    pub fn to_cairo(self) -> cairo::LineJoin {
        match self {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

impl FromStr for LineCap {
    type Err = BrushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "butt" => Ok(LineCap::Butt),
            "round" => Ok(LineCap::Round),
            "square" => Ok(LineCap::Square),
            _ => Err(BrushError::UnknownLineCap(s.to_string())),
        }
    }
}

impl FromStr for LineJoin {
    type Err = BrushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "miter" => Ok(LineJoin::Miter),
            "round" => Ok(LineJoin::Round),
            "bevel" => Ok(LineJoin::Bevel),
            _ => Err(BrushError::UnknownLineJoin(s.to_string())),
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loosely typed value handed to the brush setters by a host.
///
/// Hosts such as toolbars or recorded event scripts pass whatever they hold:
/// sizes often arrive as text (`"5"`), colors and cap names as strings.
///
/// ```
/// use inkboard::draw::SettingValue;
/// let size: SettingValue = serde_json::from_str("\"12\"").unwrap();
/// assert_eq!(size, SettingValue::Text("12".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SettingValue {
    Number(f64),
    Text(String),
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Number(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Number(value as f64)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

/// Rejected brush update. The brush is left untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrushError {
    #[error("brush size '{0}' is not a positive number")]
    InvalidSize(String),

    #[error("unrecognised brush color '{0}'")]
    InvalidColor(String),

    #[error("unknown line cap '{0}' (expected butt, round or square)")]
    UnknownLineCap(String),

    #[error("unknown line join '{0}' (expected miter, round or bevel)")]
    UnknownLineJoin(String),

    #[error("expected a text value, got number {0}")]
    ExpectedText(f64),
}

/// Current stroke style.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushConfig {
    pub color: Color,
    /// Stroke width in pixels, always finite and positive
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    /// Antialias ink when true
    pub smoothing: bool,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: 3.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
            smoothing: true,
        }
    }
}

impl BrushConfig {
    /// Updates the width from a number or numeric text.
    pub fn set_size(&mut self, value: impl Into<SettingValue>) -> Result<(), BrushError> {
        let width = match value.into() {
            SettingValue::Number(n) => n,
            SettingValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| BrushError::InvalidSize(text.clone()))?,
        };

        if !width.is_finite() || width <= 0.0 {
            return Err(BrushError::InvalidSize(width.to_string()));
        }

        self.width = width;
        Ok(())
    }

    /// Updates the color from a name or hex string. Numbers are rejected.
    pub fn set_color(&mut self, value: impl Into<SettingValue>) -> Result<(), BrushError> {
        let text = expect_text(value.into())?;
        self.color = text
            .parse::<Color>()
            .map_err(|_| BrushError::InvalidColor(text.clone()))?;
        Ok(())
    }

    pub fn set_cap(&mut self, value: impl Into<SettingValue>) -> Result<(), BrushError> {
        self.cap = expect_text(value.into())?.parse()?;
        Ok(())
    }

    pub fn set_join(&mut self, value: impl Into<SettingValue>) -> Result<(), BrushError> {
        self.join = expect_text(value.into())?.parse()?;
        Ok(())
    }

    /// Applies width, cap, join, color and antialiasing to `ctx`.
    pub fn apply_stroke_style(&self, ctx: &cairo::Context) {
        ctx.set_line_width(self.width);
        ctx.set_line_cap(self.cap.to_cairo());
        ctx.set_line_join(self.join.to_cairo());
        self.color.apply_source(ctx);
        self.apply_antialias(ctx);
    }

    pub fn apply_antialias(&self, ctx: &cairo::Context) {
        ctx.set_antialias(if self.smoothing {
            cairo::Antialias::Best
        } else {
            cairo::Antialias::None
        });
    }
}

fn expect_text(value: SettingValue) -> Result<String, BrushError> {
    match value {
        SettingValue::Text(text) => Ok(text),
        SettingValue::Number(n) => Err(BrushError::ExpectedText(n)),
    }
}
