//! Elevation color ramps.
//!
//! A ramp is a list of color stops keyed by elevation percentage. The first
//! stop sits at `0.0`, the last at `1.0`, and colors in between are linearly
//! interpolated per channel.

use crate::{RenderError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse six hex digits, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 {
            return Err(RenderError::InvalidColor(s.to_string()));
        }
        let bytes = hex::decode(digits).map_err(|_| RenderError::InvalidColor(s.to_string()))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }

    /// Uppercase hex without `#`, e.g. `ADFF2F`.
    pub fn to_hex(&self) -> String {
        hex::encode_upper([self.r, self.g, self.b])
    }

    /// CSS color string handed to the map widget.
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},1)", self.r, self.g, self.b)
    }

    /// Blend toward `other` by `t` (0 = self, 1 = other), flooring each channel.
    ///
    /// Output channels never leave the range spanned by the two inputs.
    fn mix(self, other: Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| -> u8 {
            let v = (a as f64 * (1.0 - t) + b as f64 * t).floor();
            v.clamp(a.min(b) as f64, a.max(b) as f64) as u8
        };
        Rgb::new(channel(self.r, other.r), channel(self.g, other.g), channel(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A color pinned to an elevation percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Elevation percentage in `[0, 1]`.
    pub pct: f64,
    /// Color at this percentage.
    #[serde(alias = "colorHex")]
    pub color: Rgb,
}

impl ColorStop {
    /// Create a stop.
    pub const fn new(pct: f64, color: Rgb) -> Self {
        Self { pct, color }
    }
}

/// Stops of the default palette: blue lowlands through greens and browns to
/// white peaks.
pub fn default_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Rgb::new(0x00, 0x00, 0xFF)),
        ColorStop::new(0.5, Rgb::new(0xAD, 0xFF, 0x2F)),
        ColorStop::new(0.6, Rgb::new(0x9A, 0xCD, 0x32)),
        ColorStop::new(0.7, Rgb::new(0xFF, 0xA5, 0x00)),
        ColorStop::new(0.8, Rgb::new(0xB8, 0x86, 0x0B)),
        ColorStop::new(0.9, Rgb::new(0xB3, 0x80, 0x1A)),
        ColorStop::new(1.0, Rgb::new(0xFF, 0xFF, 0xFF)),
    ]
}

/// A validated, ordered list of color stops.
///
/// Ramps are never edited in place; build a new one to change colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorStop>", into = "Vec<ColorStop>")]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    /// Validate stops and build a ramp.
    ///
    /// Requires at least two stops, strictly ascending percentages, a first
    /// stop at exactly `0.0` and a last stop at exactly `1.0`.
    pub fn build(stops: Vec<ColorStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(RenderError::InvalidRamp(format!(
                "at least two color stops are required, got {}",
                stops.len()
            )));
        }
        if let Some(pair) = stops.windows(2).find(|w| !(w[1].pct > w[0].pct)) {
            return Err(RenderError::InvalidRamp(format!(
                "stops must be strictly ascending, found {} followed by {}",
                pair[0].pct, pair[1].pct
            )));
        }
        let first = stops[0].pct;
        let last = stops[stops.len() - 1].pct;
        if first != 0.0 || last != 1.0 {
            return Err(RenderError::InvalidRamp(format!(
                "stops must start at 0 and end at 1, got {} and {}",
                first, last
            )));
        }

        Ok(Self { stops })
    }

    /// The stops, in ascending order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Interpolated color for an elevation percentage.
    ///
    /// `pct` is clamped to `[0, 1]` (NaN counts as 0), so the ramp never
    /// extrapolates past its end colors.
    pub fn color_at(&self, pct: f64) -> Rgb {
        let pct = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;

        // First interior stop above pct, else the final segment.
        let upper_idx = (1..last).find(|&i| pct < self.stops[i].pct).unwrap_or(last);
        let lower = self.stops[upper_idx - 1];
        let upper = self.stops[upper_idx];

        let range_pct = (pct - lower.pct) / (upper.pct - lower.pct);
        lower.color.mix(upper.color, range_pct)
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self { stops: default_stops() }
    }
}

impl TryFrom<Vec<ColorStop>> for ColorRamp {
    type Error = RenderError;

    fn try_from(stops: Vec<ColorStop>) -> Result<Self> {
        ColorRamp::build(stops)
    }
}

impl From<ColorRamp> for Vec<ColorStop> {
    fn from(ramp: ColorRamp) -> Self {
        ramp.stops
    }
}
