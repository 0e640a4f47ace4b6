//! Viewer settings loaded from YAML.
//!
//! ```yaml
//! colors:
//!   - { pct: 0.0, color: "0000FF" }
//!   - { pct: 0.5, color: "ADFF2F" }
//!   - { pct: 1.0, color: "FFFFFF" }
//! alpha: true
//! marker: { lat: 50.66, lon: 10.67, show: true }
//! ```
//!
//! Every field is optional and falls back to the defaults.

use crate::color::default_stops;
use crate::cursor::Marker;
use crate::{ColorRamp, ColorStop, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// User-editable display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerSettings {
    /// Color stops of the elevation ramp.
    #[serde(default = "default_stops")]
    pub colors: Vec<ColorStop>,
    /// Draw rectangles half transparent.
    #[serde(default)]
    pub alpha: bool,
    /// Optional position marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            colors: default_stops(),
            alpha: false,
            marker: None,
        }
    }
}

impl ViewerSettings {
    /// Parse settings from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), stops = settings.colors.len(), "loaded viewer settings");
        Ok(settings)
    }

    /// Serialize to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the color stops into a ramp.
    pub fn to_ramp(&self) -> Result<ColorRamp> {
        ColorRamp::build(self.colors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderError, Rgb};

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let settings = ViewerSettings::from_yaml_str("{}").unwrap();
        assert_eq!(settings, ViewerSettings::default());
        assert_eq!(settings.to_ramp().unwrap(), ColorRamp::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r##"
colors:
  - { pct: 0.0, color: "000000" }
  - { pct: 1.0, color: "#FF8000" }
alpha: true
marker: { lat: 50.5, lon: 10.5, show: true }
"##;
        let settings = ViewerSettings::from_yaml_str(yaml).unwrap();
        assert!(settings.alpha);
        assert_eq!(settings.colors[1].color, Rgb::new(0xFF, 0x80, 0x00));
        let marker = settings.marker.unwrap();
        assert!(marker.show);
        assert_eq!(marker.lat, 50.5);
        assert_eq!(settings.to_ramp().unwrap().stops().len(), 2);
    }

    #[test]
    fn test_invalid_stops_rejected_at_ramp() {
        let yaml = r#"
colors:
  - { pct: 0.2, color: "000000" }
  - { pct: 0.0, color: "FFFFFF" }
"#;
        let settings = ViewerSettings::from_yaml_str(yaml).unwrap();
        assert!(matches!(settings.to_ramp(), Err(RenderError::InvalidRamp(_))));
    }

    #[test]
    fn test_bad_color_is_yaml_error() {
        let yaml = "colors:\n  - { pct: 0.0, color: 'nothex' }\n";
        assert!(matches!(ViewerSettings::from_yaml_str(yaml), Err(RenderError::Yaml(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ViewerSettings::from_yaml_str("colour: red\n").is_err());
    }

    #[test]
    fn test_yaml_output_reloads() {
        let original = ViewerSettings {
            alpha: true,
            ..ViewerSettings::default()
        };
        let yaml = original.to_yaml_string().unwrap();
        assert!(yaml.contains("0000FF"));
        assert_eq!(ViewerSettings::from_yaml_str(&yaml).unwrap(), original);
    }
}
