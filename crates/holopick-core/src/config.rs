//! Widget configuration with serde defaults.

use crate::channel::BarKind;
use crate::geometry::Orientation;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid {field}: {value} (must be positive)")]
    NonPositive { field: &'static str, value: f64 },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Dimensions of a linear bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub thickness: f64,
    /// Preferred track length, excluding the halo at each end.
    pub length: f64,
    pub pointer_radius: f64,
    pub pointer_halo_radius: f64,
    pub orientation: Orientation,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            thickness: 4.0,
            length: 240.0,
            pointer_radius: 14.0,
            pointer_halo_radius: 18.0,
            orientation: Orientation::Horizontal,
        }
    }
}

impl BarConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        positive("bar.thickness", self.thickness)?;
        positive("bar.length", self.length)?;
        positive("bar.pointer_radius", self.pointer_radius)?;
        positive("bar.pointer_halo_radius", self.pointer_halo_radius)
    }
}

/// Dimensions of the hue wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub thickness: f64,
    /// Preferred ring radius; the measured radius may be smaller.
    pub radius: f64,
    pub center_radius: f64,
    pub center_halo_radius: f64,
    pub pointer_radius: f64,
    pub pointer_halo_radius: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            thickness: 8.0,
            radius: 124.0,
            center_radius: 54.0,
            center_halo_radius: 60.0,
            pointer_radius: 14.0,
            pointer_halo_radius: 18.0,
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        positive("wheel.thickness", self.thickness)?;
        positive("wheel.radius", self.radius)?;
        positive("wheel.center_radius", self.center_radius)?;
        positive("wheel.center_halo_radius", self.center_halo_radius)?;
        positive("wheel.pointer_radius", self.pointer_radius)?;
        positive("wheel.pointer_halo_radius", self.pointer_halo_radius)
    }
}

/// Full picker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub wheel: WheelConfig,
    pub bar: BarConfig,
    /// Accept presses anywhere on the ring, not just on the pointer.
    pub touch_anywhere_on_wheel: bool,
    pub show_old_center_color: bool,
    /// Bars to attach, in display order.
    pub bars: Vec<BarKind>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            wheel: WheelConfig::default(),
            bar: BarConfig::default(),
            touch_anywhere_on_wheel: true,
            show_old_center_color: true,
            bars: BarKind::ALL.to_vec(),
        }
    }
}

impl PickerConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.wheel.validate()?;
        self.bar.validate()
    }
}

fn positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.bar.length, 240.0);
        assert_eq!(config.bar.thickness, 4.0);
        assert_eq!(config.wheel.radius, 124.0);
        assert_eq!(config.wheel.center_halo_radius, 60.0);
        assert!(config.touch_anywhere_on_wheel);
        assert_eq!(config.bars.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = PickerConfig::from_json(
            r#"{ "bar": { "length": 300, "orientation": "vertical" }, "bars": ["value"] }"#,
        )
        .unwrap();
        assert_eq!(config.bar.length, 300.0);
        assert_eq!(config.bar.orientation, Orientation::Vertical);
        assert_eq!(config.bar.pointer_halo_radius, 18.0);
        assert_eq!(config.bars, vec![BarKind::Value]);
        assert_eq!(config.wheel, WheelConfig::default());
    }

    #[test]
    fn test_rejects_non_positive() {
        let result = PickerConfig::from_json(r#"{ "wheel": { "radius": 0 } }"#);
        assert!(matches!(
            result,
            Err(ConfigError::NonPositive { field: "wheel.radius", .. })
        ));

        let result = PickerConfig::from_json(r#"{ "bar": { "thickness": -2 } }"#);
        assert!(matches!(result, Err(ConfigError::NonPositive { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(PickerConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            PickerConfig::from_json(r#"{ "bars": ["hue"] }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.json");
        let mut config = PickerConfig::default();
        config.show_old_center_color = false;
        std::fs::write(&path, config.to_json().unwrap()).unwrap();

        let loaded = PickerConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);

        assert!(matches!(
            PickerConfig::from_json_file(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
