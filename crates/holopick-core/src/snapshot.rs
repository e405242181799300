//! Serializable widget state for save/restore.

use crate::channel::BarKind;
use crate::color::{Argb, Hsva};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Malformed snapshot: {0}")]
    Malformed(String),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("Snapshot is for the {found:?} bar, expected {expected:?}")]
    KindMismatch { expected: BarKind, found: BarKind },
}

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Saved state of a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelSnapshot {
    /// Pointer angle in radians.
    pub angle: f64,
    /// Committed color shown in the left half of the center, if any.
    pub old_color: Option<Argb>,
    pub show_old_color: bool,
}

impl WheelSnapshot {
    pub fn validate(&self) -> SnapshotResult<()> {
        if !self.angle.is_finite() || self.angle.abs() > std::f64::consts::TAU {
            return Err(SnapshotError::OutOfRange {
                field: "wheel.angle",
                value: self.angle,
            });
        }
        Ok(())
    }
}

/// Saved state of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSnapshot {
    pub kind: BarKind,
    pub color: Hsva,
}

impl BarSnapshot {
    pub fn validate(&self) -> SnapshotResult<()> {
        validate_hsva(&self.color)
    }
}

/// Saved state of a whole picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerSnapshot {
    /// The picker's canonical color.
    pub color: Hsva,
    pub wheel: WheelSnapshot,
    pub bars: Vec<BarSnapshot>,
}

impl PickerSnapshot {
    pub fn to_json(&self) -> SnapshotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Malformed(e.to_string()))
    }

    /// Parse and validate.
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| SnapshotError::Malformed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> SnapshotResult<()> {
        validate_hsva(&self.color)?;
        self.wheel.validate()?;
        for bar in &self.bars {
            bar.validate()?;
        }
        Ok(())
    }
}

/// Check every channel of a color is finite and in range.
pub fn validate_hsva(color: &Hsva) -> SnapshotResult<()> {
    let hue = f64::from(color.hue);
    if !hue.is_finite() || !(0.0..360.0).contains(&hue) {
        return Err(SnapshotError::OutOfRange { field: "hue", value: hue });
    }
    for (field, value) in [
        ("saturation", color.saturation),
        ("value", color.value),
        ("alpha", color.alpha),
    ] {
        let value = f64::from(value);
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(SnapshotError::OutOfRange { field, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PickerSnapshot {
        PickerSnapshot {
            color: Hsva::new(200.0, 0.5, 0.75, 1.0),
            wheel: WheelSnapshot {
                angle: 1.0,
                old_color: Some(Argb::BLACK),
                show_old_color: true,
            },
            bars: vec![BarSnapshot {
                kind: BarKind::Value,
                color: Hsva::new(200.0, 0.5, 0.75, 1.0),
            }],
        }
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = sample();
        let json = snapshot.to_json().unwrap();
        assert_eq!(PickerSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let json = r#"{ "color": { "hue": 0, "saturation": 1, "value": 1, "alpha": 1 }, "bars": [] }"#;
        assert!(matches!(PickerSnapshot::from_json(json), Err(SnapshotError::Malformed(_))));
        assert!(matches!(PickerSnapshot::from_json("[]"), Err(SnapshotError::Malformed(_))));
    }

    #[test]
    fn test_out_of_range_channel() {
        let mut snapshot = sample();
        snapshot.bars[0].color.value = 1.5;
        let json = snapshot.to_json().unwrap();
        assert!(matches!(
            PickerSnapshot::from_json(&json),
            Err(SnapshotError::OutOfRange { field: "value", .. })
        ));

        let mut snapshot = sample();
        snapshot.color.hue = 360.0;
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::OutOfRange { field: "hue", .. })
        ));
    }

    #[test]
    fn test_bad_angle() {
        let mut snapshot = sample();
        snapshot.wheel.angle = f64::NAN;
        assert!(snapshot.validate().is_err());
        snapshot.wheel.angle = 100.0;
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_black_old_color_survives() {
        let json = sample().to_json().unwrap();
        let loaded = PickerSnapshot::from_json(&json).unwrap();
        assert_eq!(loaded.wheel.old_color, Some(Argb::BLACK));
    }
}
