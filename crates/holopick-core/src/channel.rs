//! Color channels a widget can control.

use crate::color::{Argb, Hsv, Hsva};
use crate::gradient::{GradientProvider, HUE_STOPS};
use serde::{Deserialize, Serialize};

/// The slot of an `Hsva` a widget writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Hue,
    Saturation,
    Value,
    Opacity,
    /// Saturation on the first half of the track, value on the second.
    SaturationValue,
}

impl Channel {
    /// Normalized track position `[0, 1]` that represents `color`.
    pub fn fraction_of(self, color: &Hsva) -> f32 {
        let fraction = match self {
            Channel::Hue => color.hue.rem_euclid(360.0) / 360.0,
            Channel::Saturation => color.saturation,
            Channel::Value => color.value,
            Channel::Opacity => color.alpha,
            Channel::SaturationValue => {
                if color.saturation < color.value {
                    color.saturation * 0.5
                } else {
                    0.5 + (1.0 - color.value) * 0.5
                }
            }
        };
        fraction.clamp(0.0, 1.0)
    }

    /// Write a normalized track position into `color`.
    pub fn apply_fraction(self, color: &mut Hsva, fraction: f32) {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Channel::Hue => color.hue = (fraction * 360.0).rem_euclid(360.0),
            Channel::Saturation => color.saturation = fraction,
            Channel::Value => color.value = fraction,
            Channel::Opacity => color.alpha = fraction,
            Channel::SaturationValue => {
                if fraction <= 0.5 {
                    color.saturation = fraction * 2.0;
                    color.value = 1.0;
                } else {
                    color.saturation = 1.0;
                    color.value = 1.0 - (fraction - 0.5) * 2.0;
                }
            }
        }
    }

    /// Whether the packed color reported by this channel keeps its alpha.
    pub fn carries_alpha(self) -> bool {
        matches!(self, Channel::Opacity)
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Value => "value",
            Channel::Opacity => "opacity",
            Channel::SaturationValue => "saturation/value",
        }
    }
}

impl GradientProvider for Channel {
    fn gradient_stops(&self, color: &Hsva) -> Vec<Argb> {
        match self {
            Channel::Hue => HUE_STOPS.to_vec(),
            Channel::Saturation => vec![
                Hsv::new(color.hue, 0.0, color.value).to_argb(0xFF),
                Hsv::new(color.hue, 1.0, color.value).to_argb(0xFF),
            ],
            Channel::Value => vec![
                Argb::BLACK,
                Hsv::new(color.hue, color.saturation, 1.0).to_argb(0xFF),
            ],
            Channel::Opacity => {
                let hsv = color.hsv();
                vec![hsv.to_argb(0x00), hsv.to_argb(0xFF)]
            }
            Channel::SaturationValue => vec![
                Argb::WHITE,
                Hsv::new(color.hue, 1.0, 1.0).to_argb(0xFF),
                Argb::BLACK,
            ],
        }
    }
}

/// The kinds of linear bar a picker can host, at most one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    Saturation,
    Value,
    Opacity,
    SaturationValue,
}

impl BarKind {
    pub const ALL: [BarKind; 4] = [
        BarKind::Saturation,
        BarKind::Value,
        BarKind::Opacity,
        BarKind::SaturationValue,
    ];

    pub fn channel(self) -> Channel {
        match self {
            BarKind::Saturation => Channel::Saturation,
            BarKind::Value => Channel::Value,
            BarKind::Opacity => Channel::Opacity,
            BarKind::SaturationValue => Channel::SaturationValue,
        }
    }

    /// Slot index, stable across runs.
    pub fn index(self) -> usize {
        match self {
            BarKind::Saturation => 0,
            BarKind::Value => 1,
            BarKind::Opacity => 2,
            BarKind::SaturationValue => 3,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            BarKind::Saturation => "Saturation",
            BarKind::Value => "Value",
            BarKind::Opacity => "Opacity",
            BarKind::SaturationValue => "Saturation / Value",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_channels_round_trip() {
        let mut color = Hsva::default();
        for channel in [Channel::Saturation, Channel::Value, Channel::Opacity] {
            channel.apply_fraction(&mut color, 0.25);
            assert!((channel.fraction_of(&color) - 0.25).abs() < f32::EPSILON);
        }
        assert!((color.saturation - 0.25).abs() < f32::EPSILON);
        assert!((color.value - 0.25).abs() < f32::EPSILON);
        assert!((color.alpha - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_apply_fraction_clamps() {
        let mut color = Hsva::default();
        Channel::Value.apply_fraction(&mut color, 1.5);
        assert_eq!(color.value, 1.0);
        Channel::Value.apply_fraction(&mut color, -0.5);
        assert_eq!(color.value, 0.0);
    }

    #[test]
    fn test_hue_fraction_wraps() {
        let mut color = Hsva::default();
        Channel::Hue.apply_fraction(&mut color, 1.0);
        assert_eq!(color.hue, 0.0);
        Channel::Hue.apply_fraction(&mut color, 0.5);
        assert!((color.hue - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_saturation_value_halves() {
        let mut color = Hsva::default();

        Channel::SaturationValue.apply_fraction(&mut color, 0.25);
        assert!((color.saturation - 0.5).abs() < f32::EPSILON);
        assert_eq!(color.value, 1.0);

        Channel::SaturationValue.apply_fraction(&mut color, 0.75);
        assert_eq!(color.saturation, 1.0);
        assert!((color.value - 0.5).abs() < f32::EPSILON);

        Channel::SaturationValue.apply_fraction(&mut color, 1.0);
        assert_eq!(color.value, 0.0);
    }

    #[test]
    fn test_saturation_value_forward_mapping() {
        // s < v: first half
        let pale = Hsva::new(0.0, 0.4, 1.0, 1.0);
        assert!((Channel::SaturationValue.fraction_of(&pale) - 0.2).abs() < f32::EPSILON);

        // s >= v: second half
        let dark = Hsva::new(0.0, 1.0, 0.6, 1.0);
        assert!((Channel::SaturationValue.fraction_of(&dark) - 0.7).abs() < 1e-6);

        let pure = Hsva::new(0.0, 1.0, 1.0, 1.0);
        assert!((Channel::SaturationValue.fraction_of(&pure) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_gradient_stops() {
        let color = Hsva::new(120.0, 0.5, 0.5, 1.0);

        let value = Channel::Value.gradient_stops(&color);
        assert_eq!(value[0], Argb::BLACK);
        assert_eq!(value[1], Hsv::new(120.0, 0.5, 1.0).to_argb(0xFF));

        let saturation = Channel::Saturation.gradient_stops(&color);
        assert_eq!(saturation[0], Hsv::new(120.0, 0.0, 0.5).to_argb(0xFF));
        assert_eq!(saturation[1], Hsv::new(120.0, 1.0, 0.5).to_argb(0xFF));

        let opacity = Channel::Opacity.gradient_stops(&color);
        assert_eq!(opacity[0].alpha(), 0);
        assert_eq!(opacity[1].alpha(), 0xFF);
        assert_eq!(opacity[0].with_alpha(0xFF), opacity[1]);

        let sv = Channel::SaturationValue.gradient_stops(&color);
        assert_eq!(sv, vec![Argb::WHITE, Argb(0xFF00_FF00), Argb::BLACK]);

        assert_eq!(Channel::Hue.gradient_stops(&color), HUE_STOPS.to_vec());
    }

    #[test]
    fn test_bar_kind_slots() {
        for (i, kind) in BarKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(BarKind::Opacity.channel(), Channel::Opacity);
        assert!(BarKind::Opacity.channel().carries_alpha());
        assert!(!BarKind::Value.channel().carries_alpha());
    }
}
