//! Color representations shared by every widget.
//!
//! `Hsv`/`Hsva` are the working coordinates widgets mutate; `Argb` is the
//! packed 32-bit form handed to listeners and used for change detection.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// A packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);

    /// Pack the four 8-bit channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Pack an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Replace the alpha channel.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Convert to HSV plus alpha.
    ///
    /// Achromatic colors (grey, black, white) report hue 0.
    pub fn to_hsva(self) -> Hsva {
        let r = self.red() as f32 / 255.0;
        let g = self.green() as f32 / 255.0;
        let b = self.blue() as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        let mut hue = if delta <= 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        if hue >= 360.0 {
            hue -= 360.0;
        }

        Hsva {
            hue,
            saturation,
            value: max,
            alpha: self.alpha() as f32 / 255.0,
        }
    }

    /// Format as `#RRGGBB`, or `#AARRGGBB` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.alpha() == 0xFF {
            format!("#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            format!("#{:08X}", self.0)
        }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self(0xFF00_0000 | value)),
            8 => Some(Self(value)),
            _ => None,
        }
    }
}

impl From<Argb> for Color {
    fn from(argb: Argb) -> Self {
        Color::from_rgba8(argb.red(), argb.green(), argb.blue(), argb.alpha())
    }
}

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Pack with the given 8-bit alpha.
    pub fn to_argb(self, alpha: u8) -> Argb {
        let (r, g, b) = hsv_to_rgb(self.hue, self.saturation, self.value);
        Argb::from_argb(alpha, r, g, b)
    }

    pub fn with_alpha(self, alpha: f32) -> Hsva {
        Hsva {
            hue: self.hue,
            saturation: self.saturation,
            value: self.value,
            alpha,
        }
    }
}

/// HSV with an alpha channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    pub alpha: f32,
}

impl Default for Hsva {
    /// Opaque, fully saturated red.
    fn default() -> Self {
        Self::new(0.0, 1.0, 1.0, 1.0)
    }
}

impl Hsva {
    pub const fn new(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha,
        }
    }

    pub fn hsv(self) -> Hsv {
        Hsv::new(self.hue, self.saturation, self.value)
    }

    pub fn alpha_u8(self) -> u8 {
        (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn to_argb(self) -> Argb {
        self.hsv().to_argb(self.alpha_u8())
    }

    /// The same color at full opacity.
    pub fn opaque(self) -> Self {
        Self { alpha: 1.0, ..self }
    }
}

impl From<Argb> for Hsva {
    fn from(argb: Argb) -> Self {
        argb.to_hsva()
    }
}

/// Convert HSV to 8-bit RGB, rounding each channel to the nearest step.
///
/// Hue is wrapped into `[0, 360)`; saturation and value are clamped.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);

    let to_byte = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;

    if s <= 0.0 {
        let grey = to_byte(v);
        return (grey, grey, grey);
    }

    let sector = h / 60.0;
    let index = sector.floor() as u32 % 6;
    let f = sector - sector.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match index {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (to_byte(r), to_byte(g), to_byte(b))
}
