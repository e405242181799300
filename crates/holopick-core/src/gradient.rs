//! Backend-neutral gradient descriptions.
//!
//! Widgets describe what they want painted; the render crate turns these
//! into peniko brushes.

use crate::color::{Argb, Hsva};
use kurbo::Point;

/// Hue sweep used by the wheel ring: red, yellow, green, cyan, blue, magenta, red.
pub const HUE_STOPS: [Argb; 7] = [
    Argb(0xFFFF_0000),
    Argb(0xFFFF_FF00),
    Argb(0xFF00_FF00),
    Argb(0xFF00_FFFF),
    Argb(0xFF00_00FF),
    Argb(0xFFFF_00FF),
    Argb(0xFFFF_0000),
];

/// Shape of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Linear between two points in widget-local coordinates.
    Linear { start: Point, end: Point },
    /// Full-turn sweep around a center, starting at angle 0 (positive x axis).
    Sweep { center: Point },
}

/// A gradient with evenly spaced color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub stops: Vec<Argb>,
}

impl Gradient {
    pub fn linear(start: Point, end: Point, stops: Vec<Argb>) -> Self {
        Self {
            kind: GradientKind::Linear { start, end },
            stops,
        }
    }

    pub fn sweep(center: Point, stops: Vec<Argb>) -> Self {
        Self {
            kind: GradientKind::Sweep { center },
            stops,
        }
    }

    /// Stop offsets in `[0, 1]`, evenly spaced.
    pub fn offsets(&self) -> impl Iterator<Item = f32> + '_ {
        let last = self.stops.len().saturating_sub(1).max(1) as f32;
        (0..self.stops.len()).map(move |i| i as f32 / last)
    }
}

/// Supplies the color stops a widget paints its track with.
pub trait GradientProvider {
    /// Stops for the given current color, from track start to track end.
    fn gradient_stops(&self, color: &Hsva) -> Vec<Argb>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_stops_close_the_loop() {
        assert_eq!(HUE_STOPS.first(), HUE_STOPS.last());
        assert_eq!(HUE_STOPS.len(), 7);
    }

    #[test]
    fn test_offsets_even() {
        let g = Gradient::linear(Point::ZERO, Point::new(10.0, 0.0), HUE_STOPS.to_vec());
        let offsets: Vec<f32> = g.offsets().collect();
        assert_eq!(offsets.len(), 7);
        assert_eq!(offsets[0], 0.0);
        assert_eq!(offsets[6], 1.0);
        assert!((offsets[3] - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_single_stop_offset() {
        let g = Gradient::sweep(Point::ZERO, vec![Argb::BLACK]);
        let offsets: Vec<f32> = g.offsets().collect();
        assert_eq!(offsets, vec![0.0]);
    }
}
