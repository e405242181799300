//! Measurement and coordinate mapping for bars and the wheel.
//!
//! All coordinates are widget-local: the origin is the top-left corner of the
//! widget's measured box.

use crate::config::WheelConfig;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Axis a bar runs along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Space offered by the parent along one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConstraint {
    /// The widget must take exactly this size.
    Exact(f64),
    /// The widget may take up to this size.
    AtMost(f64),
    /// No constraint; the widget picks its intrinsic size.
    Unspecified,
}

impl SizeConstraint {
    /// Resolve against the widget's intrinsic size.
    pub fn resolve(self, intrinsic: f64) -> f64 {
        match self {
            SizeConstraint::Exact(size) => size,
            SizeConstraint::AtMost(size) => intrinsic.min(size),
            SizeConstraint::Unspecified => intrinsic,
        }
    }
}

/// The one-dimensional track a bar's pointer moves along.
///
/// The track spans `[halo_radius, halo_radius + length]` on the main axis so
/// the pointer halo is never clipped at either end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarTrack {
    pub length: f64,
    pub thickness: f64,
    pub halo_radius: f64,
    pub orientation: Orientation,
}

impl BarTrack {
    pub fn start(&self) -> f64 {
        self.halo_radius
    }

    pub fn end(&self) -> f64 {
        self.halo_radius + self.length
    }

    /// Pin a main-axis coordinate to the track.
    pub fn clamp(&self, coord: f64) -> f64 {
        coord.clamp(self.start(), self.end())
    }

    /// Whether a main-axis coordinate lies on the track.
    pub fn contains(&self, coord: f64) -> bool {
        coord >= self.start() && coord <= self.end()
    }

    /// Normalized fraction for a main-axis coordinate, clamped to `[0, 1]`.
    pub fn fraction_at(&self, coord: f64) -> f64 {
        if self.length <= 0.0 {
            return 0.0;
        }
        (self.clamp(coord) - self.halo_radius) / self.length
    }

    /// Main-axis coordinate for a fraction, rounded to the nearest pixel.
    pub fn position_of(&self, fraction: f64) -> f64 {
        (fraction.clamp(0.0, 1.0) * self.length).round() + self.halo_radius
    }

    /// Pick the main-axis component of a widget-local point.
    pub fn axis_coord(&self, point: Point) -> f64 {
        match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Center of the pointer at the given main-axis position.
    pub fn pointer_center(&self, position: f64) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(position, self.halo_radius),
            Orientation::Vertical => Point::new(self.halo_radius, position),
        }
    }

    /// The drawn bar rectangle.
    pub fn bar_rect(&self) -> Rect {
        let half = self.thickness / 2.0;
        let cross_min = self.halo_radius - half;
        let cross_max = self.halo_radius + half;
        match self.orientation {
            Orientation::Horizontal => Rect::new(self.start(), cross_min, self.end(), cross_max),
            Orientation::Vertical => Rect::new(cross_min, self.start(), cross_max, self.end()),
        }
    }

    /// Endpoints of the gradient line, along the bar's center line.
    pub fn gradient_line(&self) -> (Point, Point) {
        (self.pointer_center(self.start()), self.pointer_center(self.end()))
    }

    /// Measured box: track plus halo on both ends, halo diameter across.
    pub fn size(&self) -> Size {
        let main = self.length + 2.0 * self.halo_radius;
        let cross = 2.0 * self.halo_radius;
        match self.orientation {
            Orientation::Horizontal => Size::new(main, cross),
            Orientation::Vertical => Size::new(cross, main),
        }
    }

    /// Track length that fits the main-axis constraint.
    pub fn measure_length(preferred_length: f64, halo_radius: f64, constraint: SizeConstraint) -> f64 {
        let intrinsic = preferred_length + 2.0 * halo_radius;
        (constraint.resolve(intrinsic) - 2.0 * halo_radius).max(0.0)
    }
}

/// Convert a wheel angle in radians to a hue in degrees.
///
/// Angle 0 points along +x; the result is `((angle / 2π) mod 1) * 360`.
pub fn angle_to_hue(angle: f64) -> f32 {
    let mut unit = angle / TAU;
    if unit < 0.0 {
        unit += 1.0;
    }
    let hue = (unit * 360.0) as f32;
    if hue >= 360.0 { hue - 360.0 } else { hue }
}

/// Inverse of [`angle_to_hue`], yielding an angle in `(-π, π]`.
pub fn hue_to_angle(hue: f32) -> f64 {
    let mut unit = f64::from(hue.rem_euclid(360.0)) / 360.0;
    if unit > 0.5 {
        unit -= 1.0;
    }
    unit * TAU
}

/// Resolved wheel dimensions after measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    /// Side of the square measured box.
    pub size: f64,
    /// Ring radius (center line of the stroked ring).
    pub radius: f64,
    pub thickness: f64,
    pub center_radius: f64,
    pub center_halo_radius: f64,
    pub pointer_radius: f64,
    pub pointer_halo_radius: f64,
}

impl WheelGeometry {
    /// Measure the wheel inside the offered constraints.
    ///
    /// The box is square (the smaller resolved dimension). The ring radius
    /// leaves room for the ring thickness and the pointer halo; the center
    /// swatch radii scale with the ring.
    pub fn measure(config: &WheelConfig, width: SizeConstraint, height: SizeConstraint) -> Self {
        let intrinsic = 2.0 * (config.radius + config.pointer_halo_radius);
        let side = width.resolve(intrinsic).min(height.resolve(intrinsic)).max(0.0);
        let radius = (side / 2.0 - config.thickness - config.pointer_halo_radius).max(0.0);
        let scale = if config.radius > 0.0 { radius / config.radius } else { 0.0 };

        Self {
            size: side,
            radius,
            thickness: config.thickness,
            center_radius: (config.center_radius * scale).floor(),
            center_halo_radius: (config.center_halo_radius * scale).floor(),
            pointer_radius: config.pointer_radius,
            pointer_halo_radius: config.pointer_halo_radius,
        }
    }

    /// Wheel center in widget-local coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Offset of a widget-local point from the wheel center.
    pub fn to_centered(&self, point: Point) -> Vec2 {
        point - self.center()
    }

    /// Pointer center relative to the wheel center.
    pub fn pointer_offset(&self, angle: f64) -> Vec2 {
        Vec2::new(self.radius * angle.cos(), self.radius * angle.sin())
    }

    /// Whether a centered offset falls in the pointer's square hit box.
    pub fn pointer_hit(&self, angle: f64, offset: Vec2) -> bool {
        let pointer = self.pointer_offset(angle);
        let halo = self.pointer_halo_radius;
        (offset.x - pointer.x).abs() <= halo && (offset.y - pointer.y).abs() <= halo
    }

    /// Whether a centered offset falls in the ring's touch band.
    pub fn ring_hit(&self, offset: Vec2) -> bool {
        let distance = offset.hypot();
        let halo = self.pointer_halo_radius;
        distance >= self.radius - halo && distance <= self.radius + halo
    }

    /// Bounding box of the ring's center line.
    pub fn ring_rect(&self) -> Rect {
        let c = self.center();
        Rect::new(c.x - self.radius, c.y - self.radius, c.x + self.radius, c.y + self.radius)
    }
}

/// Angle the wheel starts at (pointer at the top, hue 270).
pub const INITIAL_ANGLE: f64 = -PI / 2.0;
