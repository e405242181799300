//! Linear color bar: a pointer on a track controlling one channel.

use crate::channel::{BarKind, Channel};
use crate::color::{Argb, Hsva};
use crate::config::BarConfig;
use crate::geometry::{BarTrack, Orientation, SizeConstraint};
use crate::gradient::{Gradient, GradientProvider};
use crate::input::{DragState, PointerEvent};
use crate::listener::Listener;
use crate::snapshot::{BarSnapshot, SnapshotError, SnapshotResult};
use kurbo::{Point, Rect, Size, Vec2};

/// A channel value produced by user interaction with a bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelChange {
    pub kind: BarKind,
    /// The bar's full color after the change.
    pub color: Hsva,
    pub argb: Argb,
}

/// A bar widget for one of the saturation, value, opacity or
/// saturation/value channels.
#[derive(Debug)]
pub struct ColorBar {
    kind: BarKind,
    config: BarConfig,
    track: BarTrack,
    color: Hsva,
    argb: Argb,
    /// Main-axis pointer coordinate, whole pixels.
    pointer_position: f64,
    gradient: Gradient,
    drag: DragState,
    on_change: Listener<Argb>,
    dirty: bool,
}

impl ColorBar {
    /// Create an unmeasured bar at its preferred length showing opaque red.
    pub fn new(kind: BarKind, config: &BarConfig) -> Self {
        let track = BarTrack {
            length: config.length,
            thickness: config.thickness,
            halo_radius: config.pointer_halo_radius,
            orientation: config.orientation,
        };
        let color = Hsva::default();
        let mut bar = Self {
            kind,
            config: *config,
            track,
            color,
            argb: color.to_argb(),
            pointer_position: track.end(),
            gradient: Gradient::linear(Point::ZERO, Point::ZERO, Vec::new()),
            drag: DragState::Idle,
            on_change: Listener::new(),
            dirty: true,
        };
        bar.sync_pointer();
        bar.set_gradient();
        bar.refresh_color();
        bar
    }

    pub fn kind(&self) -> BarKind {
        self.kind
    }

    pub fn channel(&self) -> Channel {
        self.kind.channel()
    }

    /// Current packed color.
    pub fn color(&self) -> Argb {
        self.argb
    }

    pub fn hsva(&self) -> Hsva {
        self.color
    }

    pub fn track(&self) -> &BarTrack {
        &self.track
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn pointer_position(&self) -> f64 {
        self.pointer_position
    }

    pub fn pointer_center(&self) -> Point {
        self.track.pointer_center(self.pointer_position)
    }

    pub fn pointer_radius(&self) -> f64 {
        self.config.pointer_radius
    }

    pub fn pointer_halo_radius(&self) -> f64 {
        self.config.pointer_halo_radius
    }

    /// Fill of the pointer: the bar's current color.
    pub fn pointer_color(&self) -> Argb {
        self.argb
    }

    pub fn bar_rect(&self) -> Rect {
        self.track.bar_rect()
    }

    /// Measured box in widget-local coordinates.
    pub fn size(&self) -> Size {
        self.track.size()
    }

    pub fn orientation(&self) -> Orientation {
        self.track.orientation
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Return and clear the repaint flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Install the change listener, fired with the packed color at most once
    /// per distinct value.
    pub fn set_on_change(&mut self, callback: impl FnMut(Argb) + 'static) {
        self.on_change.set(callback);
    }

    pub fn clear_on_change(&mut self) {
        self.on_change.clear();
    }

    /// Map a main-axis coordinate to the bar's channel and recompute the
    /// packed color. Coordinates off the track are pinned to its ends.
    pub fn calculate_color(&mut self, coord: f64) {
        let fraction = self.track.fraction_at(coord) as f32;
        self.channel().apply_fraction(&mut self.color, fraction);
        self.refresh_color();
    }

    /// Rebuild the track gradient from the current color.
    pub fn set_gradient(&mut self) {
        let (start, end) = self.track.gradient_line();
        let stops = self.channel().gradient_stops(&self.color);
        self.gradient = Gradient::linear(start, end, stops);
        self.dirty = true;
    }

    /// Change the hue without moving the pointer.
    pub fn set_hue(&mut self, hue: f32) {
        self.color.hue = hue;
        self.set_gradient();
        self.refresh_color();
    }

    /// Change the saturation without moving the pointer.
    pub fn set_saturation(&mut self, saturation: f32) {
        self.color.saturation = saturation.clamp(0.0, 1.0);
        self.set_gradient();
        self.refresh_color();
    }

    /// Change the value without moving the pointer.
    pub fn set_value(&mut self, value: f32) {
        self.color.value = value.clamp(0.0, 1.0);
        self.set_gradient();
        self.refresh_color();
    }

    /// Replace the whole color and move the pointer to match it.
    pub fn set_color(&mut self, color: impl Into<Hsva>) {
        self.color = color.into();
        self.sync_pointer();
        self.set_gradient();
        self.refresh_color();
    }

    /// Set the track length, keeping the channel value.
    pub fn resize(&mut self, length: f64) {
        self.track.length = length.max(0.0);
        self.sync_pointer();
        self.set_gradient();
    }

    /// Fit the bar to a main-axis constraint and return the measured box.
    pub fn measure(&mut self, constraint: SizeConstraint) -> Size {
        let length =
            BarTrack::measure_length(self.config.length, self.config.pointer_halo_radius, constraint);
        self.resize(length);
        self.size()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
        self.track.orientation = orientation;
        self.set_gradient();
    }

    /// Feed a widget-local pointer event.
    ///
    /// A press on the track already moves the pointer and reports a change,
    /// as does every move while dragging. Returns `None` when the event was
    /// ignored or only ended a gesture.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<ChannelChange> {
        match event {
            PointerEvent::Down { position } => {
                let coord = self.track.axis_coord(position);
                if !self.track.contains(coord) {
                    return None;
                }
                log::debug!("{} bar: drag start at {:.1}", self.channel().name(), coord);
                self.drag = DragState::Dragging { slop: Vec2::ZERO };
                Some(self.track_to(coord))
            }
            PointerEvent::Move { position } => {
                if !self.drag.is_dragging() {
                    return None;
                }
                Some(self.track_to(self.track.axis_coord(position)))
            }
            PointerEvent::Up { .. } | PointerEvent::Cancel => {
                if self.drag.is_dragging() {
                    log::debug!("{} bar: drag end at {}", self.channel().name(), self.argb.to_hex());
                }
                self.drag = DragState::Idle;
                None
            }
        }
    }

    pub fn snapshot(&self) -> BarSnapshot {
        BarSnapshot {
            kind: self.kind,
            color: self.color,
        }
    }

    /// Restore from a snapshot. On error the bar is left untouched.
    pub fn restore(&mut self, snapshot: &BarSnapshot) -> SnapshotResult<()> {
        if snapshot.kind != self.kind {
            return Err(SnapshotError::KindMismatch {
                expected: self.kind,
                found: snapshot.kind,
            });
        }
        snapshot.validate()?;
        self.set_color(snapshot.color);
        Ok(())
    }

    fn track_to(&mut self, coord: f64) -> ChannelChange {
        let position = self.track.clamp(coord.round());
        self.pointer_position = position;
        self.calculate_color(position);
        self.on_change.notify(self.argb);
        ChannelChange {
            kind: self.kind,
            color: self.color,
            argb: self.argb,
        }
    }

    fn sync_pointer(&mut self) {
        let fraction = f64::from(self.channel().fraction_of(&self.color));
        self.pointer_position = self.track.position_of(fraction);
        self.dirty = true;
    }

    fn refresh_color(&mut self) {
        if !self.channel().carries_alpha() {
            self.color.alpha = 1.0;
        }
        self.argb = self.color.to_argb();
        self.dirty = true;
    }
}
