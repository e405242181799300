//! Circular hue selector with old/new center swatches.

use crate::channel::Channel;
use crate::color::{Argb, Hsv, Hsva};
use crate::config::WheelConfig;
use crate::geometry::{INITIAL_ANGLE, SizeConstraint, WheelGeometry, angle_to_hue, hue_to_angle};
use crate::gradient::{Gradient, GradientProvider};
use crate::input::{DragState, PointerEvent};
use crate::listener::Listener;
use crate::snapshot::{SnapshotResult, WheelSnapshot};
use kurbo::{Point, Size, Vec2};

/// Outcome of feeding a pointer event to the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelChange {
    /// The event was not for the wheel; the host may route it elsewhere.
    Ignored,
    /// A press was accepted and a drag started.
    Pressed,
    /// The drag moved the pointer to a new hue (degrees).
    Hue(f32),
    /// The drag ended with this center color.
    Released { selected: Argb },
}

impl WheelChange {
    pub fn is_handled(&self) -> bool {
        !matches!(self, WheelChange::Ignored)
    }
}

/// The hue wheel.
///
/// The pointer angle is the authoritative hue. Saturation, value and alpha
/// come from whatever was last set as the new center color.
#[derive(Debug)]
pub struct ColorWheel {
    config: WheelConfig,
    geometry: WheelGeometry,
    angle: f64,
    color: Hsva,
    pointer_color: Argb,
    center_new: Argb,
    center_old: Option<Argb>,
    show_old: bool,
    touch_anywhere: bool,
    drag: DragState,
    on_color_changed: Listener<Argb>,
    on_color_selected: Listener<Argb>,
    on_hue_changed: Listener<f32>,
    dirty: bool,
}

impl ColorWheel {
    /// Create a wheel at its intrinsic size with the pointer at the top.
    pub fn new(config: &WheelConfig) -> Self {
        let geometry =
            WheelGeometry::measure(config, SizeConstraint::Unspecified, SizeConstraint::Unspecified);
        let mut wheel = Self {
            config: *config,
            geometry,
            angle: INITIAL_ANGLE,
            color: Hsva::default(),
            pointer_color: Argb::BLACK,
            center_new: Argb::BLACK,
            center_old: None,
            show_old: true,
            touch_anywhere: true,
            drag: DragState::Idle,
            on_color_changed: Listener::new(),
            on_color_selected: Listener::new(),
            on_hue_changed: Listener::new(),
            dirty: true,
        };
        wheel.set_angle(INITIAL_ANGLE);
        wheel.center_new = wheel.color.to_argb();
        wheel.center_old = Some(wheel.center_new);
        wheel
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn hue(&self) -> f32 {
        self.color.hue
    }

    pub fn hsva(&self) -> Hsva {
        self.color
    }

    /// The live (new) center color.
    pub fn color(&self) -> Argb {
        self.center_new
    }

    /// Fully saturated color of the current hue, used to fill the pointer.
    pub fn pointer_color(&self) -> Argb {
        self.pointer_color
    }

    /// Pointer center in widget-local coordinates.
    pub fn pointer_center(&self) -> Point {
        self.geometry.center() + self.geometry.pointer_offset(self.angle)
    }

    /// Ring gradient, swept around the wheel center.
    pub fn gradient(&self) -> Gradient {
        Gradient::sweep(self.geometry.center(), Channel::Hue.gradient_stops(&self.color))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Measure into the offered constraints; the wheel is always square.
    pub fn measure(&mut self, width: SizeConstraint, height: SizeConstraint) -> Size {
        self.geometry = WheelGeometry::measure(&self.config, width, height);
        self.dirty = true;
        Size::new(self.geometry.size, self.geometry.size)
    }

    /// Move the pointer without notifying listeners.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
        self.color.hue = angle_to_hue(angle);
        self.pointer_color = Hsv::new(self.color.hue, 1.0, 1.0).to_argb(0xFF);
        self.dirty = true;
    }

    /// Move the pointer to a hue without notifying listeners.
    pub fn set_hue(&mut self, hue: f32) {
        self.set_angle(hue_to_angle(hue));
    }

    /// Show `color` in the new half of the center.
    ///
    /// Saturation, value and alpha are taken from `color`; the hue stays
    /// with the pointer angle. The first color ever set also becomes the old
    /// color if none is present.
    pub fn set_new_center_color(&mut self, color: impl Into<Hsva>) {
        let incoming = color.into();
        self.color.saturation = incoming.saturation;
        self.color.value = incoming.value;
        self.color.alpha = incoming.alpha;
        self.center_new = incoming.to_argb();
        if self.center_old.is_none() {
            self.center_old = Some(self.center_new);
        }
        self.dirty = true;
        self.on_color_changed.notify(self.center_new);
    }

    pub fn set_old_center_color(&mut self, color: Argb) {
        self.center_old = Some(color);
        self.dirty = true;
    }

    pub fn clear_old_center_color(&mut self) {
        self.center_old = None;
        self.dirty = true;
    }

    pub fn old_center_color(&self) -> Option<Argb> {
        self.center_old
    }

    pub fn set_show_old_center_color(&mut self, show: bool) {
        self.show_old = show;
        self.dirty = true;
    }

    pub fn show_old_center_color(&self) -> bool {
        self.show_old
    }

    /// Accept presses anywhere on the ring instead of only on the pointer.
    pub fn set_touch_anywhere_enabled(&mut self, enabled: bool) {
        self.touch_anywhere = enabled;
    }

    pub fn touch_anywhere_enabled(&self) -> bool {
        self.touch_anywhere
    }

    /// Fired with the new center color on every visual change.
    pub fn set_on_color_changed(&mut self, callback: impl FnMut(Argb) + 'static) {
        self.on_color_changed.set(callback);
    }

    /// Fired with the new center color when a drag ends.
    pub fn set_on_color_selected(&mut self, callback: impl FnMut(Argb) + 'static) {
        self.on_color_selected.set(callback);
    }

    /// Fired with the hue in degrees while dragging.
    pub fn set_on_hue_changed(&mut self, callback: impl FnMut(f32) + 'static) {
        self.on_hue_changed.set(callback);
    }

    /// Feed a widget-local pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> WheelChange {
        match event {
            PointerEvent::Down { position } => {
                let offset = self.geometry.to_centered(position);
                if self.geometry.pointer_hit(self.angle, offset) {
                    let slop = offset - self.geometry.pointer_offset(self.angle);
                    self.drag = DragState::Dragging { slop };
                } else if self.touch_anywhere && self.geometry.ring_hit(offset) {
                    self.drag = DragState::Dragging { slop: Vec2::ZERO };
                } else {
                    self.drag = DragState::Idle;
                    return WheelChange::Ignored;
                }
                log::debug!("wheel: drag start at hue {:.1}", self.color.hue);
                self.dirty = true;
                WheelChange::Pressed
            }
            PointerEvent::Move { position } => {
                let DragState::Dragging { slop } = self.drag else {
                    return WheelChange::Ignored;
                };
                let offset = self.geometry.to_centered(position) - slop;
                self.set_angle(offset.y.atan2(offset.x));
                let hue = self.color.hue;
                self.set_new_center_color(self.color);
                self.on_hue_changed.notify(hue);
                WheelChange::Hue(hue)
            }
            PointerEvent::Up { .. } | PointerEvent::Cancel => {
                if !self.drag.is_dragging() {
                    return WheelChange::Ignored;
                }
                self.drag = DragState::Idle;
                self.dirty = true;
                let selected = self.center_new;
                log::debug!("wheel: drag end at {}", selected.to_hex());
                self.on_color_selected.notify(selected);
                WheelChange::Released { selected }
            }
        }
    }

    pub fn snapshot(&self) -> WheelSnapshot {
        WheelSnapshot {
            angle: self.angle,
            old_color: self.center_old,
            show_old_color: self.show_old,
        }
    }

    /// Restore angle, old color and the show-old flag. On error the wheel
    /// is left untouched.
    pub fn restore(&mut self, snapshot: &WheelSnapshot) -> SnapshotResult<()> {
        snapshot.validate()?;
        self.set_angle(snapshot.angle);
        self.center_old = snapshot.old_color;
        self.show_old = snapshot.show_old_color;
        self.center_new = self.color.to_argb();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::f64::consts::PI;
    use std::rc::Rc;

    fn wheel() -> ColorWheel {
        ColorWheel::new(&WheelConfig::default())
    }

    /// Widget-local point at `angle` on the ring.
    fn on_ring(w: &ColorWheel, angle: f64) -> Point {
        w.geometry().center() + w.geometry().pointer_offset(angle)
    }

    #[test]
    fn test_initial_state() {
        let w = wheel();
        assert!((w.hue() - 270.0).abs() < 1e-4);
        assert_eq!(w.color(), Hsv::new(270.0, 1.0, 1.0).to_argb(0xFF));
        assert_eq!(w.old_center_color(), Some(w.color()));
        assert_eq!(w.pointer_color(), w.color());
        assert!(w.show_old_center_color());
        assert!(w.touch_anywhere_enabled());
    }

    #[test]
    fn test_press_on_pointer_records_slop() {
        let mut w = wheel();
        let pointer = w.pointer_center();
        let press = pointer + Vec2::new(5.0, 3.0);
        assert_eq!(w.handle_pointer_event(PointerEvent::Down { position: press }), WheelChange::Pressed);

        // Moving by zero keeps the angle: the slop prevents a jump.
        let change = w.handle_pointer_event(PointerEvent::Move { position: press });
        assert!(matches!(change, WheelChange::Hue(h) if (h - 270.0).abs() < 1e-3));
    }

    #[test]
    fn test_press_rejected_off_ring() {
        let mut w = wheel();
        let center = w.geometry().center();
        assert_eq!(
            w.handle_pointer_event(PointerEvent::Down { position: center }),
            WheelChange::Ignored
        );
        assert!(!w.is_dragging());
        assert_eq!(
            w.handle_pointer_event(PointerEvent::Move { position: center }),
            WheelChange::Ignored
        );
        assert_eq!(w.handle_pointer_event(PointerEvent::Cancel), WheelChange::Ignored);
    }

    #[test]
    fn test_touch_anywhere_toggle() {
        let mut w = wheel();
        let right = on_ring(&w, 0.0);

        w.set_touch_anywhere_enabled(false);
        assert!(!w.handle_pointer_event(PointerEvent::Down { position: right }).is_handled());

        w.set_touch_anywhere_enabled(true);
        assert!(w.handle_pointer_event(PointerEvent::Down { position: right }).is_handled());
        let change = w.handle_pointer_event(PointerEvent::Move { position: right });
        assert_eq!(change, WheelChange::Hue(0.0));
        assert_eq!(w.color(), Argb(0xFFFF_0000));
    }

    #[test]
    fn test_drag_sweeps_hue() {
        let mut w = wheel();
        w.handle_pointer_event(PointerEvent::Down { position: w.pointer_center() });

        let bottom = on_ring(&w, PI / 2.0);
        let change = w.handle_pointer_event(PointerEvent::Move { position: bottom });
        assert!(matches!(change, WheelChange::Hue(h) if (h - 90.0).abs() < 1e-3));
        assert!((w.angle() - PI / 2.0).abs() < 1e-9);

        let left = on_ring(&w, PI);
        let change = w.handle_pointer_event(PointerEvent::Move { position: left });
        assert!(matches!(change, WheelChange::Hue(h) if (h - 180.0).abs() < 1e-3));
        assert_eq!(w.color(), Argb(0xFF00_FFFF));
    }

    #[test]
    fn test_selected_fires_once_per_gesture() {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let changed = Rc::new(RefCell::new(0));
        let mut w = wheel();
        let sink = selected.clone();
        w.set_on_color_selected(move |c| sink.borrow_mut().push(c));
        let count = changed.clone();
        w.set_on_color_changed(move |_| *count.borrow_mut() += 1);

        w.handle_pointer_event(PointerEvent::Down { position: w.pointer_center() });
        for i in 0..10 {
            let angle = -PI / 2.0 + i as f64 * 0.1;
            w.handle_pointer_event(PointerEvent::Move { position: on_ring(&w, angle) });
        }
        let released = w.handle_pointer_event(PointerEvent::Up { position: Point::ZERO });
        assert!(matches!(released, WheelChange::Released { .. }));
        assert_eq!(selected.borrow().len(), 1);
        assert_eq!(*changed.borrow(), 10);

        // A second gesture that ends on the same color does not re-fire.
        w.handle_pointer_event(PointerEvent::Down { position: w.pointer_center() });
        w.handle_pointer_event(PointerEvent::Move { position: w.pointer_center() });
        w.handle_pointer_event(PointerEvent::Cancel);
        assert_eq!(selected.borrow().len(), 1);

        // A gesture that ends elsewhere fires again.
        w.handle_pointer_event(PointerEvent::Down { position: w.pointer_center() });
        w.handle_pointer_event(PointerEvent::Move { position: on_ring(&w, 0.0) });
        w.handle_pointer_event(PointerEvent::Up { position: Point::ZERO });
        assert_eq!(selected.borrow().len(), 2);
        assert_eq!(selected.borrow()[1], Argb(0xFFFF_0000));
    }

    #[test]
    fn test_cancel_selects_changed_color() {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let mut w = wheel();
        let sink = selected.clone();
        w.set_on_color_selected(move |c| sink.borrow_mut().push(c));

        w.handle_pointer_event(PointerEvent::Down { position: w.pointer_center() });
        w.handle_pointer_event(PointerEvent::Move { position: on_ring(&w, 0.0) });
        assert!(selected.borrow().is_empty());

        let cancelled = w.handle_pointer_event(PointerEvent::Cancel);
        assert!(matches!(cancelled, WheelChange::Released { .. }));
        assert!(!w.is_dragging());
        assert_eq!(*selected.borrow(), vec![Argb(0xFFFF_0000)]);
    }

    #[test]
    fn test_hue_listener() {
        let hues = Rc::new(RefCell::new(Vec::new()));
        let mut w = wheel();
        let sink = hues.clone();
        w.set_on_hue_changed(move |h| sink.borrow_mut().push(h));

        w.handle_pointer_event(PointerEvent::Down { position: w.pointer_center() });
        w.handle_pointer_event(PointerEvent::Move { position: on_ring(&w, 0.0) });
        w.handle_pointer_event(PointerEvent::Move { position: on_ring(&w, 0.0) });
        assert_eq!(*hues.borrow(), vec![0.0]);
    }

    #[test]
    fn test_new_center_color_keeps_hue() {
        let mut w = wheel();
        w.set_new_center_color(Argb::BLACK);
        assert_eq!(w.color(), Argb::BLACK);
        assert!((w.hue() - 270.0).abs() < 1e-4);
        assert_eq!(w.hsva().value, 0.0);
    }

    #[test]
    fn test_old_color_unset_then_first_new() {
        let mut w = wheel();
        w.clear_old_center_color();
        assert_eq!(w.old_center_color(), None);

        // Opaque black is a legitimate old color.
        w.set_new_center_color(Argb::BLACK);
        assert_eq!(w.old_center_color(), Some(Argb::BLACK));

        w.set_new_center_color(Argb::WHITE);
        assert_eq!(w.old_center_color(), Some(Argb::BLACK));

        w.set_old_center_color(Argb(0xFF12_3456));
        assert_eq!(w.old_center_color(), Some(Argb(0xFF12_3456)));
    }

    #[test]
    fn test_measure_resizes_ring() {
        let mut w = wheel();
        let size = w.measure(SizeConstraint::Exact(200.0), SizeConstraint::Exact(300.0));
        assert_eq!(size, Size::new(200.0, 200.0));
        assert_eq!(w.geometry().radius, 74.0);
        assert_eq!(w.geometry().center(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut a = wheel();
        a.set_hue(45.0);
        a.set_old_center_color(Argb::BLACK);
        a.set_show_old_center_color(false);
        let snapshot = a.snapshot();

        let mut b = wheel();
        b.restore(&snapshot).unwrap();
        assert!((b.hue() - 45.0).abs() < 1e-3);
        assert_eq!(b.old_center_color(), Some(Argb::BLACK));
        assert!(!b.show_old_center_color());

        let bad = WheelSnapshot {
            angle: f64::INFINITY,
            ..snapshot
        };
        let before = b.angle();
        assert!(b.restore(&bad).is_err());
        assert_eq!(b.angle(), before);
    }

    #[test]
    fn test_gradient_is_sweep_around_center() {
        let w = wheel();
        let gradient = w.gradient();
        assert_eq!(gradient.stops.len(), 7);
        assert_eq!(
            gradient.kind,
            crate::gradient::GradientKind::Sweep { center: w.geometry().center() }
        );
    }
}
