//! Placement of the wheel and bars, and pointer routing between them.
//!
//! The wheel sits at the top-left; vertical bars line up to its right and
//! horizontal bars stack below it.

use crate::channel::BarKind;
use crate::geometry::{Orientation, SizeConstraint};
use crate::input::PointerEvent;
use crate::picker::{ColorPicker, EventOutcome};
use kurbo::{Point, Rect, Size};

/// A widget inside a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Wheel,
    Bar(BarKind),
}

/// Where each widget was placed, in window coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickerLayout {
    pub wheel: Rect,
    pub bars: Vec<(BarKind, Rect)>,
}

impl PickerLayout {
    /// Measure every widget of `picker` into `available` space starting at
    /// `origin`, leaving `spacing` between widgets.
    pub fn compute(picker: &mut ColorPicker, origin: Point, available: Size, spacing: f64) -> Self {
        let mut vertical_width = 0.0;
        let mut horizontal_height = 0.0;
        for bar in picker.bars() {
            let size = bar.size();
            match bar.orientation() {
                Orientation::Vertical => vertical_width += size.width + spacing,
                Orientation::Horizontal => horizontal_height += size.height + spacing,
            }
        }

        let wheel_size = picker.wheel_mut().measure(
            SizeConstraint::AtMost(available.width - vertical_width),
            SizeConstraint::AtMost(available.height - horizontal_height),
        );
        let wheel = Rect::from_origin_size(origin, wheel_size);

        let mut bars = Vec::new();
        let mut next_x = wheel.x1 + spacing;
        let mut next_y = wheel.y1 + spacing;
        for bar in picker.bars_mut() {
            match bar.orientation() {
                Orientation::Vertical => {
                    let size = bar.measure(SizeConstraint::AtMost(wheel_size.height));
                    bars.push((bar.kind(), Rect::from_origin_size((next_x, origin.y), size)));
                    next_x += size.width + spacing;
                }
                Orientation::Horizontal => {
                    let size = bar.measure(SizeConstraint::AtMost(available.width));
                    bars.push((bar.kind(), Rect::from_origin_size((origin.x, next_y), size)));
                    next_y += size.height + spacing;
                }
            }
        }

        Self { wheel, bars }
    }

    pub fn rect_of(&self, target: Target) -> Option<Rect> {
        match target {
            Target::Wheel => Some(self.wheel),
            Target::Bar(kind) => self
                .bars
                .iter()
                .find(|(k, _)| *k == kind)
                .map(|(_, rect)| *rect),
        }
    }

    /// The widget whose box contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<Target> {
        if self.wheel.contains(point) {
            return Some(Target::Wheel);
        }
        self.bars
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(kind, _)| Target::Bar(*kind))
    }

    /// Smallest rectangle holding every widget.
    pub fn bounds(&self) -> Rect {
        self.bars
            .iter()
            .fold(self.wheel, |acc, (_, rect)| acc.union(*rect))
    }
}

/// Routes window-space pointer events to widgets, keeping a pressed widget
/// captured until release so drags can leave its box.
#[derive(Debug, Clone, Default)]
pub struct PointerRouter {
    captured: Option<Target>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured(&self) -> Option<Target> {
        self.captured
    }

    pub fn dispatch(
        &mut self,
        picker: &mut ColorPicker,
        layout: &PickerLayout,
        event: PointerEvent,
    ) -> EventOutcome {
        let target = match event {
            PointerEvent::Down { position } => {
                // A press without a preceding release ends the stale drag.
                if let Some(stale) = self.captured.take() {
                    log::debug!("{:?}: press while captured, cancelling drag", stale);
                    Self::send(picker, layout, stale, PointerEvent::Cancel);
                }
                layout.hit_test(position)
            }
            _ => self.captured,
        };
        let Some(target) = target else {
            return EventOutcome::default();
        };
        let outcome = Self::send(picker, layout, target, event);

        match event {
            PointerEvent::Down { .. } if outcome.handled => self.captured = Some(target),
            PointerEvent::Up { .. } | PointerEvent::Cancel => self.captured = None,
            _ => {}
        }
        outcome
    }

    fn send(picker: &mut ColorPicker, layout: &PickerLayout, target: Target, event: PointerEvent) -> EventOutcome {
        let Some(rect) = layout.rect_of(target) else {
            return EventOutcome::default();
        };
        let local = event.relative_to(rect.origin());
        match target {
            Target::Wheel => picker.handle_wheel_event(local),
            Target::Bar(kind) => picker.handle_bar_event(kind, local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BarConfig, PickerConfig};
    use crate::picker::Source;

    fn setup() -> (ColorPicker, PickerLayout) {
        let mut picker = ColorPicker::new(&PickerConfig::default());
        let layout = PickerLayout::compute(&mut picker, Point::new(10.0, 10.0), Size::new(400.0, 600.0), 8.0);
        (picker, layout)
    }

    #[test]
    fn test_stacks_horizontal_bars_under_wheel() {
        let (_, layout) = setup();
        assert_eq!(layout.wheel, Rect::new(10.0, 10.0, 294.0, 294.0));
        assert_eq!(layout.bars.len(), 4);

        let (kind, first) = layout.bars[0];
        assert_eq!(kind, BarKind::Saturation);
        assert_eq!(first.origin(), Point::new(10.0, 302.0));
        assert_eq!(first.size(), Size::new(276.0, 36.0));

        let (_, second) = layout.bars[1];
        assert_eq!(second.y0, first.y1 + 8.0);
    }

    #[test]
    fn test_wheel_shrinks_to_fit() {
        let mut picker = ColorPicker::new(&PickerConfig::default());
        let layout = PickerLayout::compute(&mut picker, Point::ZERO, Size::new(200.0, 600.0), 0.0);
        assert_eq!(layout.wheel.width(), 200.0);
        // Bars are capped by the available width.
        assert_eq!(layout.bars[0].1.width(), 200.0);
        assert_eq!(picker.bar(BarKind::Saturation).unwrap().track().length, 164.0);
    }

    #[test]
    fn test_vertical_bars_beside_wheel() {
        let mut picker = ColorPicker::new(&PickerConfig {
            bars: vec![BarKind::Value],
            bar: BarConfig {
                orientation: Orientation::Vertical,
                ..BarConfig::default()
            },
            ..PickerConfig::default()
        });
        let layout = PickerLayout::compute(&mut picker, Point::ZERO, Size::new(500.0, 500.0), 4.0);
        let (_, rect) = layout.bars[0];
        assert_eq!(rect.origin(), Point::new(288.0, 0.0));
        assert_eq!(rect.size(), Size::new(36.0, 276.0));
    }

    #[test]
    fn test_hit_test_and_bounds() {
        let (_, layout) = setup();
        assert_eq!(layout.hit_test(Point::new(100.0, 100.0)), Some(Target::Wheel));
        assert_eq!(
            layout.hit_test(Point::new(50.0, 320.0)),
            Some(Target::Bar(BarKind::Saturation))
        );
        assert_eq!(layout.hit_test(Point::new(390.0, 590.0)), None);
        assert_eq!(layout.bounds().origin(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_router_captures_bar_drag() {
        let (mut picker, layout) = setup();
        let mut router = PointerRouter::new();
        let bar = layout.rect_of(Target::Bar(BarKind::Value)).unwrap();
        let y = bar.center().y;

        let down = router.dispatch(&mut picker, &layout, PointerEvent::Down { position: Point::new(bar.x0 + 138.0, y) });
        assert!(down.handled);
        assert_eq!(router.captured(), Some(Target::Bar(BarKind::Value)));
        assert!((picker.hsva().value - 0.5).abs() < f32::EPSILON);

        // Dragging far outside the bar still reaches it.
        let outcome = router.dispatch(&mut picker, &layout, PointerEvent::Move { position: Point::new(-500.0, 0.0) });
        assert_eq!(outcome.fan_out.unwrap().source, Source::Bar(BarKind::Value));
        assert_eq!(picker.hsva().value, 0.0);

        router.dispatch(&mut picker, &layout, PointerEvent::Up { position: Point::ZERO });
        assert_eq!(router.captured(), None);
        let stray = router.dispatch(&mut picker, &layout, PointerEvent::Move { position: Point::new(bar.x0 + 138.0, y) });
        assert!(!stray.handled);
    }

    #[test]
    fn test_press_without_release_drops_capture() {
        let (mut picker, layout) = setup();
        let mut router = PointerRouter::new();
        let pointer = picker.wheel().pointer_center() + layout.wheel.origin().to_vec2();

        assert!(router.dispatch(&mut picker, &layout, PointerEvent::Down { position: pointer }).handled);
        assert_eq!(router.captured(), Some(Target::Wheel));

        // The release happened outside the window and never arrived.
        let empty = Point::new(390.0, 590.0);
        let down = router.dispatch(&mut picker, &layout, PointerEvent::Down { position: empty });
        assert!(!down.handled);
        assert_eq!(router.captured(), None);
        assert!(!picker.wheel().is_dragging());

        let hue = picker.wheel().hue();
        let moved = router.dispatch(&mut picker, &layout, PointerEvent::Move { position: Point::new(390.0, 150.0) });
        assert!(!moved.handled);
        assert_eq!(picker.wheel().hue(), hue);
    }

    #[test]
    fn test_press_on_other_widget_ends_stale_drag() {
        let (mut picker, layout) = setup();
        let mut router = PointerRouter::new();
        let pointer = picker.wheel().pointer_center() + layout.wheel.origin().to_vec2();
        router.dispatch(&mut picker, &layout, PointerEvent::Down { position: pointer });

        let bar = layout.rect_of(Target::Bar(BarKind::Value)).unwrap();
        let down = router.dispatch(&mut picker, &layout, PointerEvent::Down { position: Point::new(bar.x0 + 138.0, bar.center().y) });
        assert!(down.handled);
        assert!(!picker.wheel().is_dragging());
        assert_eq!(router.captured(), Some(Target::Bar(BarKind::Value)));
    }

    #[test]
    fn test_router_ignores_wheel_center() {
        let (mut picker, layout) = setup();
        let mut router = PointerRouter::new();
        let outcome = router.dispatch(&mut picker, &layout, PointerEvent::Down { position: layout.wheel.center() });
        assert!(!outcome.handled);
        assert_eq!(router.captured(), None);
    }
}
