//! Translation of winit pointer input into picker events.

use holopick_core::{ColorPicker, EventOutcome, PickerLayout, PointerEvent, PointerRouter};
use kurbo::Point;
use winit::event::{ElementState, MouseButton, TouchPhase};

/// Turns mouse and touch input into `PointerEvent`s and routes them.
///
/// All positions are logical pixels. Only the left button and the first
/// finger down drive the picker.
#[derive(Debug, Default)]
pub struct EventHandler {
    router: PointerRouter,
    /// Last known cursor position.
    cursor: Point,
    /// Finger currently driving the picker.
    touch_id: Option<u64>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Whether a widget holds the pointer.
    pub fn is_capturing(&self) -> bool {
        self.router.captured().is_some()
    }

    pub fn cursor_moved(&mut self, position: Point) -> PointerEvent {
        self.cursor = position;
        PointerEvent::Move { position }
    }

    pub fn mouse_input(&mut self, button: MouseButton, state: ElementState) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }
        let position = self.cursor;
        Some(match state {
            ElementState::Pressed => PointerEvent::Down { position },
            ElementState::Released => PointerEvent::Up { position },
        })
    }

    pub fn touch(&mut self, id: u64, phase: TouchPhase, position: Point) -> Option<PointerEvent> {
        match phase {
            TouchPhase::Started => {
                if self.touch_id.is_some() {
                    return None;
                }
                self.touch_id = Some(id);
                self.cursor = position;
                Some(PointerEvent::Down { position })
            }
            _ if self.touch_id != Some(id) => None,
            TouchPhase::Moved => Some(self.cursor_moved(position)),
            TouchPhase::Ended => {
                self.touch_id = None;
                Some(PointerEvent::Up { position })
            }
            TouchPhase::Cancelled => {
                self.touch_id = None;
                Some(PointerEvent::Cancel)
            }
        }
    }

    /// Cancel any drag when the window loses focus.
    pub fn focus_lost(&mut self) -> Option<PointerEvent> {
        self.touch_id = None;
        self.is_capturing().then_some(PointerEvent::Cancel)
    }

    pub fn dispatch(
        &mut self,
        picker: &mut ColorPicker,
        layout: &PickerLayout,
        event: PointerEvent,
    ) -> EventOutcome {
        let outcome = self.router.dispatch(picker, layout, event);
        if let Some(fan_out) = &outcome.fan_out {
            log::debug!(
                "{:?} selected {} ({} bar updates)",
                fan_out.source,
                fan_out.color.to_hex(),
                fan_out.pushes.len()
            );
        }
        outcome
    }
}
