//! Pointer input delivered to widgets.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are widget-local by the time a widget sees them; the host
/// translates from window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// The gesture was interrupted (pointer left the window, focus lost).
    Cancel,
}

impl PointerEvent {
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => Some(*position),
            PointerEvent::Cancel => None,
        }
    }

    /// The same event shifted by `-origin`, mapping window coordinates into a
    /// widget whose top-left corner sits at `origin`.
    pub fn relative_to(self, origin: Point) -> Self {
        let shift = |p: Point| p - origin.to_vec2();
        match self {
            PointerEvent::Down { position } => PointerEvent::Down { position: shift(position) },
            PointerEvent::Move { position } => PointerEvent::Move { position: shift(position) },
            PointerEvent::Up { position } => PointerEvent::Up { position: shift(position) },
            PointerEvent::Cancel => PointerEvent::Cancel,
        }
    }

    /// Whether this event ends a gesture.
    pub fn is_release(&self) -> bool {
        matches!(self, PointerEvent::Up { .. } | PointerEvent::Cancel)
    }
}

/// Gesture state of a draggable widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// A press was accepted; `slop` is the offset between the touch point
    /// and the pointer center at press time.
    Dragging { slop: Vec2 },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
