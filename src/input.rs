//! Drag gesture model: the per-session context and the per-element state machine.
//!
//! A `DragSession` is created on press and carries everything needed to turn
//! later pointer positions into element positions: the pointer-to-corner
//! offset and the element's bounding box, both captured once at press time.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::{Point, Rect, Viewport, clamp_axis};

/// Context of one press-to-release interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer document position minus the element origin at press time.
    pub offset: Point,
    /// Element bounding box at press time. Not re-measured during the drag.
    pub rect: Rect,
}

impl DragSession {
    /// Start a session for a press at `pointer` (document space) on an element with bounds `rect`.
    #[must_use]
    pub fn begin(pointer: Point, rect: Rect) -> Self {
        let origin = rect.origin();
        Self {
            offset: Point::new(pointer.x - origin.x, pointer.y - origin.y),
            rect,
        }
    }

    /// Where the element should be placed for a pointer at `pointer` (document space),
    /// clamped so the captured box stays inside `viewport`.
    #[must_use]
    pub fn target(&self, pointer: Point, viewport: &Viewport) -> Point {
        let max = viewport.max_origin(&self.rect);
        Point {
            x: clamp_axis(pointer.x - self.offset.x, max.x),
            y: clamp_axis(pointer.y - self.offset.y, max.y),
        }
    }
}

/// Per-element drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Waiting for the next press.
    #[default]
    Idle,
    /// Between press and release.
    Dragging(DragSession),
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}
