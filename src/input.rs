//! Input model: the interaction state machine shared by the move and resize
//! controllers.
//!
//! At most one session exists at a time. A session is only ever started from
//! [`InputState::Idle`], which is what keeps moves and resizes exclusive.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ElementId;
use crate::drag::MoveSession;
use crate::geometry::Geometry;
use crate::resize::ResizeSession;

/// The active gesture between pointer-down and pointer-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// An element is being dragged by its drag handle.
    Moving(MoveSession),
    /// The selected element is being resized by one of its handles.
    Resizing(ResizeSession),
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Element under the active session, with its live geometry.
    #[must_use]
    pub fn active(&self) -> Option<(ElementId, Geometry)> {
        match self {
            Self::Idle => None,
            Self::Moving(s) => Some((s.id, s.preview())),
            Self::Resizing(s) => Some((s.id, s.preview())),
        }
    }

    /// CSS cursor for the current gesture.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        match self {
            Self::Idle => "default",
            Self::Moving(_) => "move",
            Self::Resizing(s) => s.handle.cursor(),
        }
    }
}
