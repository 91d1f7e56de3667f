//! Pointer input classification for the writing surface.

use crate::geometry::ViewPoint;
use serde::{Deserialize, Serialize};

/// The physical tool that produced a pointer event, as reported by the
/// host's input stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    Pen,
    Finger,
    Mouse,
    Unknown,
}

impl PointerKind {
    /// Only a stylus draws; fingers, mice, and unidentified tools are left
    /// to the host so its native scroll gestures keep working.
    pub fn draws(self) -> bool {
        matches!(self, PointerKind::Pen)
    }
}

/// A raw pointer event in view coordinates, forwarded by the host view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: ViewPoint, kind: PointerKind },
    Move { position: ViewPoint, kind: PointerKind },
    Up { position: ViewPoint, kind: PointerKind },
    Cancel { position: ViewPoint, kind: PointerKind },
}

impl PointerEvent {
    pub fn position(&self) -> ViewPoint {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Cancel { position, .. } => *position,
        }
    }

    pub fn kind(&self) -> PointerKind {
        match self {
            PointerEvent::Down { kind, .. }
            | PointerEvent::Move { kind, .. }
            | PointerEvent::Up { kind, .. }
            | PointerEvent::Cancel { kind, .. } => *kind,
        }
    }
}

/// What the surface did with an event.
///
/// `PassThrough` events must be handed back to the host's own gesture
/// handling untouched; the surface has not acted on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    Consumed,
    PassThrough,
}
