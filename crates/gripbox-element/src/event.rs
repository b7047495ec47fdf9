#![forbid(unsafe_code)]

//! Lifecycle events emitted by the gesture state machine.
//!
//! Each variant carries the action and the geometry snapshot taken at
//! gesture start. Deliberately *not* the current geometry: consumers read
//! the live value from the element or the surface, which is always at least
//! as fresh as any event payload could be.
//!
//! # Invariants
//! 1. Every gesture is well-formed: `Started` → zero or more `Updated` →
//!    `Finished`.
//! 2. All events of one gesture carry the same `action` and `origin_offset`.

use gripbox_core::{Action, Offset};

/// A gesture lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A gesture began: action selected, origin snapshotted.
    Started { action: Action, origin_offset: Offset },
    /// The pointer moved during an active gesture; new geometry was applied.
    Updated { action: Action, origin_offset: Offset },
    /// The pointer was released; the gesture is over.
    Finished { action: Action, origin_offset: Offset },
}

impl GestureEvent {
    /// The action this gesture performs.
    #[inline]
    #[must_use]
    pub const fn action(&self) -> Action {
        match self {
            Self::Started { action, .. }
            | Self::Updated { action, .. }
            | Self::Finished { action, .. } => *action,
        }
    }

    /// The geometry snapshot taken when the gesture started.
    #[inline]
    #[must_use]
    pub const fn origin_offset(&self) -> Offset {
        match self {
            Self::Started { origin_offset, .. }
            | Self::Updated { origin_offset, .. }
            | Self::Finished { origin_offset, .. } => *origin_offset,
        }
    }

    /// Whether this event ends the gesture.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}
