#![forbid(unsafe_code)]

//! Handles and actions: the closed vocabulary of manipulations.
//!
//! A gesture is exactly one of nine manipulations: moving the whole rectangle,
//! or resizing from one of eight compass handles. [`Action`] tags the resize
//! case with its [`Handle`], so a resize without a direction is
//! unrepresentable.

/// A directional resize handle on the surface's edge or corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handle {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Handle {
    /// All eight handles, corners before edges.
    ///
    /// Hit testing iterates in this order so that a corner wins when a press
    /// lands where a corner square overlaps an edge square.
    pub const ALL: [Handle; 8] = [
        Handle::NorthWest,
        Handle::NorthEast,
        Handle::SouthEast,
        Handle::SouthWest,
        Handle::North,
        Handle::East,
        Handle::South,
        Handle::West,
    ];

    /// Parse a direction code (`n e s w se sw ne nw`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Handle> {
        match code {
            "n" => Some(Handle::North),
            "ne" => Some(Handle::NorthEast),
            "e" => Some(Handle::East),
            "se" => Some(Handle::SouthEast),
            "s" => Some(Handle::South),
            "sw" => Some(Handle::SouthWest),
            "w" => Some(Handle::West),
            "nw" => Some(Handle::NorthWest),
            _ => None,
        }
    }

    /// The direction code for this handle.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Handle::North => "n",
            Handle::NorthEast => "ne",
            Handle::East => "e",
            Handle::SouthEast => "se",
            Handle::South => "s",
            Handle::SouthWest => "sw",
            Handle::West => "w",
            Handle::NorthWest => "nw",
        }
    }

    /// Whether dragging this handle moves the top edge.
    #[inline]
    #[must_use]
    pub const fn touches_north(&self) -> bool {
        matches!(self, Handle::NorthWest | Handle::North | Handle::NorthEast)
    }

    /// Whether dragging this handle moves the right edge.
    #[inline]
    #[must_use]
    pub const fn touches_east(&self) -> bool {
        matches!(self, Handle::NorthEast | Handle::East | Handle::SouthEast)
    }

    /// Whether dragging this handle moves the bottom edge.
    #[inline]
    #[must_use]
    pub const fn touches_south(&self) -> bool {
        matches!(self, Handle::SouthEast | Handle::South | Handle::SouthWest)
    }

    /// Whether dragging this handle moves the left edge.
    #[inline]
    #[must_use]
    pub const fn touches_west(&self) -> bool {
        matches!(self, Handle::SouthWest | Handle::West | Handle::NorthWest)
    }
}

/// The kind of manipulation a gesture performs.
///
/// Set when the gesture starts, from the pointer-down target: a press on a
/// handle selects the corresponding resize, a press anywhere else on the
/// surface selects a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Translate the whole rectangle.
    Move,
    /// Resize from the given handle, keeping the opposite edge(s) fixed.
    Resize(Handle),
}

impl Action {
    /// Whether this action resizes rather than translates.
    #[inline]
    #[must_use]
    pub const fn is_resize(&self) -> bool {
        matches!(self, Action::Resize(_))
    }
}
