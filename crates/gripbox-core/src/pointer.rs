#![forbid(unsafe_code)]

//! Pointer input: buttons, logical phases, and the event-name mapping.
//!
//! The host environment delivers native input events by name. Which names
//! exist depends on the input backend (pointer events, legacy mouse events,
//! touch events), so the mapping from native names to the three logical
//! phases — press, move, release — is configuration, not code:
//! [`PointerEventNames`] carries one name list per phase plus an optional
//! touch fallback list per phase.

use bitflags::bitflags;

use crate::action::Handle;
use crate::geometry::Point;

bitflags! {
    /// Pressed-button bitmask, matching the W3C `buttons` property.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        /// Primary button (usually left).
        const PRIMARY = 1;
        /// Secondary button (usually right).
        const SECONDARY = 2;
        /// Auxiliary button (usually middle/wheel).
        const AUXILIARY = 4;
    }
}

impl Buttons {
    /// Whether the primary button is the sole pressed button.
    ///
    /// Gestures start only in this state; a press with any additional button
    /// held is ignored.
    #[inline]
    #[must_use]
    pub fn is_primary_only(&self) -> bool {
        *self == Buttons::PRIMARY
    }
}

/// The three logical phases of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer pressed down.
    Press,
    /// Pointer moved while tracking.
    Move,
    /// Pointer released.
    Release,
}

/// What the host reports as the pointer-down target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressTarget {
    /// Outside the controlled surface; the press is ignored.
    #[default]
    Outside,
    /// On the surface body; starts a move.
    Surface,
    /// On a directional resize handle; starts the corresponding resize.
    Handle(Handle),
}

/// Native event names for each logical phase.
///
/// The pointer lists cover the primary backend; the touch lists are an
/// optional fallback backend registered alongside it. Both lists of a phase
/// map to the same logical phase on delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PointerEventNames {
    pub pointer_down: Vec<String>,
    pub pointer_move: Vec<String>,
    pub pointer_up: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub touch_start: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub touch_move: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub touch_end: Vec<String>,
}

impl PointerEventNames {
    /// The modern pointer-events backend.
    #[must_use]
    pub fn pointer() -> Self {
        Self {
            pointer_down: vec!["pointerdown".into()],
            pointer_move: vec!["pointermove".into()],
            pointer_up: vec!["pointerup".into()],
            touch_start: Vec::new(),
            touch_move: Vec::new(),
            touch_end: Vec::new(),
        }
    }

    /// The legacy mouse-events backend.
    #[must_use]
    pub fn mouse() -> Self {
        Self {
            pointer_down: vec!["mousedown".into()],
            pointer_move: vec!["mousemove".into()],
            pointer_up: vec!["mouseup".into()],
            touch_start: Vec::new(),
            touch_move: Vec::new(),
            touch_end: Vec::new(),
        }
    }

    /// Add the touch-events fallback to each phase.
    #[must_use]
    pub fn with_touch_fallback(mut self) -> Self {
        self.touch_start = vec!["touchstart".into()];
        self.touch_move = vec!["touchmove".into()];
        self.touch_end = vec!["touchend".into()];
        self
    }

    /// Map a native event name to its logical phase.
    #[must_use]
    pub fn classify(&self, name: &str) -> Option<PointerPhase> {
        let hit = |list: &[String]| list.iter().any(|n| n == name);
        if hit(&self.pointer_down) || hit(&self.touch_start) {
            Some(PointerPhase::Press)
        } else if hit(&self.pointer_move) || hit(&self.touch_move) {
            Some(PointerPhase::Move)
        } else if hit(&self.pointer_up) || hit(&self.touch_end) {
            Some(PointerPhase::Release)
        } else {
            None
        }
    }

    /// All names registered for a phase, pointer list first, then touch.
    pub fn names_for(&self, phase: PointerPhase) -> impl Iterator<Item = &str> {
        let (primary, fallback) = match phase {
            PointerPhase::Press => (&self.pointer_down, &self.touch_start),
            PointerPhase::Move => (&self.pointer_move, &self.touch_move),
            PointerPhase::Release => (&self.pointer_up, &self.touch_end),
        };
        primary.iter().chain(fallback.iter()).map(String::as_str)
    }
}

impl Default for PointerEventNames {
    fn default() -> Self {
        Self::pointer()
    }
}

/// A native input event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Native event name; routed through the listener registry.
    pub name: String,
    /// Absolute pointer position.
    pub position: Point,
    /// Pressed-button bitmask at the time of the event.
    pub buttons: Buttons,
    /// What the press landed on. Only meaningful for press events.
    pub target: PressTarget,
}

impl PointerEvent {
    /// Create an event with no buttons pressed and no target.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            position,
            buttons: Buttons::empty(),
            target: PressTarget::Outside,
        }
    }

    /// Set the pressed-button bitmask.
    #[must_use]
    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Set the press target.
    #[must_use]
    pub fn with_target(mut self, target: PressTarget) -> Self {
        self.target = target;
        self
    }
}
