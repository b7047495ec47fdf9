#![forbid(unsafe_code)]

//! The drag/resize element: an `Idle`/`Active` gesture state machine.
//!
//! [`GripElement`] tracks one pointer gesture at a time across the nine
//! actions (move plus eight directional resizes), recomputes geometry on
//! every move from the *origin* snapshot and the *total* delta, and emits
//! [`GestureEvent`]s.
//!
//! # State Machine
//!
//! - `Idle → Active`: a delivered press with the primary button as the sole
//!   pressed button, landing on the surface or a handle. Snapshots the
//!   current geometry and pointer position, clears the reverting flag, and
//!   emits `Started`.
//! - `Active → Active`: a delivered move. Recomputes geometry via
//!   [`adjust_offset`], applies it to the surface, and emits `Updated`.
//! - `Active → Idle`: a delivered release, wherever the pointer is (release
//!   listeners are document-global). Emits `Finished` and clears the
//!   session.
//!
//! # Invariants
//!
//! 1. Moves and releases delivered while idle are silent no-ops.
//! 2. A move never reads the previous frame: geometry is always recomputed
//!    from the origin snapshot plus the current total delta.
//! 3. Container bounds are queried from the surface on every move, never
//!    cached across moves.
//! 4. Attach and detach use the element's own stable [`ListenerId`]s, so
//!    repeated cycles leave no stale registrations behind.
//!
//! # Failure Modes
//!
//! - Press ordering (press before move, release before the next press) is an
//!   input-layer guarantee. Out-of-order delivery degrades to the no-op
//!   rules above; nothing panics.

use std::time::{Duration, Instant};

use gripbox_core::{
    Action, Offset, Point, PointerEvent, PointerEventNames, PointerPhase, PressTarget,
    adjust_offset,
};

use crate::event::GestureEvent;
use crate::registry::{ListenerId, ListenerRegistry};
use crate::surface::Surface;

/// How long the reverting flag stays set after a revert.
pub const REVERT_TRANSITION: Duration = Duration::from_millis(500);

/// The gesture session, alive between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    Active {
        action: Action,
        origin_offset: Offset,
        origin_position: Point,
    },
}

/// A pointer-driven drag/resize control for one rendered surface.
///
/// The element owns the live geometry and the gesture state. Hosts attach it
/// to a [`ListenerRegistry`], route native events through
/// [`process`](GripElement::process) (or [`deliver`](GripElement::deliver)
/// when they did the routing themselves), and react to the returned
/// [`GestureEvent`]s.
#[derive(Debug)]
pub struct GripElement {
    names: PointerEventNames,
    offset: Offset,
    state: GestureState,
    reverting: bool,
    revert_expiries: Vec<Instant>,
    press_id: ListenerId,
    move_id: ListenerId,
    release_id: ListenerId,
    attached: bool,
}

impl GripElement {
    /// Create an element with the given event-name mapping and initial
    /// geometry.
    ///
    /// Allocates the element's three stable handler identities; they are
    /// reused for every attach/detach over the element's lifetime.
    #[must_use]
    pub fn new(names: PointerEventNames, offset: Offset) -> Self {
        Self {
            names,
            offset,
            state: GestureState::Idle,
            reverting: false,
            revert_expiries: Vec::new(),
            press_id: ListenerId::next(),
            move_id: ListenerId::next(),
            release_id: ListenerId::next(),
            attached: false,
        }
    }

    /// The element's live geometry.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Assign the geometry directly, without a transition.
    ///
    /// Applies to the surface immediately. Does not touch gesture state.
    pub fn set_offset(&mut self, offset: Offset, surface: &mut impl Surface) {
        self.offset = offset;
        surface.apply_offset(offset);
    }

    /// Whether a revert transition is in progress.
    #[inline]
    #[must_use]
    pub fn is_reverting(&self) -> bool {
        self.reverting
    }

    /// Whether a gesture is in progress.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    /// The action of the gesture in progress, if any.
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Active { action, .. } => Some(action),
        }
    }

    /// The configured event-name mapping.
    #[inline]
    #[must_use]
    pub fn names(&self) -> &PointerEventNames {
        &self.names
    }

    /// Whether the element is attached to a registry.
    #[inline]
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Register the element's handlers for every configured event name.
    ///
    /// One handler identity per phase, registered under the phase's pointer
    /// names and touch fallback names alike.
    pub fn attach(&mut self, registry: &mut ListenerRegistry) {
        for (phase, id) in self.phase_ids() {
            for name in self.names.names_for(phase) {
                registry.add(name, id);
            }
        }
        self.attached = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(press = ?self.press_id, "element attached");
    }

    /// Remove every registration made by [`attach`](GripElement::attach).
    ///
    /// Uses the same handler identities, so the registry ends up exactly as
    /// it was before the attach.
    pub fn detach(&mut self, registry: &mut ListenerRegistry) {
        for (phase, id) in self.phase_ids() {
            for name in self.names.names_for(phase) {
                registry.remove(name, id);
            }
        }
        self.attached = false;

        #[cfg(feature = "tracing")]
        tracing::debug!(press = ?self.press_id, "element detached");
    }

    /// Route a native event through the registry and deliver each match.
    ///
    /// The single-element convenience over
    /// [`deliver`](GripElement::deliver); hosts with several elements on one
    /// registry route once and deliver to each owner.
    pub fn process(
        &mut self,
        registry: &ListenerRegistry,
        event: &PointerEvent,
        surface: &mut impl Surface,
    ) -> Vec<GestureEvent> {
        let ids: Vec<ListenerId> = registry.matches(&event.name).collect();
        ids.into_iter()
            .filter_map(|id| self.deliver(id, event, surface))
            .collect()
    }

    /// Deliver a routed event to the handler identified by `id`.
    ///
    /// Ids the element does not own are ignored, as is any delivery while
    /// detached.
    pub fn deliver(
        &mut self,
        id: ListenerId,
        event: &PointerEvent,
        surface: &mut impl Surface,
    ) -> Option<GestureEvent> {
        if !self.attached {
            return None;
        }
        let phase = self
            .phase_ids()
            .into_iter()
            .find(|(_, own)| *own == id)
            .map(|(phase, _)| phase)?;
        match phase {
            PointerPhase::Press => self.on_press(event),
            PointerPhase::Move => self.on_move(event, surface),
            PointerPhase::Release => self.on_release(),
        }
    }

    /// Revert to `target` with a visual transition.
    ///
    /// Applies `target` immediately, raises the reverting flag, and
    /// schedules a one-shot clear [`REVERT_TRANSITION`] after `now`. A
    /// second revert while one is pending does not cancel the first timer;
    /// the flag clears at the earliest still-pending expiry, and the later
    /// expiries are redundant writes. Gesture state is untouched.
    pub fn revert(&mut self, target: Offset, surface: &mut impl Surface, now: Instant) {
        self.reverting = true;
        self.offset = target;
        surface.apply_offset(target);
        self.revert_expiries.push(now + REVERT_TRANSITION);

        #[cfg(feature = "tracing")]
        tracing::trace!(?target, "revert scheduled");
    }

    /// Fire any revert timers that have expired by `now`.
    ///
    /// Call periodically (e.g., on the host's tick).
    pub fn tick(&mut self, now: Instant) {
        let before = self.revert_expiries.len();
        self.revert_expiries.retain(|expiry| *expiry > now);
        if self.revert_expiries.len() < before {
            self.reverting = false;
        }
    }

    fn phase_ids(&self) -> [(PointerPhase, ListenerId); 3] {
        [
            (PointerPhase::Press, self.press_id),
            (PointerPhase::Move, self.move_id),
            (PointerPhase::Release, self.release_id),
        ]
    }

    fn on_press(&mut self, event: &PointerEvent) -> Option<GestureEvent> {
        if !event.buttons.is_primary_only() {
            return None;
        }
        let action = match event.target {
            PressTarget::Outside => return None,
            PressTarget::Surface => Action::Move,
            PressTarget::Handle(handle) => Action::Resize(handle),
        };

        // Pending revert timers stay armed; their eventual clear is a
        // redundant write.
        self.reverting = false;

        let origin_offset = self.offset;
        self.state = GestureState::Active {
            action,
            origin_offset,
            origin_position: event.position,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?action, ?origin_offset, "gesture started");

        Some(GestureEvent::Started {
            action,
            origin_offset,
        })
    }

    fn on_move(&mut self, event: &PointerEvent, surface: &mut impl Surface) -> Option<GestureEvent> {
        let GestureState::Active {
            action,
            origin_offset,
            origin_position,
        } = self.state
        else {
            return None;
        };

        let delta = event.position.delta_from(origin_position);
        let next = adjust_offset(origin_offset, delta, action, surface.container_size());
        self.offset = next;
        surface.apply_offset(next);

        #[cfg(feature = "tracing")]
        tracing::trace!(?action, ?delta, ?next, "gesture updated");

        Some(GestureEvent::Updated {
            action,
            origin_offset,
        })
    }

    fn on_release(&mut self) -> Option<GestureEvent> {
        let GestureState::Active {
            action,
            origin_offset,
            ..
        } = self.state
        else {
            return None;
        };

        self.state = GestureState::Idle;

        #[cfg(feature = "tracing")]
        tracing::trace!(?action, "gesture finished");

        Some(GestureEvent::Finished {
            action,
            origin_offset,
        })
    }
}
