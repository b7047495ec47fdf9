#![forbid(unsafe_code)]

//! Geometry recomputation: origin snapshot + total delta → new offset.
//!
//! [`adjust_offset`] is a pure function. The element calls it on every move
//! with the geometry captured at gesture start and the pointer's total
//! displacement since then; it never accumulates frame-to-frame increments,
//! so floating-point drift cannot build up across a long drag.
//!
//! # Invariants
//!
//! 1. `Move` keeps the whole rectangle inside the container.
//! 2. North-family resizes keep the bottom edge fixed; west-family resizes
//!    keep the right edge fixed.
//! 3. Height and width never drop below [`MIN_DIMENSION`], with one
//!    exception: east-family width growth is not clamped at all (see below).
//!
//! # East-edge asymmetry
//!
//! East-family handles (NE, E, SE) apply `width = origin.width + delta.x`
//! with no clamp, so a rightward drag can grow the rectangle past the
//! container and a large leftward drag can drive the width below
//! `MIN_DIMENSION` or negative. Every other edge clamps. The asymmetry is
//! long-standing observable behavior and hosts rely on being able to
//! overflow on the right; it is kept as is rather than symmetrized.

use crate::action::Action;
use crate::geometry::{Delta, Offset, Size};

/// Smallest width/height a clamped resize will produce, in pixels.
pub const MIN_DIMENSION: f64 = 2.0;

/// Clamp `value` into `[lo, hi]`, lower bound checked first.
///
/// On an inverted range (`hi < lo`) the lower bound wins for values below
/// it, and there is no panic like `f64::clamp`. An inverted range is
/// reachable: after an east-family resize grows the width past the
/// container, a move gesture sees `container.width - width < 0`, and the
/// box must still pin to the container origin when dragged left.
#[inline]
fn min_max(value: f64, lo: f64, hi: f64) -> f64 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Compute the geometry for a gesture in progress.
///
/// `origin` is the offset snapshot taken at gesture start, `delta` the
/// pointer's total displacement since then, and `container` the bounds of
/// the containing surface, queried fresh by the caller on every move.
///
/// A container smaller than [`MIN_DIMENSION`] is a caller precondition
/// violation; the result is well-defined but not useful.
#[must_use]
pub fn adjust_offset(origin: Offset, delta: Delta, action: Action, container: Size) -> Offset {
    let mut next = origin;

    let Action::Resize(handle) = action else {
        next.left = min_max(origin.left + delta.x, 0.0, container.width - origin.width);
        next.top = min_max(origin.top + delta.y, 0.0, container.height - origin.height);
        return next;
    };

    // Vertical axis first. North and south are mutually exclusive per handle.
    if handle.touches_north() {
        let dy = min_max(delta.y, -origin.top, origin.height - MIN_DIMENSION);
        next.top = origin.top + dy;
        next.height = origin.height - dy;
    } else if handle.touches_south() {
        next.height = min_max(
            origin.height + delta.y,
            MIN_DIMENSION,
            container.height - origin.top,
        );
    }

    if handle.touches_west() {
        let dx = min_max(delta.x, -origin.left, origin.width - MIN_DIMENSION);
        next.left = origin.left + dx;
        next.width = origin.width - dx;
    } else if handle.touches_east() {
        // Deliberately unclamped; see the module docs on the east-edge
        // asymmetry.
        next.width = origin.width + delta.x;
    }

    next
}
