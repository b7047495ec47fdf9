#![forbid(unsafe_code)]

//! Handle affordances: where the eight resize handles sit and what a press
//! hits.
//!
//! The rendered surface carries eight small squares, one per compass
//! direction: corner handles centered on the corners, edge handles centered
//! on the edge midpoints. Hosts with a DOM derive the press target from the
//! event target instead; hosts working from raw coordinates use
//! [`classify_press`].

use gripbox_core::{Handle, Offset, Point, PressTarget};

/// Default side length of a handle square, in pixels.
pub const DEFAULT_HANDLE_SIZE: f64 = 8.0;

fn center_of(handle: Handle, offset: Offset) -> Point {
    let mid_x = offset.left + offset.width / 2.0;
    let mid_y = offset.top + offset.height / 2.0;
    match handle {
        Handle::NorthWest => Point::new(offset.left, offset.top),
        Handle::North => Point::new(mid_x, offset.top),
        Handle::NorthEast => Point::new(offset.right(), offset.top),
        Handle::East => Point::new(offset.right(), mid_y),
        Handle::SouthEast => Point::new(offset.right(), offset.bottom()),
        Handle::South => Point::new(mid_x, offset.bottom()),
        Handle::SouthWest => Point::new(offset.left, offset.bottom()),
        Handle::West => Point::new(offset.left, mid_y),
    }
}

fn rect_for(handle: Handle, offset: Offset, handle_size: f64) -> Offset {
    let center = center_of(handle, offset);
    Offset::new(
        center.x - handle_size / 2.0,
        center.y - handle_size / 2.0,
        handle_size,
        handle_size,
    )
}

/// The eight handle squares for a surface at `offset`.
///
/// Returned in [`Handle::ALL`] order (corners first).
#[must_use]
pub fn handle_rects(offset: Offset, handle_size: f64) -> [(Handle, Offset); 8] {
    Handle::ALL.map(|handle| (handle, rect_for(handle, offset, handle_size)))
}

/// The handle whose square contains `point`, if any.
///
/// Corners are tested before edges, so a corner wins where its square
/// overlaps an edge square on a small surface.
#[must_use]
pub fn hit(offset: Offset, point: Point, handle_size: f64) -> Option<Handle> {
    Handle::ALL
        .into_iter()
        .find(|handle| rect_for(*handle, offset, handle_size).contains(point))
}

/// Derive the press target for a raw pointer position.
#[must_use]
pub fn classify_press(offset: Offset, point: Point, handle_size: f64) -> PressTarget {
    if let Some(handle) = hit(offset, point, handle_size) {
        PressTarget::Handle(handle)
    } else if offset.contains(point) {
        PressTarget::Surface
    } else {
        PressTarget::Outside
    }
}
