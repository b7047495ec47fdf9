#![forbid(unsafe_code)]

//! The rendering-surface seam.
//!
//! The element never talks to a renderer directly. It queries the container
//! bounds through [`Surface`] on every move (the container may change size
//! between gestures, so bounds are never cached) and pushes each computed
//! geometry through [`Surface::apply_offset`], which the host maps to
//! whatever its display layer needs (style assignment, canvas redraw, ...).

use gripbox_core::{Offset, Size};

/// Host-side rendering surface for a [`GripElement`](crate::GripElement).
pub trait Surface {
    /// Bounds of the containing surface.
    ///
    /// Called on every pointer move; implementations should return the
    /// current value, not a snapshot from attach time.
    fn container_size(&self) -> Size;

    /// Apply a computed geometry to the rendered surface.
    ///
    /// Called synchronously once per geometry assignment: on every move of
    /// an active gesture and on every revert. Never called on press.
    fn apply_offset(&mut self, offset: Offset);
}

/// A headless surface with a fixed container that records applied offsets.
///
/// Used by hosts without a renderer and throughout the test suites.
#[derive(Debug, Clone, Default)]
pub struct StaticSurface {
    size: Size,
    applied: Vec<Offset>,
}

impl StaticSurface {
    /// Create a surface with the given container bounds.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            applied: Vec::new(),
        }
    }

    /// Change the container bounds.
    ///
    /// Takes effect on the next move, since bounds are queried fresh.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Every offset applied so far, in application order.
    #[must_use]
    pub fn applied(&self) -> &[Offset] {
        &self.applied
    }

    /// The most recently applied offset, if any.
    #[must_use]
    pub fn last_applied(&self) -> Option<Offset> {
        self.applied.last().copied()
    }
}

impl Surface for StaticSurface {
    fn container_size(&self) -> Size {
        self.size
    }

    fn apply_offset(&mut self, offset: Offset) {
        self.applied.push(offset);
    }
}
