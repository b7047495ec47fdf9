#![forbid(unsafe_code)]

//! Document-level listener registration.
//!
//! The original control listens on the *document*, not the element, so a
//! drag keeps tracking when the pointer leaves the element's bounds. This
//! module models that document-side table: hosts route each native event by
//! name through [`ListenerRegistry::matches`] and deliver it to the owning
//! elements.
//!
//! Handler identity is the load-bearing part. Removal only works if the
//! same identity is used for registration and deregistration, so an element
//! allocates one [`ListenerId`] per phase at construction and uses those
//! same ids for every attach and detach over its whole lifetime.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// A stable handler identity, unique per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Allocate a fresh id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The document-side table of `(event name, handler)` registrations.
///
/// Mirrors DOM `addEventListener` semantics: adding an exact pair that is
/// already present is a no-op, removal deletes the pair, and dispatch order
/// is registration order.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    entries: Vec<(String, ListenerId)>,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` for events named `name`. Duplicate pairs are ignored.
    pub fn add(&mut self, name: &str, id: ListenerId) {
        if !self.entries.iter().any(|(n, i)| n == name && *i == id) {
            self.entries.push((name.to_string(), id));
        }
    }

    /// Remove the `(name, id)` pair, if present.
    pub fn remove(&mut self, name: &str, id: ListenerId) {
        self.entries.retain(|(n, i)| !(n == name && *i == id));
    }

    /// Ids registered for `name`, in registration order.
    pub fn matches<'a>(&'a self, name: &'a str) -> impl Iterator<Item = ListenerId> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, id)| *id)
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
