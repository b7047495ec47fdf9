#![forbid(unsafe_code)]

//! Gripbox public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use gripbox::prelude::*;
//!
//! let mut registry = ListenerRegistry::new();
//! let mut element = GripElement::new(
//!     PointerEventNames::pointer(),
//!     Offset::new(100.0, 100.0, 200.0, 100.0),
//! );
//! element.attach(&mut registry);
//!
//! let mut surface = StaticSurface::new(Size::new(1000.0, 500.0));
//!
//! // Press on the south-east handle, drag, release.
//! let press = PointerEvent::new("pointerdown", Point::new(300.0, 200.0))
//!     .with_buttons(Buttons::PRIMARY)
//!     .with_target(PressTarget::Handle(Handle::SouthEast));
//! let started = element.process(&registry, &press, &mut surface);
//! assert_eq!(started[0].action(), Action::Resize(Handle::SouthEast));
//!
//! let drag = PointerEvent::new("pointermove", Point::new(250.0, 150.0))
//!     .with_buttons(Buttons::PRIMARY);
//! element.process(&registry, &drag, &mut surface);
//! assert_eq!(element.offset().width, 150.0);
//! assert_eq!(element.offset().height, 50.0);
//!
//! let lift = PointerEvent::new("pointerup", Point::new(250.0, 150.0));
//! let finished = element.process(&registry, &lift, &mut surface);
//! assert!(finished[0].is_terminal());
//!
//! element.detach(&mut registry);
//! assert!(registry.is_empty());
//! ```

// --- Core re-exports -------------------------------------------------------

pub use gripbox_core::{
    Action, Buttons, Delta, Handle, MIN_DIMENSION, Offset, Point, PointerEvent, PointerEventNames,
    PointerPhase, PressTarget, Size, adjust_offset,
};

// --- Element re-exports ----------------------------------------------------

pub use gripbox_element::{
    DEFAULT_HANDLE_SIZE, GestureEvent, GripElement, ListenerId, ListenerRegistry,
    REVERT_TRANSITION, StaticSurface, Surface, classify_press, handle_rects, hit,
};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::{
        Action, Buttons, Delta, GestureEvent, GripElement, Handle, ListenerId, ListenerRegistry,
        Offset, Point, PointerEvent, PointerEventNames, PointerPhase, PressTarget, Size,
        StaticSurface, Surface, adjust_offset,
    };
}
