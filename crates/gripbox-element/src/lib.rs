#![forbid(unsafe_code)]

//! The interactive element: gesture state machine and listener lifecycle.
//!
//! # Role in Gripbox
//! `gripbox-element` owns [`GripElement`], the stateful controller that turns
//! delivered pointer events into geometry updates and lifecycle events. It
//! consumes the value types and the pure computation from `gripbox-core`.
//!
//! # Primary responsibilities
//! - **GripElement**: the `Idle`/`Active` gesture state machine, the revert
//!   transition flag, and the element's live geometry.
//! - **GestureEvent**: `Started` / `Updated` / `Finished` lifecycle events.
//! - **Surface**: the seam to the rendering surface (container bounds and
//!   geometry application), with [`surface::StaticSurface`] as the headless
//!   reference implementation.
//! - **ListenerRegistry**: document-level listener registration with paired
//!   attach/detach and stable handler identities.
//! - **Handle affordances**: the eight handle rectangles and hit testing for
//!   hosts that derive the press target from a raw position.

pub mod element;
pub mod event;
pub mod handles;
pub mod registry;
pub mod surface;

pub use element::{GripElement, REVERT_TRANSITION};
pub use event::GestureEvent;
pub use handles::{DEFAULT_HANDLE_SIZE, classify_press, handle_rects, hit};
pub use registry::{ListenerId, ListenerRegistry};
pub use surface::{StaticSurface, Surface};
