#![forbid(unsafe_code)]

//! Core: geometry, pointer input, and the pure drag/resize computation.
//!
//! # Role in Gripbox
//! `gripbox-core` is the input layer. It owns the geometry value types, the
//! pointer-event model, the handle/action vocabulary, and [`adjust::adjust_offset`],
//! the pure function that turns a gesture delta into clamped geometry.
//!
//! # Primary responsibilities
//! - **Offset / Point / Delta / Size**: pixel-unit geometry value types.
//! - **Handle / Action**: the closed set of nine manipulations (move plus
//!   eight directional resizes).
//! - **Pointer input**: button bitmask, logical phases, and the configurable
//!   native-event-name mapping for pluggable input backends.
//! - **adjust_offset**: geometry recomputation, independent of any surface.
//!
//! # How it fits in the system
//! The element crate (`gripbox-element`) consumes these types and drives the
//! gesture state machine. Nothing in this crate performs I/O or reads a clock,
//! so every computation here is testable in isolation.

pub mod action;
pub mod adjust;
pub mod geometry;
pub mod pointer;

pub use action::{Action, Handle};
pub use adjust::{MIN_DIMENSION, adjust_offset};
pub use geometry::{Delta, Offset, Point, Size};
pub use pointer::{Buttons, PointerEvent, PointerEventNames, PointerPhase, PressTarget};
