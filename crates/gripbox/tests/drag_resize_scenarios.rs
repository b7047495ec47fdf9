//! End-to-end scenarios through the public facade.
//!
//! Each test drives a full press → move* → release cycle the way a host
//! would: attach to a registry, feed native events, read the live geometry
//! back from the element.

use std::time::{Duration, Instant};

use gripbox::prelude::*;
use gripbox::{MIN_DIMENSION, REVERT_TRANSITION, classify_press, DEFAULT_HANDLE_SIZE};

const START: Offset = Offset::new(100.0, 100.0, 200.0, 100.0);

fn setup(container: Size) -> (GripElement, ListenerRegistry, StaticSurface) {
    let mut registry = ListenerRegistry::new();
    let mut element = GripElement::new(PointerEventNames::pointer(), START);
    element.attach(&mut registry);
    (element, registry, StaticSurface::new(container))
}

fn press(target: PressTarget, x: f64, y: f64) -> PointerEvent {
    PointerEvent::new("pointerdown", Point::new(x, y))
        .with_buttons(Buttons::PRIMARY)
        .with_target(target)
}

fn drag(x: f64, y: f64) -> PointerEvent {
    PointerEvent::new("pointermove", Point::new(x, y)).with_buttons(Buttons::PRIMARY)
}

fn lift(x: f64, y: f64) -> PointerEvent {
    PointerEvent::new("pointerup", Point::new(x, y))
}

#[test]
fn south_east_resize_shrinks_then_bottoms_out() {
    let (mut element, registry, mut surface) = setup(Size::new(1000.0, 500.0));

    // Press on the `se` handle at (300, 200).
    let events = element.process(
        &registry,
        &press(PressTarget::Handle(Handle::SouthEast), 300.0, 200.0),
        &mut surface,
    );
    assert_eq!(events[0].action(), Action::Resize(Handle::SouthEast));

    // Drag to (250, 150): total delta (-50, -50).
    element.process(&registry, &drag(250.0, 150.0), &mut surface);
    assert_eq!(element.offset().width, 150.0);
    assert_eq!(element.offset().height, 50.0);

    // Drag to (0, 0): total delta (-300, -200). Height bottoms out at the
    // minimum dimension; width follows the unclamped east edge and goes
    // negative, the faithfully preserved asymmetry.
    element.process(&registry, &drag(0.0, 0.0), &mut surface);
    assert_eq!(element.offset().height, MIN_DIMENSION);
    assert_eq!(element.offset().width, -100.0);

    let events = element.process(&registry, &lift(0.0, 0.0), &mut surface);
    assert!(events[0].is_terminal());
    assert_eq!(events[0].origin_offset(), START);
}

#[test]
fn move_clamps_to_small_container() {
    let mut registry = ListenerRegistry::new();
    let mut element = GripElement::new(
        PointerEventNames::pointer(),
        Offset::new(0.0, 0.0, 200.0, 100.0),
    );
    element.attach(&mut registry);
    let mut surface = StaticSurface::new(Size::new(300.0, 150.0));

    element.process(&registry, &press(PressTarget::Surface, 50.0, 50.0), &mut surface);
    element.process(&registry, &drag(550.0, 550.0), &mut surface);

    assert_eq!(element.offset(), Offset::new(100.0, 50.0, 200.0, 100.0));
}

#[test]
fn north_resize_overdrag_down() {
    let mut registry = ListenerRegistry::new();
    let mut element = GripElement::new(
        PointerEventNames::pointer(),
        Offset::new(100.0, 50.0, 200.0, 100.0),
    );
    element.attach(&mut registry);
    let mut surface = StaticSurface::new(Size::new(1000.0, 500.0));

    element.process(
        &registry,
        &press(PressTarget::Handle(Handle::North), 200.0, 50.0),
        &mut surface,
    );
    // Dragging down by 200 shrinks from the top; the delta clamps to
    // height - MIN_DIMENSION = 98.
    element.process(&registry, &drag(200.0, 250.0), &mut surface);

    assert_eq!(element.offset().top, 148.0);
    assert_eq!(element.offset().height, MIN_DIMENSION);
    // Bottom edge stays fixed.
    assert_eq!(element.offset().bottom(), 150.0);
}

#[test]
fn move_after_east_overflow_pins_to_container_origin() {
    let (mut element, registry, mut surface) = setup(Size::new(1000.0, 500.0));

    // Grow the width past the container through the unclamped east edge.
    element.process(
        &registry,
        &press(PressTarget::Handle(Handle::East), 300.0, 150.0),
        &mut surface,
    );
    element.process(&registry, &drag(5300.0, 150.0), &mut surface);
    element.process(&registry, &lift(5300.0, 150.0), &mut surface);
    assert_eq!(element.offset().width, 5200.0);

    // A move gesture now sees an inverted left range. Dragging left pins
    // the box at the container origin rather than flinging it off to the
    // negative upper bound.
    element.process(&registry, &press(PressTarget::Surface, 150.0, 150.0), &mut surface);
    element.process(&registry, &drag(40.0, 150.0), &mut surface);
    assert_eq!(element.offset().left, 0.0);
    assert_eq!(element.offset().top, 100.0);
}

#[test]
fn consumers_read_live_geometry_from_the_element() {
    let (mut element, registry, mut surface) = setup(Size::new(1000.0, 500.0));

    element.process(&registry, &press(PressTarget::Surface, 150.0, 150.0), &mut surface);
    let events = element.process(&registry, &drag(200.0, 190.0), &mut surface);

    // The event carries the origin snapshot, not the new geometry.
    assert_eq!(events[0].origin_offset(), START);
    assert_eq!(element.offset(), Offset::new(150.0, 140.0, 200.0, 100.0));
    assert_eq!(surface.last_applied(), Some(element.offset()));
}

#[test]
fn touch_fallback_drives_the_same_gesture() {
    let mut registry = ListenerRegistry::new();
    let mut element = GripElement::new(
        PointerEventNames::pointer().with_touch_fallback(),
        START,
    );
    element.attach(&mut registry);
    let mut surface = StaticSurface::new(Size::new(1000.0, 500.0));

    let events = element.process(
        &registry,
        &PointerEvent::new("touchstart", Point::new(150.0, 150.0))
            .with_buttons(Buttons::PRIMARY)
            .with_target(PressTarget::Surface),
        &mut surface,
    );
    assert_eq!(events[0].action(), Action::Move);

    element.process(
        &registry,
        &PointerEvent::new("touchmove", Point::new(180.0, 150.0)).with_buttons(Buttons::PRIMARY),
        &mut surface,
    );
    assert_eq!(element.offset().left, 130.0);

    let events = element.process(
        &registry,
        &PointerEvent::new("touchend", Point::new(180.0, 150.0)),
        &mut surface,
    );
    assert!(events[0].is_terminal());
}

#[test]
fn press_target_derived_from_raw_position() {
    let (mut element, registry, mut surface) = setup(Size::new(1000.0, 500.0));

    // A host without a DOM classifies the press itself.
    let position = Point::new(300.0, 200.0);
    let target = classify_press(element.offset(), position, DEFAULT_HANDLE_SIZE);
    assert_eq!(target, PressTarget::Handle(Handle::SouthEast));

    let events = element.process(
        &registry,
        &PointerEvent::new("pointerdown", position)
            .with_buttons(Buttons::PRIMARY)
            .with_target(target),
        &mut surface,
    );
    assert_eq!(events[0].action(), Action::Resize(Handle::SouthEast));
}

#[test]
fn revert_round_trip_with_transition() {
    let (mut element, registry, mut surface) = setup(Size::new(1000.0, 500.0));
    let t = Instant::now();

    // Drag somewhere else and finish.
    element.process(&registry, &press(PressTarget::Surface, 150.0, 150.0), &mut surface);
    element.process(&registry, &drag(400.0, 300.0), &mut surface);
    element.process(&registry, &lift(400.0, 300.0), &mut surface);
    assert_ne!(element.offset(), START);

    // Revert back with the transition flag.
    element.revert(START, &mut surface, t);
    assert_eq!(element.offset(), START);
    assert!(element.is_reverting());

    element.tick(t + REVERT_TRANSITION - Duration::from_millis(1));
    assert!(element.is_reverting());
    element.tick(t + REVERT_TRANSITION);
    assert!(!element.is_reverting());
}

#[test]
fn gesture_after_detach_and_reattach() {
    let (mut element, mut registry, mut surface) = setup(Size::new(1000.0, 500.0));

    element.detach(&mut registry);
    assert!(registry.is_empty());
    assert!(element
        .process(&registry, &press(PressTarget::Surface, 150.0, 150.0), &mut surface)
        .is_empty());

    element.attach(&mut registry);
    let events = element.process(&registry, &press(PressTarget::Surface, 150.0, 150.0), &mut surface);
    assert_eq!(events.len(), 1);
}
