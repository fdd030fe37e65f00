//! Comparison slider behaviour under pointer input.
//!
//! Uses proptest to verify:
//! 1. Clamping: any pointer x lands in [0, 100]
//! 2. Idempotence: the same coordinate twice gives the same position
//!
//! and plain tests for the drag lifecycle, geometry freshness, click-to-seek,
//! unmount cleanup and isolation between sliders sharing one surface.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use proptest::prelude::*;
use superdato_core::geometry::{Bounds, BoundsSource, LiveBounds};
use superdato_core::input::{GlobalPointerEvent, InputSurface, PointerSource};
use superdato_core::slider::{ComparisonSlider, DragPhase, SliderPosition, SliderProps};

// ── Fixtures ─────────────────────────────────────────────────────────

fn props(name: &str) -> SliderProps {
    SliderProps {
        before: PathBuf::from(format!("{name}/{name}_before.jpg")),
        after: PathBuf::from(format!("{name}/{name}_after.jpg")),
        title: name.to_string(),
        tag: format!("#{name}"),
    }
}

/// Bounds source that counts how often it is queried.
struct CountingBounds {
    bounds: Bounds,
    queries: Rc<Cell<usize>>,
}

impl BoundsSource for CountingBounds {
    fn bounds(&self) -> Option<Bounds> {
        self.queries.set(self.queries.get() + 1);
        Some(self.bounds)
    }
}

fn move_to(x: f64) -> GlobalPointerEvent {
    GlobalPointerEvent::Move {
        x,
        y: 0.0,
        source: PointerSource::Mouse,
    }
}

fn release(source: PointerSource) -> GlobalPointerEvent {
    GlobalPointerEvent::Release { source }
}

fn arb_container() -> impl Strategy<Value = Bounds> {
    (-500.0..500.0_f64, 1.0..2000.0_f64).prop_map(|(x, w)| Bounds::new(x, 0.0, w, 100.0))
}

// ── 1. Clamping ──────────────────────────────────────────────────────

proptest! {
    /// However far outside the container the pointer travels, the position
    /// stays inside [0, 100].
    #[test]
    fn position_is_always_clamped(
        container in arb_container(),
        presses in prop::collection::vec(-1e7..1e7_f64, 1..8),
        moves in prop::collection::vec(-1e7..1e7_f64, 0..16),
    ) {
        let surface = InputSurface::new();
        let mut slider = ComparisonSlider::mount(props("a"), container, &surface);

        for x in presses {
            slider.press(x, PointerSource::Mouse);
            let p = slider.position().percent();
            prop_assert!((0.0..=100.0).contains(&p));
        }
        for x in moves {
            surface.dispatch(move_to(x));
            let p = slider.position().percent();
            prop_assert!((0.0..=100.0).contains(&p));
        }
    }

    /// Dispatching the same coordinate twice in a row does not drift.
    #[test]
    fn repeated_coordinate_is_idempotent(container in arb_container(), x in -3000.0..3000.0_f64) {
        let surface = InputSurface::new();
        let mut slider = ComparisonSlider::mount(props("a"), container, &surface);

        slider.click(x, PointerSource::Touch);
        let first = slider.position();
        slider.click(x, PointerSource::Touch);
        prop_assert_eq!(first, slider.position());

        slider.press(x, PointerSource::Mouse);
        surface.dispatch(move_to(x));
        let dragged = slider.position();
        surface.dispatch(move_to(x));
        prop_assert_eq!(dragged, slider.position());
        prop_assert_eq!(first, dragged);
    }
}

// ── 2. Lifecycle ─────────────────────────────────────────────────────

#[test]
fn midpoint_before_any_interaction() {
    let surface = InputSurface::new();
    let slider = ComparisonSlider::mount(props("a"), Bounds::new(0.0, 0.0, 300.0, 100.0), &surface);
    assert_eq!(slider.position(), SliderPosition::MID);
    assert_eq!(slider.position().percent(), 50.0);
}

#[test]
fn release_outside_the_slider_ends_the_drag() {
    let surface = InputSurface::new();
    let container = Bounds::new(100.0, 100.0, 200.0, 100.0);
    let mut slider = ComparisonSlider::mount(props("a"), container, &surface);

    slider.press(150.0, PointerSource::Mouse);
    assert_eq!(slider.phase(), DragPhase::Dragging(PointerSource::Mouse));

    // Pointer wanders off to the left of the container and is released there.
    surface.dispatch(GlobalPointerEvent::Move {
        x: 10.0,
        y: 900.0,
        source: PointerSource::Mouse,
    });
    assert_eq!(slider.position(), SliderPosition::MIN);
    surface.dispatch(release(PointerSource::Mouse));
    assert_eq!(slider.phase(), DragPhase::Idle);

    surface.dispatch(move_to(250.0));
    assert_eq!(slider.position(), SliderPosition::MIN);
}

#[test]
fn touch_end_also_ends_a_mouse_drag() {
    let surface = InputSurface::new();
    let mut slider =
        ComparisonSlider::mount(props("a"), Bounds::new(0.0, 0.0, 100.0, 10.0), &surface);
    slider.press(30.0, PointerSource::Mouse);
    surface.dispatch(release(PointerSource::Touch));
    assert!(!slider.is_dragging());
}

#[test]
fn moves_while_idle_have_no_effect() {
    let surface = InputSurface::new();
    let mut slider =
        ComparisonSlider::mount(props("a"), Bounds::new(0.0, 0.0, 100.0, 10.0), &surface);
    assert_eq!(surface.dispatch(move_to(5.0)), 0);
    assert_eq!(slider.position(), SliderPosition::MID);

    slider.click(80.0, PointerSource::Mouse);
    surface.dispatch(move_to(5.0));
    assert_eq!(slider.position().percent(), 80.0);
}

#[test]
fn click_at_quarter_width_seeks_to_25() {
    let surface = InputSurface::new();
    let w = 320.0;
    let mut slider = ComparisonSlider::mount(props("a"), Bounds::new(40.0, 0.0, w, 90.0), &surface);
    slider.click(40.0 + w / 4.0, PointerSource::Mouse);
    assert_eq!(slider.position().percent(), 25.0);
    assert!(!slider.is_dragging());
}

// ── 3. Geometry freshness ────────────────────────────────────────────

#[test]
fn width_change_between_events_is_honoured() {
    let surface = InputSurface::new();
    let bounds = LiveBounds::new();
    bounds.set(Bounds::new(0.0, 0.0, 200.0, 50.0));
    let mut slider = ComparisonSlider::mount(props("a"), bounds.clone(), &surface);

    slider.press(100.0, PointerSource::Mouse);
    assert_eq!(slider.position().percent(), 50.0);

    // Responsive reflow: the container shrinks to half its width.
    bounds.set(Bounds::new(0.0, 0.0, 100.0, 50.0));
    surface.dispatch(move_to(100.0));
    assert_eq!(slider.position().percent(), 100.0);

    bounds.set(Bounds::new(0.0, 0.0, 400.0, 50.0));
    surface.dispatch(move_to(100.0));
    assert_eq!(slider.position().percent(), 25.0);
}

#[test]
fn bounds_are_queried_on_every_event() {
    let surface = InputSurface::new();
    let queries = Rc::new(Cell::new(0));
    let source = CountingBounds {
        bounds: Bounds::new(0.0, 0.0, 100.0, 10.0),
        queries: queries.clone(),
    };
    let mut slider = ComparisonSlider::mount(props("a"), source, &surface);

    slider.press(10.0, PointerSource::Mouse);
    surface.dispatch(move_to(20.0));
    surface.dispatch(move_to(30.0));
    slider.press(40.0, PointerSource::Mouse);
    assert_eq!(queries.get(), 4);
}

// ── 4. Cleanup and isolation ─────────────────────────────────────────

#[test]
fn unmount_mid_drag_leaves_no_listener_behind() {
    let surface = InputSurface::new();
    let mut slider =
        ComparisonSlider::mount(props("a"), Bounds::new(0.0, 0.0, 100.0, 10.0), &surface);
    slider.press(10.0, PointerSource::Touch);
    assert_eq!(surface.listener_count(), 1);

    drop(slider);

    assert_eq!(surface.listener_count(), 0);
    assert_eq!(surface.dispatch(move_to(99.0)), 0);
    assert_eq!(surface.dispatch(release(PointerSource::Touch)), 0);
}

#[test]
fn sliders_sharing_a_surface_only_track_their_own_drag() {
    let surface = InputSurface::new();
    let mut left =
        ComparisonSlider::mount(props("left"), Bounds::new(0.0, 0.0, 100.0, 10.0), &surface);
    let mut right =
        ComparisonSlider::mount(props("right"), Bounds::new(100.0, 0.0, 100.0, 10.0), &surface);

    left.press(20.0, PointerSource::Mouse);
    surface.dispatch(move_to(150.0));
    assert_eq!(left.position(), SliderPosition::MAX);
    assert_eq!(right.position(), SliderPosition::MID);
    surface.dispatch(release(PointerSource::Mouse));

    right.press(125.0, PointerSource::Mouse);
    assert_eq!(surface.listener_count(), 1);
    surface.dispatch(move_to(0.0));
    assert_eq!(left.position(), SliderPosition::MAX);
    assert_eq!(right.position(), SliderPosition::MIN);

    drop(left);
    assert_eq!(surface.listener_count(), 1);
    surface.dispatch(release(PointerSource::Mouse));
    assert!(!right.is_dragging());
    assert_eq!(surface.listener_count(), 0);
}
