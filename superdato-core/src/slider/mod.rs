//! Before/after comparison slider.
//!
//! The slider owns a reveal position and a drag phase. Presses and taps
//! arrive from the host on the slider's own surface; moves and releases
//! during a drag arrive through the shared [`InputSurface`], so a drag keeps
//! tracking after the pointer leaves the slider and ends wherever the button
//! is released.
//!
//! ```text
//!             press                    release (anywhere)
//!   Idle ───────────────▶ Dragging ─────────────────────▶ Idle
//!    │  click: seek         │  move (anywhere): seek
//!    └──────────────────    │  press: seek, stay
//! ```
//!
//! While Dragging the phase owns the global [`Subscription`]. Leaving the
//! phase or dropping the slider drops the subscription, so no global
//! listener outlives the drag.

pub mod position;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::geometry::BoundsSource;
use crate::input::{
    GlobalPointerEvent, GlobalPointerListener, InputSurface, PointerSource, Subscription,
};

pub use position::{position_from_pointer, SliderPosition};

/// Inputs the slider is mounted with. Image references are opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderProps {
    pub before: PathBuf,
    pub after: PathBuf,
    pub title: String,
    pub tag: String,
}

/// Observable drag phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging(PointerSource),
}

enum DragState {
    Idle,
    Dragging {
        source: PointerSource,
        _capture: Subscription,
    },
}

struct SliderCore<B> {
    position: SliderPosition,
    drag: DragState,
    bounds: B,
}

impl<B: BoundsSource> SliderCore<B> {
    /// Recompute from live geometry. Keeps the previous position when the
    /// container cannot be resolved.
    fn seek(&mut self, x: f64) -> bool {
        let Some(bounds) = self.bounds.bounds() else {
            return false;
        };
        match position_from_pointer(x, &bounds) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}

impl<B: BoundsSource> GlobalPointerListener for SliderCore<B> {
    fn on_global_pointer(&mut self, event: &GlobalPointerEvent) {
        if let DragState::Idle = self.drag {
            return;
        }
        match *event {
            GlobalPointerEvent::Move { x, .. } => {
                self.seek(x);
            }
            GlobalPointerEvent::Release { source } => {
                tracing::debug!(?source, position = self.position.percent(), "drag ended");
                self.drag = DragState::Idle;
            }
        }
    }
}

/// A mounted comparison slider.
///
/// Dropping it is the unmount: any in-flight drag subscription goes with it.
pub struct ComparisonSlider<B: BoundsSource + 'static> {
    props: SliderProps,
    core: Rc<RefCell<SliderCore<B>>>,
    surface: InputSurface,
}

impl<B: BoundsSource + 'static> ComparisonSlider<B> {
    /// Mount at the midpoint, idle, with no global listeners installed.
    pub fn mount(props: SliderProps, bounds: B, surface: &InputSurface) -> Self {
        Self {
            props,
            core: Rc::new(RefCell::new(SliderCore {
                position: SliderPosition::MID,
                drag: DragState::Idle,
                bounds,
            })),
            surface: surface.clone(),
        }
    }

    pub fn props(&self) -> &SliderProps {
        &self.props
    }

    pub fn position(&self) -> SliderPosition {
        self.core.borrow().position
    }

    pub fn phase(&self) -> DragPhase {
        match self.core.borrow().drag {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging { source, .. } => DragPhase::Dragging(source),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase(), DragPhase::Dragging(_))
    }

    /// Pointer-down or touch-start on the slider surface.
    ///
    /// Starts a drag and seeks to `x`. A press while already dragging only
    /// seeks; the existing global subscription is kept.
    pub fn press(&mut self, x: f64, source: PointerSource) {
        let mut core = self.core.borrow_mut();
        core.seek(x);
        if let DragState::Idle = core.drag {
            let listener: Rc<RefCell<dyn GlobalPointerListener>> = self.core.clone();
            let capture = self.surface.subscribe(Rc::downgrade(&listener));
            tracing::debug!(
                title = %self.props.title,
                ?source,
                position = core.position.percent(),
                "drag started"
            );
            core.drag = DragState::Dragging {
                source,
                _capture: capture,
            };
        }
    }

    /// Single click or tap without a drag: seek to `x`.
    ///
    /// Ignored while a drag is in progress; the drag owns the position then.
    pub fn click(&mut self, x: f64, _source: PointerSource) {
        let mut core = self.core.borrow_mut();
        if let DragState::Idle = core.drag {
            core.seek(x);
        }
    }
}

impl<B: BoundsSource + 'static> std::fmt::Debug for ComparisonSlider<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonSlider")
            .field("title", &self.props.title)
            .field("position", &self.position())
            .field("phase", &self.phase())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Bounds, LiveBounds};

    fn props() -> SliderProps {
        SliderProps {
            before: PathBuf::from("omega/omega_before.jpg"),
            after: PathBuf::from("omega/omega_after.jpg"),
            title: "Omega".into(),
            tag: "#Omega".into(),
        }
    }

    fn mounted(width: f64) -> (ComparisonSlider<LiveBounds>, LiveBounds, InputSurface) {
        let surface = InputSurface::new();
        let bounds = LiveBounds::new();
        bounds.set(Bounds::new(0.0, 0.0, width, 10.0));
        let slider = ComparisonSlider::mount(props(), bounds.clone(), &surface);
        (slider, bounds, surface)
    }

    fn moved(x: f64) -> GlobalPointerEvent {
        GlobalPointerEvent::Move {
            x,
            y: 0.0,
            source: PointerSource::Mouse,
        }
    }

    const RELEASE: GlobalPointerEvent = GlobalPointerEvent::Release {
        source: PointerSource::Mouse,
    };

    #[test]
    fn mounts_idle_at_midpoint() {
        let (slider, _, surface) = mounted(200.0);
        assert_eq!(slider.position(), SliderPosition::MID);
        assert_eq!(slider.phase(), DragPhase::Idle);
        assert_eq!(surface.listener_count(), 0);
        assert_eq!(slider.props(), &props());
    }

    #[test]
    fn press_seeks_and_subscribes() {
        let (mut slider, _, surface) = mounted(200.0);
        slider.press(150.0, PointerSource::Touch);
        assert_eq!(slider.position().percent(), 75.0);
        assert_eq!(slider.phase(), DragPhase::Dragging(PointerSource::Touch));
        assert_eq!(surface.listener_count(), 1);
    }

    #[test]
    fn release_ends_drag_and_unsubscribes() {
        let (mut slider, _, surface) = mounted(200.0);
        slider.press(20.0, PointerSource::Mouse);
        surface.dispatch(moved(60.0));
        assert_eq!(slider.position().percent(), 30.0);

        surface.dispatch(RELEASE);
        assert!(!slider.is_dragging());
        assert_eq!(surface.listener_count(), 0);

        surface.dispatch(moved(180.0));
        assert_eq!(slider.position().percent(), 30.0);
    }

    #[test]
    fn repress_while_dragging_keeps_single_subscription() {
        let (mut slider, _, surface) = mounted(100.0);
        slider.press(10.0, PointerSource::Mouse);
        slider.press(90.0, PointerSource::Mouse);
        assert_eq!(slider.position().percent(), 90.0);
        assert_eq!(surface.listener_count(), 1);
        assert!(slider.is_dragging());
    }

    #[test]
    fn click_seeks_only_when_idle() {
        let (mut slider, _, _surface) = mounted(100.0);
        slider.click(25.0, PointerSource::Mouse);
        assert_eq!(slider.position().percent(), 25.0);
        assert!(!slider.is_dragging());

        slider.press(40.0, PointerSource::Mouse);
        slider.click(95.0, PointerSource::Mouse);
        assert_eq!(slider.position().percent(), 40.0);
    }

    #[test]
    fn press_before_layout_keeps_position_but_starts_drag() {
        let surface = InputSurface::new();
        let bounds = LiveBounds::new();
        let mut slider = ComparisonSlider::mount(props(), bounds.clone(), &surface);

        slider.press(10.0, PointerSource::Mouse);
        assert_eq!(slider.position(), SliderPosition::MID);
        assert!(slider.is_dragging());

        bounds.set(Bounds::new(0.0, 0.0, 100.0, 10.0));
        surface.dispatch(moved(10.0));
        assert_eq!(slider.position().percent(), 10.0);
    }

    #[test]
    fn unmount_mid_drag_removes_listener() {
        let (mut slider, _, surface) = mounted(100.0);
        slider.press(10.0, PointerSource::Mouse);
        assert_eq!(surface.listener_count(), 1);

        drop(slider);
        assert_eq!(surface.listener_count(), 0);
        assert_eq!(surface.dispatch(moved(50.0)), 0);
        assert_eq!(surface.dispatch(RELEASE), 0);
    }
}
