//! On-screen geometry capability.
//!
//! The slider never computes its own layout. Whatever renders it reports the
//! rectangle it drew into, and the slider asks for that rectangle again on
//! every pointer event.

use std::cell::Cell;
use std::rc::Rc;

/// Axis-aligned rectangle in host coordinates (pixels, terminal cells, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Half-open containment: left/top edges inclusive, right/bottom exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// A rectangle the slider can map a pointer into.
    pub fn is_usable(&self) -> bool {
        self.x.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// Query the current on-screen rectangle of a rendered element.
///
/// Returns `None` while the element has not been laid out yet.
pub trait BoundsSource {
    fn bounds(&self) -> Option<Bounds>;
}

impl BoundsSource for Bounds {
    fn bounds(&self) -> Option<Bounds> {
        Some(*self)
    }
}

impl<T: BoundsSource + ?Sized> BoundsSource for Rc<T> {
    fn bounds(&self) -> Option<Bounds> {
        (**self).bounds()
    }
}

/// Shared cell written by the renderer each frame and read by the slider on
/// each event. Clones share the same cell.
#[derive(Debug, Clone, Default)]
pub struct LiveBounds(Rc<Cell<Option<Bounds>>>);

impl LiveBounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, bounds: Bounds) {
        self.0.set(Some(bounds));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn get(&self) -> Option<Bounds> {
        self.0.get()
    }
}

impl BoundsSource for LiveBounds {
    fn bounds(&self) -> Option<Bounds> {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let b = Bounds::new(10.0, 5.0, 20.0, 4.0);
        assert!(b.contains(10.0, 5.0));
        assert!(b.contains(29.9, 8.9));
        assert!(!b.contains(30.0, 6.0));
        assert!(!b.contains(15.0, 9.0));
        assert!(!b.contains(9.9, 6.0));
    }

    #[test]
    fn zero_width_is_not_usable() {
        assert!(!Bounds::new(0.0, 0.0, 0.0, 10.0).is_usable());
        assert!(!Bounds::new(0.0, 0.0, f64::NAN, 10.0).is_usable());
        assert!(Bounds::new(-5.0, 0.0, 1.0, 0.0).is_usable());
    }

    #[test]
    fn live_bounds_clones_share_the_cell() {
        let writer = LiveBounds::new();
        let reader = writer.clone();
        assert_eq!(reader.bounds(), None);

        writer.set(Bounds::new(0.0, 0.0, 40.0, 10.0));
        assert_eq!(reader.bounds().map(|b| b.width), Some(40.0));

        writer.clear();
        assert_eq!(reader.bounds(), None);
    }
}
