//! Reveal position and pointer-to-position mapping.

use crate::geometry::Bounds;

/// Percent of the container width covered by the "after" layer, in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SliderPosition(f64);

impl SliderPosition {
    pub const MIN: SliderPosition = SliderPosition(0.0);
    pub const MID: SliderPosition = SliderPosition(50.0);
    pub const MAX: SliderPosition = SliderPosition(100.0);

    /// Clamp into `[0, 100]`. NaN has no meaningful position and maps to `None`.
    pub fn new(percent: f64) -> Option<Self> {
        if percent.is_nan() {
            None
        } else {
            Some(Self(percent.clamp(0.0, 100.0)))
        }
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Where the reveal boundary falls in a surface `width` units wide.
    ///
    /// The after layer owns `[0, split)`, the before layer `[split, width)`.
    /// The handle belongs at `split.min(width - 1)`.
    pub fn split(self, width: u32) -> u32 {
        let at = (f64::from(width) * self.0 / 100.0).round();
        (at as u32).min(width)
    }

    /// Column of the handle for a surface `width` units wide.
    pub fn handle(self, width: u32) -> Option<u32> {
        if width == 0 {
            None
        } else {
            Some(self.split(width).min(width - 1))
        }
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self::MID
    }
}

/// Map a horizontal pointer coordinate to a position inside `bounds`.
///
/// The offset from the left edge is clamped to `[0, width]` before the
/// percentage is taken, so pointers far outside the container still land on
/// an edge. Returns `None` when the bounds cannot be mapped into (zero or
/// non-finite width) or the coordinate is NaN.
pub fn position_from_pointer(x: f64, bounds: &Bounds) -> Option<SliderPosition> {
    if !bounds.is_usable() || x.is_nan() {
        return None;
    }
    let offset = (x - bounds.x).clamp(0.0, bounds.width);
    SliderPosition::new(100.0 * offset / bounds.width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(width: f64) -> Bounds {
        Bounds::new(100.0, 0.0, width, 50.0)
    }

    #[test]
    fn quarter_offset_is_twenty_five_percent() {
        let p = position_from_pointer(100.0 + 50.0, &container(200.0)).unwrap();
        assert_eq!(p.percent(), 25.0);
    }

    #[test]
    fn far_outside_clamps_to_edges() {
        let b = container(200.0);
        assert_eq!(position_from_pointer(-1e9, &b), Some(SliderPosition::MIN));
        assert_eq!(position_from_pointer(1e9, &b), Some(SliderPosition::MAX));
        assert_eq!(
            position_from_pointer(f64::NEG_INFINITY, &b),
            Some(SliderPosition::MIN)
        );
        assert_eq!(
            position_from_pointer(f64::INFINITY, &b),
            Some(SliderPosition::MAX)
        );
    }

    #[test]
    fn unusable_input_maps_to_none() {
        assert_eq!(position_from_pointer(f64::NAN, &container(200.0)), None);
        assert_eq!(position_from_pointer(120.0, &container(0.0)), None);
    }

    #[test]
    fn split_and_handle_agree() {
        assert_eq!(SliderPosition::MID.split(40), 20);
        assert_eq!(SliderPosition::MID.handle(40), Some(20));
        assert_eq!(SliderPosition::MIN.split(40), 0);
        assert_eq!(SliderPosition::MAX.split(40), 40);
        assert_eq!(SliderPosition::MAX.handle(40), Some(39));
        assert_eq!(SliderPosition::MAX.handle(0), None);
        assert_eq!(SliderPosition::new(25.0).unwrap().split(10), 3);
    }

    #[test]
    fn new_clamps() {
        assert_eq!(SliderPosition::new(-3.0), Some(SliderPosition::MIN));
        assert_eq!(SliderPosition::new(300.0), Some(SliderPosition::MAX));
        assert_eq!(SliderPosition::new(f64::NAN), None);
    }
}
