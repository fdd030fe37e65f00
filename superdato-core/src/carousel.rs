//! Horizontally scrolling testimonial strip.
//!
//! Scrolling stops at both ends instead of wrapping, the way a scroll
//! container does.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    offset: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, offset: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the first visible card.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Restore a saved offset, clamped to the last card.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset.min(self.len.saturating_sub(1));
        self
    }

    /// Scroll by `delta` cards with `visible` cards on screen.
    pub fn scroll_by(&mut self, delta: isize, visible: usize) {
        let max = self.max_offset(visible);
        let target = self.offset as isize + delta;
        self.offset = target.clamp(0, max as isize) as usize;
    }

    pub fn can_scroll_back(&self) -> bool {
        self.offset > 0
    }

    pub fn can_scroll_forward(&self, visible: usize) -> bool {
        self.offset < self.max_offset(visible)
    }

    /// Indices of the cards on screen.
    pub fn visible_range(&self, visible: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(self.max_offset(visible));
        start..(start + visible.max(1)).min(self.len)
    }

    fn max_offset(&self, visible: usize) -> usize {
        self.len.saturating_sub(visible.max(1))
    }
}
