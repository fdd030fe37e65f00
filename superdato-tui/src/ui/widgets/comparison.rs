//! Before/after comparison widget.
//!
//! Draws the before layer full-bleed, the after layer over the columns left
//! of the reveal boundary, and the handle on the boundary column. Mask and
//! handle both come from [`SliderPosition::split`], so they never disagree.
//! The image area is published to the slider's [`LiveBounds`] on every
//! render.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use superdato_core::{LiveBounds, SliderPosition};

use crate::pictures::Showcase;
use crate::theme::Theme;
use crate::ui::bounds_of;
use crate::ui::widgets::picture::{corner_label, paint, Corner};

const HANDLE: &str = "┃";
const GRIP: &str = "◆";

pub struct ComparisonView<'a> {
    showcase: &'a Showcase,
    position: SliderPosition,
    pressed: bool,
    bounds: &'a LiveBounds,
    theme: &'a Theme,
}

impl<'a> ComparisonView<'a> {
    pub fn new(
        showcase: &'a Showcase,
        position: SliderPosition,
        bounds: &'a LiveBounds,
        theme: &'a Theme,
    ) -> Self {
        Self {
            showcase,
            position,
            pressed: false,
            bounds,
            theme,
        }
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    fn render_image(&self, area: Rect, buf: &mut Buffer) {
        let width = area.width;
        let split = self.position.split(u32::from(width)) as u16;

        paint(buf, area, &self.showcase.before, split..width, self.theme);
        paint(buf, area, &self.showcase.after, 0..split, self.theme);

        if let Some(handle) = self.position.handle(u32::from(width)) {
            let x = area.x + handle as u16;
            let grip_row = area.y + area.height / 2;
            let style = self.theme.handle(self.pressed);
            for y in area.top()..area.bottom() {
                let symbol = if y == grip_row { GRIP } else { HANDLE };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }

        corner_label(buf, area, "BEFORE", self.theme.before_label(), Corner::TopLeft);
        corner_label(buf, area, "AFTER", self.theme.after_label(), Corner::TopRight);
    }

    fn caption(&self) -> Line<'a> {
        let showcase: &'a Showcase = self.showcase;
        let r = &showcase.restoration;
        Line::from(vec![
            Span::styled(r.title.as_str(), self.theme.heading()),
            Span::styled("  ", self.theme.page()),
            Span::styled(r.tag.as_str(), self.theme.accent()),
        ])
    }
}

impl Widget for ComparisonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border(self.pressed))
            .style(self.theme.page());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            // Nothing the pointer could land on.
            self.bounds.clear();
            return;
        }

        let [image_area, caption_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        self.bounds.set(bounds_of(image_area));
        self.render_image(image_area, buf);
        Paragraph::new(self.caption())
            .style(Style::default().bg(self.theme.paper))
            .render(caption_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_showcase, AFTER_RGB, BEFORE_RGB};
    use ratatui::style::Color;

    fn color(rgb: [u8; 3]) -> Color {
        Color::Rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Render at `percent` into a 22×8 area: image area is x 1..21, y 1..6.
    fn render_at(percent: f64, pressed: bool) -> (Buffer, LiveBounds) {
        let showcase = create_test_showcase("omega");
        let theme = Theme::default();
        let bounds = LiveBounds::new();
        let area = Rect::new(0, 0, 22, 8);
        let mut buf = Buffer::empty(area);
        let position = SliderPosition::new(percent).unwrap();
        ComparisonView::new(&showcase, position, &bounds, &theme)
            .pressed(pressed)
            .render(area, &mut buf);
        (buf, bounds)
    }

    #[test]
    fn publishes_image_area_as_bounds() {
        let (_, bounds) = render_at(50.0, false);
        let b = bounds.get().unwrap();
        assert_eq!((b.x, b.y, b.width, b.height), (1.0, 1.0, 20.0, 5.0));
    }

    #[test]
    fn after_layer_left_of_handle_before_layer_right() {
        // 25% of 20 columns → split at column 5 (absolute x = 6).
        let (buf, _) = render_at(25.0, false);
        let row = 4;
        assert_eq!(buf[(1, row)].bg, color(AFTER_RGB));
        assert_eq!(buf[(5, row)].bg, color(AFTER_RGB));
        assert_eq!(buf[(6, row)].symbol(), HANDLE);
        assert_eq!(buf[(7, row)].bg, color(BEFORE_RGB));
        assert_eq!(buf[(20, row)].bg, color(BEFORE_RGB));
    }

    #[test]
    fn grip_sits_mid_height_and_lights_up_when_pressed() {
        let (buf, _) = render_at(50.0, true);
        // Image rows 1..6, grip at 1 + 5/2 = 3; handle at 1 + 10.
        assert_eq!(buf[(11, 3)].symbol(), GRIP);
        assert_eq!(buf[(11, 3)].fg, Theme::default().orange);
    }

    #[test]
    fn edges_keep_handle_inside() {
        let (buf, _) = render_at(0.0, false);
        assert_eq!(buf[(1, 4)].symbol(), HANDLE);
        assert_eq!(buf[(2, 4)].bg, color(BEFORE_RGB));

        let (buf, _) = render_at(100.0, false);
        assert_eq!(buf[(20, 4)].symbol(), HANDLE);
        assert_eq!(buf[(19, 4)].bg, color(AFTER_RGB));
    }

    #[test]
    fn labels_and_caption_are_drawn() {
        let (buf, _) = render_at(50.0, false);
        let row: String = (0..22).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("BEFORE"));
        assert!(row.contains("AFTER"));
        let caption: String = (0..22).map(|x| buf[(x, 6)].symbol().to_string()).collect();
        assert!(caption.contains("Omega"));
        assert!(caption.contains("#Omega"));
    }

    #[test]
    fn too_small_clears_bounds() {
        let showcase = create_test_showcase("omega");
        let theme = Theme::default();
        let bounds = LiveBounds::new();
        bounds.set(superdato_core::Bounds::new(0.0, 0.0, 5.0, 5.0));
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        ComparisonView::new(&showcase, SliderPosition::MID, &bounds, &theme).render(area, &mut buf);
        assert!(bounds.get().is_none());
    }

    proptest::proptest! {
        #[test]
        fn mask_and_handle_agree_at_any_width(percent in 0.0f64..=100.0, width in 1u16..60) {
            let showcase = create_test_showcase("omega");
            let theme = Theme::default();
            let bounds = LiveBounds::new();
            let area = Rect::new(0, 0, width + 2, 8);
            let mut buf = Buffer::empty(area);
            let position = SliderPosition::new(percent).unwrap();
            ComparisonView::new(&showcase, position, &bounds, &theme).render(area, &mut buf);

            let handle = position.handle(u32::from(width)).unwrap() as u16;
            let row = 4;
            proptest::prop_assert_eq!(buf[(1 + handle, row)].symbol(), HANDLE);
            for col in 0..width {
                let cell = &buf[(1 + col, row)];
                if col < handle {
                    proptest::prop_assert_eq!(cell.bg, color(AFTER_RGB));
                } else if col > handle {
                    proptest::prop_assert_eq!(cell.bg, color(BEFORE_RGB));
                }
            }
        }
    }
}
