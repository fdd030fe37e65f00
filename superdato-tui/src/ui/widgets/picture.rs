//! Half-block image painting.
//!
//! Each terminal cell shows two stacked pixels: `▀` in the top pixel's colour
//! over a background of the bottom pixel's colour.

use std::ops::Range;

use image::RgbImage;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::pictures::Picture;
use crate::theme::Theme;

const UPPER_HALF: &str = "▀";

fn rgb(img: &RgbImage, x: u32, y: u32) -> Color {
    let [r, g, b] = img.get_pixel(x, y).0;
    Color::Rgb(r, g, b)
}

/// Paint columns `cols` (relative to `area.x`) of `picture`, sampled to fill
/// the whole `area`. Placeholders get a hatch pattern instead.
pub fn paint(buf: &mut Buffer, area: Rect, picture: &Picture, cols: Range<u16>, theme: &Theme) {
    let cols = cols.start.min(area.width)..cols.end.min(area.width);
    if cols.is_empty() || area.height == 0 {
        return;
    }

    let painted = picture.with_sample(
        u32::from(area.width),
        u32::from(area.height) * 2,
        |img| {
            for cy in 0..area.height {
                for cx in cols.clone() {
                    let top = rgb(img, u32::from(cx), u32::from(cy) * 2);
                    let bottom = rgb(img, u32::from(cx), u32::from(cy) * 2 + 1);
                    if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                        cell.set_symbol(UPPER_HALF).set_fg(top).set_bg(bottom);
                    }
                }
            }
        },
    );

    if painted.is_none() {
        for cy in 0..area.height {
            for cx in cols.clone() {
                let symbol = if (cx + cy) % 2 == 0 { "╱" } else { " " };
                if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                    cell.set_symbol(symbol).set_fg(theme.muted).set_bg(theme.paper);
                }
            }
        }
        placeholder_name(buf, area, picture, cols, theme);
    }
}

/// Name the missing file on the middle row, clipped to `cols`, when it fits.
fn placeholder_name(
    buf: &mut Buffer,
    area: Rect,
    picture: &Picture,
    cols: Range<u16>,
    theme: &Theme,
) {
    let Some(name) = picture.source().file_name() else {
        return;
    };
    let name = name.to_string_lossy();
    if name.chars().count() + 2 > usize::from(area.width) {
        return;
    }
    let y = area.y + area.height / 2;
    for (cx, ch) in (1u16..).zip(name.chars()) {
        if !cols.contains(&cx) {
            continue;
        }
        if let Some(cell) = buf.cell_mut((area.x + cx, y)) {
            cell.set_char(ch).set_fg(theme.ink).set_bg(theme.paper);
        }
    }
}

/// A whole picture with an optional corner label.
pub struct PictureView<'a> {
    picture: &'a Picture,
    theme: &'a Theme,
    label: Option<(&'a str, Style, Corner)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
}

impl<'a> PictureView<'a> {
    pub fn new(picture: &'a Picture, theme: &'a Theme) -> Self {
        Self {
            picture,
            theme,
            label: None,
        }
    }

    pub fn label(mut self, text: &'a str, style: Style, corner: Corner) -> Self {
        self.label = Some((text, style, corner));
        self
    }
}

/// Write ` text ` into a corner of `area`, if it fits.
pub fn corner_label(buf: &mut Buffer, area: Rect, text: &str, style: Style, corner: Corner) {
    let width = text.chars().count() as u16 + 2;
    if area.width < width + 2 || area.height == 0 {
        return;
    }
    let x = match corner {
        Corner::TopLeft => area.x + 1,
        Corner::TopRight => area.right() - width - 1,
    };
    buf.set_string(x, area.y, format!(" {text} "), style);
}

impl Widget for PictureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        paint(buf, area, self.picture, 0..area.width, self.theme);
        if let Some((text, style, corner)) = self.label {
            corner_label(buf, area, text, style, corner);
        }
    }
}
