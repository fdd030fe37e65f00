//! Workshop theme tokens for the SuperDato showcase
//!
//! Palette taken from the studio's printed material:
//! - **Paper**: warm off-white (page background)
//! - **Ink**: near-black (text, borders)
//! - **Orange**: signature accent (handles, tags, the "after" label)
//! - **Purple**: secondary accent (badges, service icons)
//! - **Pink**: tertiary accent (third service, warnings)
//! - **Muted**: slate gray (secondary copy)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Off-white page background
    pub paper: Color,
    /// Near-black text and borders
    pub ink: Color,
    /// Signature orange accent
    pub orange: Color,
    /// Secondary purple accent
    pub purple: Color,
    /// Tertiary pink accent
    pub pink: Color,
    /// Slate gray secondary text
    pub muted: Color,
    /// Pure white (labels, slider handle)
    pub white: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::workshop()
    }
}

impl Theme {
    pub fn workshop() -> Self {
        Self {
            paper: Color::Rgb(249, 247, 241),
            ink: Color::Rgb(26, 26, 26),
            orange: Color::Rgb(255, 107, 53),
            purple: Color::Rgb(131, 56, 236),
            pink: Color::Rgb(255, 0, 110),
            muted: Color::Rgb(107, 114, 128),
            white: Color::White,
        }
    }

    pub fn page(&self) -> Style {
        Style::default().fg(self.ink).bg(self.paper)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.ink)
            .bg(self.paper)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.muted).bg(self.paper)
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.orange)
            .bg(self.paper)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.orange).bg(self.paper)
        } else {
            Style::default().fg(self.ink).bg(self.paper)
        }
    }

    pub fn before_label(&self) -> Style {
        Style::default()
            .fg(self.white)
            .bg(self.ink)
            .add_modifier(Modifier::BOLD)
    }

    pub fn after_label(&self) -> Style {
        Style::default()
            .fg(self.white)
            .bg(self.orange)
            .add_modifier(Modifier::BOLD)
    }

    /// Slider handle. Pressed handles light up in the accent colour; the
    /// position itself is unaffected.
    pub fn handle(&self, pressed: bool) -> Style {
        let fg = if pressed { self.orange } else { self.white };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Cycle of accent colours for cards (services, review avatars).
    pub fn card_accent(&self, index: usize) -> Color {
        match index % 4 {
            0 => self.orange,
            1 => self.purple,
            2 => self.pink,
            _ => self.ink,
        }
    }

    /// `★★★★☆` for `stars` out of `max`.
    pub fn stars(stars: u8, max: u8) -> String {
        let filled = stars.min(max) as usize;
        let mut out = "★".repeat(filled);
        out.push_str(&"☆".repeat(max as usize - filled));
        out
    }
}
