//! Top-level UI layout: nav bar, active section, status bar.

pub mod contact;
pub mod gallery;
pub mod home;
pub mod nav_bar;
pub mod reviews;
pub mod services;
pub mod status_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use superdato_core::Bounds;

use crate::app::{App, Section};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &App) {
    let [nav_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    f.render_widget(Block::default().style(app.theme.page()), f.area());

    nav_bar::render(f, nav_area, app);
    draw_section(f, main_area, app);
    status_bar::render(f, status_area, app);
}

fn draw_section(f: &mut Frame, area: Rect, app: &App) {
    let section = app.section;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(app.theme.border(false))
        .title(format!(" {} ", section.label()))
        .title_style(app.theme.heading())
        .style(app.theme.page());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match section {
        Section::Home => home::render(f, inner, app),
        Section::Services => services::render(f, inner, app),
        Section::Gallery => gallery::render(f, inner, app),
        Section::Reviews => reviews::render(f, inner, app),
        Section::Contact => contact::render(f, inner, app),
    }
}

/// Host-coordinate rectangle of a terminal area, as sliders read it.
pub fn bounds_of(area: Rect) -> Bounds {
    Bounds::new(
        f64::from(area.x),
        f64::from(area.y),
        f64::from(area.width),
        f64::from(area.height),
    )
}

/// Split `area` into `count` equal columns separated by `gap` cells.
pub fn columns(area: Rect, count: usize, gap: u16) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = (0..count).map(|_| Constraint::Fill(1));
    Layout::horizontal(constraints)
        .spacing(gap)
        .split(area)
        .to_vec()
}
