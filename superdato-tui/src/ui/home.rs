//! Home section: studio pitch, headline stats, featured restoration.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::{Corner, PictureView};

/// Marques on the band under the hero.
const BRANDS: [&str; 4] = ["OMEGA", "LONGINES", "ZENITH", "ROLEX"];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let [main_area, _, strip_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    let [pitch_area, hero_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .spacing(2)
            .areas(main_area);

    render_pitch(f, pitch_area, app);
    render_hero(f, hero_area, app);
    render_brand_strip(f, strip_area, app);
}

/// `OMEGA ✦ LONGINES ✦ ...` on a dark band, repeated to fill the width.
fn render_brand_strip(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let band = Style::default()
        .fg(theme.white)
        .bg(theme.ink)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(" ", band)];
    let mut used = 1;
    for (i, brand) in BRANDS.iter().cycle().enumerate() {
        if used >= usize::from(area.width) {
            break;
        }
        let colour = match i % BRANDS.len() {
            1 => theme.orange,
            3 => theme.purple,
            _ => theme.white,
        };
        spans.push(Span::styled(*brand, band.fg(colour)));
        spans.push(Span::styled(" ✦ ", band));
        used += brand.chars().count() + 3;
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(band), area);
}

fn render_pitch(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let studio = &app.config.studio;

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" ✨ {} ", studio.badge),
            Style::default()
                .fg(theme.white)
                .bg(theme.purple)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(studio.tagline.as_str(), theme.heading())),
        Line::default(),
        Line::from(Span::styled(studio.pitch.as_str(), theme.secondary())),
        Line::default(),
    ];

    let headline: Vec<Span> = app
        .config
        .stats
        .iter()
        .take(2)
        .flat_map(|stat| {
            [
                Span::styled(stat.value.as_str(), theme.accent()),
                Span::styled(format!(" {}    ", stat.label), theme.secondary()),
            ]
        })
        .collect();
    lines.push(Line::from(headline));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            " Restore my watch → ",
            Style::default()
                .fg(theme.white)
                .bg(theme.orange)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Enter", theme.secondary()),
    ]));

    f.render_widget(
        Paragraph::new(lines)
            .style(theme.page())
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Before stacked over after, both full width, no slider.
fn render_hero(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let Some(hero) = app.hero_showcase() else {
        return;
    };

    let [before_area, after_area, caption_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    f.render_widget(
        PictureView::new(&hero.before, theme).label("BEFORE", theme.before_label(), Corner::TopLeft),
        before_area,
    );
    f.render_widget(
        PictureView::new(&hero.after, theme).label("AFTER", theme.after_label(), Corner::TopRight),
        after_area,
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(hero.restoration.title.as_str(), theme.heading()),
            Span::styled("  ", theme.page()),
            Span::styled(hero.restoration.tag.as_str(), theme.accent()),
        ]))
        .style(theme.page()),
        caption_area,
    );
}
