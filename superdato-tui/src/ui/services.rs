//! Services section: service cards and the stats strip.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::columns;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let [intro_area, cards_area, stats_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Traditional craft, modern tooling.",
            theme.secondary(),
        )))
        .style(theme.page()),
        intro_area,
    );

    let services = &app.config.services;
    for (i, (service, slot)) in services
        .iter()
        .zip(columns(cards_area, services.len(), 2))
        .enumerate()
    {
        let accent = theme.card_accent(i);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border(false))
            .title(Span::styled(
                format!(" ● {} ", service.title),
                Style::default()
                    .fg(accent)
                    .bg(theme.paper)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(theme.page());
        f.render_widget(
            Paragraph::new(service.description.as_str())
                .style(theme.secondary())
                .wrap(Wrap { trim: true })
                .block(block),
            slot,
        );
    }

    let stats = &app.config.stats;
    for (stat, slot) in stats.iter().zip(columns(stats_area, stats.len(), 1)) {
        let lines = vec![
            Line::from(Span::styled(stat.value.as_str(), theme.accent())),
            Line::from(Span::styled(stat.label.as_str(), theme.secondary())),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .style(theme.page())
                .alignment(Alignment::Center),
            slot,
        );
    }
}
