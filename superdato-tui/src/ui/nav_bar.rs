//! Top navigation bar: studio name and section tabs.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Section};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = vec![
        Span::styled(format!(" {} ", app.config.studio.name), theme.accent()),
        Span::styled(" ", theme.page()),
    ];

    for section in Section::ALL {
        let label = format!(" {}:{} ", section.index() + 1, section.label());
        let style = if section == app.section {
            Style::default()
                .fg(theme.white)
                .bg(theme.orange)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.page()
        };
        spans.push(Span::styled(label, style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(theme.page()), area);
}
