//! Reviews section: horizontally scrolling testimonial cards.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use superdato_core::config::MAX_STARS;

use crate::app::App;
use crate::theme::Theme;
use crate::ui::columns;

/// Card width including the gap.
const CARD_WIDTH: u16 = 36;

/// How many cards fit across `width` cells.
pub fn cards_that_fit(width: u16) -> usize {
    usize::from(width / CARD_WIDTH).max(1)
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let [title_area, cards_area, arrows_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Approved by the community",
            theme.heading(),
        )))
        .style(theme.page()),
        title_area,
    );

    let visible = cards_that_fit(cards_area.width);
    app.reviews_visible.set(visible);

    let range = app.reviews.visible_range(visible);
    let testimonials = &app.config.testimonials[range.clone()];
    for ((index, testimonial), slot) in range
        .zip(testimonials)
        .zip(columns(cards_area, visible, 2))
    {
        let accent = theme.card_accent(index);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border(false))
            .title(Span::styled(
                format!(" {} ", testimonial.initials),
                Style::default()
                    .fg(theme.white)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(theme.page());
        let lines = vec![
            Line::from(Span::styled(testimonial.handle.as_str(), theme.heading())),
            Line::from(Span::styled(
                Theme::stars(testimonial.stars, MAX_STARS),
                Style::default().fg(theme.orange).bg(theme.paper),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("\"{}\"", testimonial.text),
                theme.page(),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            slot,
        );
    }

    let back = if app.reviews.can_scroll_back() { "◀" } else { " " };
    let forward = if app.reviews.can_scroll_forward(visible) { "▶" } else { " " };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(back, theme.accent()),
            Span::styled(
                format!(
                    "  {}/{}  ",
                    app.reviews.offset().min(app.reviews.len().saturating_sub(1)) + 1,
                    app.reviews.len().max(1)
                ),
                theme.secondary(),
            ),
            Span::styled(forward, theme.accent()),
        ]))
        .alignment(Alignment::Center)
        .style(theme.page()),
        arrows_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_one_card_fits() {
        assert_eq!(cards_that_fit(10), 1);
        assert_eq!(cards_that_fit(72), 2);
        assert_eq!(cards_that_fit(120), 3);
    }
}
