//! Gallery section: a page of before/after comparison sliders.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::ui::columns;
use crate::ui::widgets::ComparisonView;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let mut subtitle = vec![
        Span::styled("Drag the handle to watch the magic happen.", theme.secondary()),
        Span::styled(
            format!(
                "   page {}/{}",
                app.gallery.page + 1,
                app.page_count()
            ),
            theme.accent(),
        ),
    ];
    if let Some(dragging) = app.dragging_slider() {
        subtitle.push(Span::styled(
            format!(
                "   {} {:.0}%",
                dragging.slider.props().title,
                dragging.slider.position().percent()
            ),
            theme.secondary(),
        ));
    }
    let header = vec![
        Line::from(Span::styled("Hall of Fame", theme.heading())),
        Line::from(subtitle),
    ];
    f.render_widget(Paragraph::new(header).style(theme.page()), header_area);

    if app.showcases.is_empty() {
        let msg = format!(
            "No restorations found in {}. Add folders with *_before.* and *_after.* images.",
            app.config.gallery.root.display()
        );
        f.render_widget(
            Paragraph::new(msg)
                .style(theme.secondary())
                .alignment(Alignment::Center),
            body_area,
        );
    } else {
        let slots = columns(body_area, app.gallery.per_page, 2);
        for (mounted, slot) in app.gallery.mounted.iter().zip(slots) {
            let Some(showcase) = app.showcases.get(mounted.showcase) else {
                continue;
            };
            let view = ComparisonView::new(
                showcase,
                mounted.slider.position(),
                &mounted.bounds,
                theme,
            )
            .pressed(mounted.slider.is_dragging());
            f.render_widget(view, slot);
        }
    }

    let footer = Line::from(vec![
        Span::styled("More restorations on Instagram → ", theme.secondary()),
        Span::styled(app.config.studio.instagram.as_str(), theme.accent()),
    ]);
    f.render_widget(
        Paragraph::new(footer)
            .style(theme.page())
            .alignment(Alignment::Center),
        footer_area,
    );
}
