//! Contact section: studio details and the quote request form.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::contact_form::FormField;

const CURSOR: &str = "▏";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let [info_area, form_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .spacing(2)
            .areas(area);

    render_info(f, info_area, app);
    render_form(f, form_area, app);
}

fn render_info(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let contact = &app.config.contact;

    let [blurb_area, details_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(6)]).areas(area);

    let blurb = vec![
        Line::from(Span::styled("Ready to bring it back?", theme.heading())),
        Line::default(),
        Line::from(Span::styled(contact.blurb.as_str(), theme.secondary())),
        Line::default(),
        Line::from(Span::styled(
            "Send a photo of the dial and caseback for a free estimate.",
            theme.page(),
        )),
    ];
    f.render_widget(
        Paragraph::new(blurb)
            .style(theme.page())
            .wrap(Wrap { trim: true }),
        blurb_area,
    );

    let row = |label: &str, value: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), theme.secondary()),
            Span::styled(value.to_string(), theme.accent()),
        ])
    };
    let details = vec![
        row("Phone", contact.phone.as_str()),
        row("Email", contact.email.as_str()),
        row("Studio", contact.location.as_str()),
        row("Instagram", app.config.studio.instagram.as_str()),
    ];
    f.render_widget(
        Paragraph::new(details).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border(false))
                .title(" Get in touch ")
                .title_style(theme.heading())
                .style(theme.page()),
        ),
        details_area,
    );
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let form = &app.contact;

    let [title_area, name_area, email_area, story_area, photo_area, button_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Shall we start the project?", theme.heading())),
            Line::from(Span::styled(
                "Fill in the form and send me a photo.",
                theme.secondary(),
            )),
        ])
        .style(theme.page()),
        title_area,
    );

    for (field, slot) in FormField::ALL
        .into_iter()
        .zip([name_area, email_area, story_area, photo_area])
    {
        render_field(f, slot, app, field);
    }

    let mut button = vec![Span::styled(
        " SEND REQUEST → ",
        Style::default()
            .fg(theme.white)
            .bg(theme.orange)
            .add_modifier(Modifier::BOLD),
    )];
    let hint = if form.is_editing() {
        "  Enter"
    } else {
        "  Enter to fill in"
    };
    button.push(Span::styled(hint, theme.secondary()));
    f.render_widget(
        Paragraph::new(Line::from(button)).style(theme.page()),
        button_area,
    );
}

fn render_field(f: &mut Frame, area: Rect, app: &App, field: FormField) {
    let theme = &app.theme;
    let focused = app.contact.focused == Some(field);
    let value = app.contact.value(field);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border(focused))
        .title(format!(" {} * ", field.label()))
        .title_style(if focused { theme.accent() } else { theme.heading() })
        .style(theme.page());
    let inner_width = usize::from(block.inner(area).width);

    let mut spans = if value.is_empty() {
        vec![Span::styled(field.placeholder(), theme.secondary())]
    } else if field == FormField::Story {
        vec![Span::styled(value, theme.page())]
    } else {
        vec![Span::styled(tail(value, inner_width.saturating_sub(1)), theme.page())]
    };
    if focused {
        let cursor = Span::styled(CURSOR, theme.accent());
        if value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let mut paragraph = Paragraph::new(Line::from(spans)).block(block);
    if field == FormField::Story {
        paragraph = paragraph.wrap(Wrap { trim: false });
    }
    f.render_widget(paragraph, area);
}

/// The last `width` characters of `value`, so the end being typed stays visible.
fn tail(value: &str, width: usize) -> &str {
    let count = value.chars().count();
    if count <= width {
        return value;
    }
    let skip = count - width;
    value
        .char_indices()
        .nth(skip)
        .map_or("", |(at, _)| &value[at..])
}
