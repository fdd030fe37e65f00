//! Bottom status bar: section hints and the last status message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Section, StatusLevel};

fn hints(section: Section, editing: bool) -> &'static str {
    match section {
        Section::Home => " Enter:Request a quote  Tab:Next  q:Quit",
        Section::Services => " Tab:Next  q:Quit",
        Section::Gallery => " Drag the handle  Right-click:Seek  ←/→:Page  i:Instagram  q:Quit",
        Section::Reviews => " ←/→:Scroll  q:Quit",
        Section::Contact if editing => " Tab/↑↓:Field  Enter:Send  Esc:Done  Ctrl+C:Quit",
        Section::Contact => " Enter:Fill in the form  Tab:Next  q:Quit",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = vec![Span::styled(hints(app.section, app.contact.is_editing()), theme.secondary())];

    if let Some((msg, level, at)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme.accent(),
            StatusLevel::Warning => Style::default().fg(theme.pink).bg(theme.paper),
        };
        spans.push(Span::styled(" | ", theme.secondary()));
        spans.push(Span::styled(format!("{} ", at.format("%H:%M")), theme.secondary()));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(theme.page()), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_hints_follow_form_focus() {
        assert!(hints(Section::Contact, false).contains("Fill in the form"));
        assert!(hints(Section::Contact, true).contains("Esc:Done"));
        assert_eq!(hints(Section::Reviews, true), hints(Section::Reviews, false));
    }
}
