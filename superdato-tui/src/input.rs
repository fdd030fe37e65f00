//! Input dispatch: keys → sections, mouse → sliders and the global surface.
//!
//! While the contact form is focused it takes the keyboard, Ctrl+C aside;
//! Esc hands it back to section navigation.
//!
//! Mouse routing mirrors a document with pointer listeners:
//! - left press on a slider's image starts a drag on that slider
//! - right press on a slider is a tap: seek without dragging
//! - movement and release go to the global surface, wherever they happen

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use superdato_core::{GlobalPointerEvent, PointerSource};

use crate::app::{App, Section};

/// Horizontal host coordinate of a terminal cell: its left edge.
///
/// With this mapping the reveal boundary lands on the column under the
/// pointer, and the handle is drawn there.
pub fn pointer_x(column: u16) -> f64 {
    f64::from(column)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows sends both Press and Release.
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

    // 1. A focused form takes every key but Ctrl+C.
    if app.section == Section::Contact && app.contact.is_editing() && !ctrl_c {
        handle_form_key(app, key);
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        _ if ctrl_c => {
            app.quit();
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(section) = Section::from_index(index) {
                app.set_section(section);
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_section();
            } else {
                app.next_section();
            }
            return;
        }
        KeyCode::BackTab => {
            app.prev_section();
            return;
        }
        _ => {}
    }

    // 3. Section keys.
    match app.section {
        Section::Gallery => handle_gallery_key(app, key),
        Section::Reviews => handle_reviews_key(app, key),
        Section::Home | Section::Contact => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('f')) {
                app.start_quote();
            }
        }
        Section::Services => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Esc => app.contact.blur(),
        KeyCode::Enter => app.submit_contact_form(),
        KeyCode::Tab if shift => app.contact.focus_prev(),
        KeyCode::Tab | KeyCode::Down => app.contact.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.contact.focus_prev(),
        KeyCode::Backspace => app.contact.backspace(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.contact.insert(c);
        }
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('i') => {
            let link = app.config.studio.instagram.clone();
            app.set_status(format!("More restorations on Instagram: {link}"));
        }
        _ => {}
    }
}

fn handle_reviews_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.scroll_reviews(1),
        KeyCode::Char('h') | KeyCode::Left => app.scroll_reviews(-1),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let x = pointer_x(mouse.column);
    let y = f64::from(mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(target) = app.slider_index_at(mouse.column, mouse.row) else {
                return;
            };
            // A press without a release in between (the Up landed outside the
            // terminal): one mouse drives one drag.
            let stale = app
                .gallery
                .mounted
                .iter()
                .enumerate()
                .any(|(i, m)| i != target && m.slider.is_dragging());
            if stale {
                tracing::debug!("releasing previous mouse drag");
                app.surface.dispatch(GlobalPointerEvent::Release {
                    source: PointerSource::Mouse,
                });
            }
            app.gallery.mounted[target].slider.press(x, PointerSource::Mouse);
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if let Some(mounted) = app.slider_at(mouse.column, mouse.row) {
                mounted.slider.click(x, PointerSource::Mouse);
            }
        }
        MouseEventKind::Drag(_) | MouseEventKind::Moved => {
            app.surface.dispatch(GlobalPointerEvent::Move {
                x,
                y,
                source: PointerSource::Mouse,
            });
        }
        MouseEventKind::Up(_) => {
            app.surface.dispatch(GlobalPointerEvent::Release {
                source: PointerSource::Mouse,
            });
        }
        MouseEventKind::ScrollDown if app.section == Section::Reviews => app.scroll_reviews(1),
        MouseEventKind::ScrollUp if app.section == Section::Reviews => app.scroll_reviews(-1),
        _ => {}
    }
}
