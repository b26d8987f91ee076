use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => close_editor(app),
        // Enter commits a task title; in a note it inserts a newline.
        KeyCode::Enter => match app.edit_target {
            Some(EditTarget::TaskTitle) => commit(app),
            Some(EditTarget::NoteText) => insert_char(app, '\n'),
            None => close_editor(app),
        },
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.edit_target == Some(EditTarget::NoteText) {
                commit(app);
            }
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.edit_buffer.len(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            insert_char(app, c);
        }
        _ => {}
    }
}

fn insert_char(app: &mut App, c: char) {
    app.edit_buffer.insert(app.edit_cursor, c);
    app.edit_cursor += c.len_utf8();
}

/// Commit the buffer to its store. The store drops whitespace-only input
/// itself; either way the pending buffer is cleared.
fn commit(app: &mut App) {
    match app.edit_target {
        Some(EditTarget::TaskTitle) => {
            if app.tasks.add(&app.edit_buffer).is_some() {
                // New task lands at the top of the list
                app.task_cursor = 0;
            }
        }
        Some(EditTarget::NoteText) => {
            if app.notes.add(&app.edit_buffer).is_some() {
                app.note_cursor = 0;
            }
        }
        None => {}
    }
    close_editor(app);
}

fn close_editor(app: &mut App) {
    app.mode = Mode::Navigate;
    app.edit_target = None;
    app.edit_buffer.clear();
    app.edit_cursor = 0;
}
