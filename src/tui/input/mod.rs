mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, EditTarget, Mode};

use edit::handle_edit;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

/// Handle a bracketed paste event (terminal sends pasted text as a single
/// string). Only active in Edit mode — inserts at the cursor.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Edit || text.is_empty() {
        return;
    }
    let clean = match app.edit_target {
        // Single-line title: flatten newlines to spaces
        Some(EditTarget::TaskTitle) => text.replace('\n', " ").replace('\r', ""),
        // Multi-line note: keep newlines
        Some(EditTarget::NoteText) => text.replace('\r', ""),
        None => return,
    };
    app.edit_buffer.insert_str(app.edit_cursor, &clean);
    app.edit_cursor += clean.len();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_task_via_keys() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Edit);

        type_text(&mut app, "Study React");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks.tasks().len(), 1);
        assert_eq!(app.tasks.tasks()[0].title, "Study React");
        assert!(app.edit_buffer.is_empty());
    }

    #[test]
    fn test_paste_into_title_flattens_newlines() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('a'));
        handle_paste(&mut app, "two\r\nlines");
        assert_eq!(app.edit_buffer, "two lines");
    }

    #[test]
    fn test_paste_into_note_keeps_newlines() {
        let mut app = App::new();
        app.panel = crate::tui::app::Panel::Notes;
        press(&mut app, KeyCode::Char('a'));
        handle_paste(&mut app, "two\nlines");
        assert_eq!(app.edit_buffer, "two\nlines");
    }

    #[test]
    fn test_paste_ignored_outside_edit_mode() {
        let mut app = App::new();
        handle_paste(&mut app, "stray");
        assert!(app.edit_buffer.is_empty());
        assert!(app.tasks.is_empty());
    }
}
