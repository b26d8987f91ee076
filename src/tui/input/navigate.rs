use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, EditTarget, Mode, Panel};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything until dismissed
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab => app.panel = app.panel.next(),
        KeyCode::BackTab => app.panel = app.panel.prev(),
        _ => match app.panel {
            Panel::Tasks => handle_tasks_key(app, key),
            Panel::Timer => handle_timer_key(app, key),
            Panel::Notes => handle_notes_key(app, key),
        },
    }
}

fn handle_tasks_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('i') => open_editor(app, EditTarget::TaskTitle),
        KeyCode::Char('j') | KeyCode::Down => {
            let visible = app.visible_tasks().len();
            if app.task_cursor + 1 < visible {
                app.task_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.task_cursor = app.task_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            let id = app.visible_tasks().get(app.task_cursor).map(|t| t.id);
            if let Some(id) = id {
                app.tasks.toggle(id);
                app.clamp_cursors();
            }
        }
        KeyCode::Char('d') => {
            let id = app.visible_tasks().get(app.task_cursor).map(|t| t.id);
            if let Some(id) = id {
                app.tasks.delete(id);
                app.clamp_cursors();
            }
        }
        KeyCode::Char('f') => {
            app.filter = app.filter.cycled();
            app.clamp_cursors();
        }
        _ => {}
    }
}

fn handle_timer_key(app: &mut App, key: KeyEvent) {
    // Invalid transitions are guarded inside the timer; keys just no-op
    match key.code {
        KeyCode::Char('s') => app.timer_start(),
        KeyCode::Char('p') => app.timer_pause(),
        KeyCode::Char('r') => app.timer_reset(),
        _ => {}
    }
}

fn handle_notes_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('i') => open_editor(app, EditTarget::NoteText),
        KeyCode::Char('j') | KeyCode::Down => {
            let count = app.notes.notes().len();
            if app.note_cursor + 1 < count {
                app.note_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.note_cursor = app.note_cursor.saturating_sub(1);
        }
        KeyCode::Char('d') => {
            let id = app.notes.notes().get(app.note_cursor).map(|n| n.id);
            if let Some(id) = id {
                app.notes.delete(id);
                app.clamp_cursors();
            }
        }
        _ => {}
    }
}

fn open_editor(app: &mut App, target: EditTarget) {
    app.mode = Mode::Edit;
    app.edit_target = Some(target);
    app.edit_buffer.clear();
    app.edit_cursor = 0;
}
