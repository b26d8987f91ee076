use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Panel};
use crate::tui::wrap;

use super::helpers::{pad_to_width, panel_block};

/// Render the notes panel: input area plus note cards, newest first
pub fn render_notes_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel_block(app, Panel::Notes);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let bg = app.theme.background;
    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    if app.edit_target == Some(EditTarget::NoteText) {
        lines.extend(edit_lines(app, width));
    } else {
        lines.push(Line::from(Span::styled(
            " Write a short note...",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }
    lines.push(Line::from(""));

    let height = inner.height as usize;
    if app.notes.is_empty() {
        lines.push(Line::from(Span::styled(
            " No notes yet.",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    } else {
        // Scroll by whole cards so the card under the cursor stays on
        // screen; the input row above never scrolls off.
        let budget = height.saturating_sub(lines.len());
        let cards = note_cards(app, width);
        let skip = cards_skip(&cards, app.note_cursor, budget);
        for (i, card) in cards.into_iter().enumerate().skip(skip) {
            if i > skip {
                lines.push(Line::from(""));
            }
            lines.extend(card);
        }
    }
    lines.truncate(height);

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}

/// The in-progress note buffer with a cursor mark
fn edit_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let bg = app.theme.background;
    let style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut text = app.edit_buffer.clone();
    text.insert(app.edit_cursor, '\u{258C}');

    wrap::wrap_text(&text, width.saturating_sub(2))
        .into_iter()
        .map(|l| Line::from(Span::styled(format!(" {}", l), style)))
        .collect()
}

/// One group of lines per note: wrapped text plus the caption row
fn note_cards(app: &App, width: usize) -> Vec<Vec<Line<'static>>> {
    let bg = app.theme.background;
    let mut cards = Vec::new();

    for (i, note) in app.notes.notes().iter().enumerate() {
        let is_cursor = i == app.note_cursor && app.panel == Panel::Notes;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let text_style = Style::default().fg(app.theme.text).bg(row_bg);

        let mut card = Vec::new();
        for wrapped in wrap::wrap_text(&note.text, width.saturating_sub(2)) {
            let mut spans = vec![Span::styled(format!(" {}", wrapped), text_style)];
            if is_cursor {
                pad_to_width(&mut spans, width, Style::default().bg(row_bg));
            }
            card.push(Line::from(spans));
        }

        // Creation-time caption
        let mut spans = vec![Span::styled(
            format!(" \u{00B7} {}", note.created.format("%H:%M")),
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::ITALIC),
        )];
        if is_cursor {
            pad_to_width(&mut spans, width, Style::default().bg(row_bg));
        }
        card.push(Line::from(spans));
        cards.push(card);
    }
    cards
}

/// Smallest number of leading cards to drop so the cursor card fits within
/// `budget` lines (counting the blank separators between cards)
fn cards_skip(cards: &[Vec<Line<'static>>], cursor: usize, budget: usize) -> usize {
    let cursor = cursor.min(cards.len().saturating_sub(1));
    let mut skip = 0;
    while skip < cursor {
        let mut used = 0;
        for (i, card) in cards.iter().enumerate().take(cursor + 1).skip(skip) {
            if i > skip {
                used += 1;
            }
            used += card.len();
        }
        if used <= budget {
            break;
        }
        skip += 1;
    }
    skip
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_empty_copy() {
        let app = App::new();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_notes_view(frame, &app, area);
        });
        assert!(output.contains("Quick Notes"));
        assert!(output.contains("No notes yet."));
        assert!(output.contains("Write a short note..."));
    }

    #[test]
    fn test_notes_newest_first() {
        let mut app = App::new();
        app.notes.add("older note");
        app.notes.add("newer note");
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_notes_view(frame, &app, area);
        });
        let newer = output.find("newer note").unwrap();
        let older = output.find("older note").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_long_note_wraps() {
        let mut app = App::new();
        app.notes
            .add("a rather long note that will not fit on a single narrow row");
        let output = render_to_string(24, TERM_H, |frame, area| {
            render_notes_view(frame, &app, area);
        });
        assert!(output.contains("a rather long"));
        // The tail of the note survives wrapping
        assert!(output.contains("row"));
    }

    #[test]
    fn test_overflow_keeps_newest_and_input() {
        let mut app = App::new();
        for i in 0..12 {
            app.notes.add(&format!("note number {:02}", i));
        }
        // 8 rows minus the border leaves 6 lines for input row and cards
        let output = render_to_string(TERM_W, 8, |frame, area| {
            render_notes_view(frame, &app, area);
        });
        assert!(output.contains("Write a short note..."));
        assert!(output.contains("note number 11"));
        assert!(!output.contains("note number 00"));
    }

    #[test]
    fn test_overflow_scrolls_cursor_card_into_view() {
        let mut app = App::new();
        for i in 0..12 {
            app.notes.add(&format!("note number {:02}", i));
        }
        app.panel = Panel::Notes;
        // Oldest note sits at the bottom of the newest-first list
        app.note_cursor = 11;
        let output = render_to_string(TERM_W, 8, |frame, area| {
            render_notes_view(frame, &app, area);
        });
        assert!(output.contains("note number 00"));
    }

    #[test]
    fn test_overflow_keeps_edit_buffer_visible() {
        let mut app = App::new();
        for i in 0..12 {
            app.notes.add(&format!("note number {:02}", i));
        }
        app.mode = crate::tui::app::Mode::Edit;
        app.edit_target = Some(EditTarget::NoteText);
        app.edit_buffer = "typing now".to_string();
        app.edit_cursor = app.edit_buffer.len();
        let output = render_to_string(TERM_W, 8, |frame, area| {
            render_notes_view(frame, &app, area);
        });
        assert!(output.contains("typing now"));
    }

    #[test]
    fn test_edit_buffer_visible() {
        let mut app = App::new();
        app.mode = crate::tui::app::Mode::Edit;
        app.edit_target = Some(EditTarget::NoteText);
        app.edit_buffer = "draft".to_string();
        app.edit_cursor = 5;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_notes_view(frame, &app, area);
        });
        assert!(output.contains("draft\u{258C}"));
    }
}
