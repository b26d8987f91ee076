use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode, Panel};

use super::helpers::pad_to_width;

/// Render the status row (bottom of screen): key hints for the current mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match app.mode {
        Mode::Navigate => match app.panel {
            Panel::Tasks => {
                " a add  space toggle  d delete  f filter  tab panel  ? help  q quit"
            }
            Panel::Timer => " s start  p pause  r reset  tab panel  ? help  q quit",
            Panel::Notes => " a add  j/k move  d delete  tab panel  ? help  q quit",
        },
        Mode::Edit => match app.edit_target {
            Some(EditTarget::TaskTitle) => " Enter add task  Esc cancel",
            Some(EditTarget::NoteText) => " Ctrl+S add note  Enter newline  Esc cancel",
            None => "",
        },
    };

    let mut spans = vec![Span::styled(
        hint,
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    pad_to_width(&mut spans, width, Style::default().bg(bg));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_hints_follow_mode() {
        let mut app = App::new();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("a add"));
        assert!(output.contains("q quit"));

        app.mode = Mode::Edit;
        app.edit_target = Some(EditTarget::TaskTitle);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("Enter add task"));
    }
}
