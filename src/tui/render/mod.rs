pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod notes_view;
pub mod status_row;
pub mod tasks_view;
pub mod timer_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to the panel renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | content | status row (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, rows[0]);

    // Content: tasks on the left, timer and notes stacked on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    tasks_view::render_tasks_view(frame, app, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(1)])
        .split(columns[1]);

    timer_view::render_timer_view(frame, app, right[0]);
    notes_view::render_notes_view(frame, app, right[1]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_helpers::*;

    #[test]
    fn test_full_page_renders_all_panels() {
        let mut app = sample_app();
        app.notes.add("remember the milk");
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &app);
        });
        assert!(output.contains("DayFlow"));
        assert!(output.contains("Today's Tasks"));
        assert!(output.contains("Focus Timer"));
        assert!(output.contains("Quick Notes"));
        assert!(output.contains("25:00"));
        assert!(output.contains("remember the milk"));
    }

    #[test]
    fn test_help_overlay_drawn_on_top() {
        let mut app = App::new();
        app.show_help = true;
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &app);
        });
        assert!(output.contains("Key Bindings"));
    }
}
