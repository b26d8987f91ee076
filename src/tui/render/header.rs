use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Panel};

use super::helpers::pad_to_width;

/// Render the header: logo + panel tabs on the first row, a separator below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    render_top_row(frame, app, rows[0]);

    // Separator line
    let sep: String = "\u{2500}".repeat(rows[1].width as usize);
    let sep_widget = Paragraph::new(sep)
        .style(Style::default().fg(app.theme.border).bg(app.theme.background));
    frame.render_widget(sep_widget, rows[1]);
}

fn render_top_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "Day",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        "Flow",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("  ", bg_style));

    // Panel tabs; the focused one is highlighted
    for (i, panel) in [Panel::Tasks, Panel::Timer, Panel::Notes].iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                "\u{2502}",
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
        let is_current = app.panel == *panel;
        let style = if is_current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", panel.title()), style));
    }

    pad_to_width(&mut spans, area.width as usize, bg_style);
    let widget = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(widget, area);
}
