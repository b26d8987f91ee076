use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Panels", header_style)));
    add_binding(&mut lines, " tab / shift-tab", "Cycle focus", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Tasks", header_style)));
    add_binding(&mut lines, " a", "Add a task", key_style, desc_style);
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " space/x", "Toggle done", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete task", key_style, desc_style);
    add_binding(&mut lines, " f", "Cycle filter (all/active/done)", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Timer", header_style)));
    add_binding(&mut lines, " s", "Start", key_style, desc_style);
    add_binding(&mut lines, " p", "Pause", key_style, desc_style);
    add_binding(&mut lines, " r", "Reset to 25:00", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Notes", header_style)));
    add_binding(&mut lines, " a", "Add a note", key_style, desc_style);
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete note", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Editing", header_style)));
    add_binding(&mut lines, " Enter", "Add task / newline in note", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+S", "Add note", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Cancel", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding(
    lines: &mut Vec<Line<'_>>,
    key: &str,
    desc: &str,
    key_style: Style,
    desc_style: Style,
) {
    let pad = 18usize.saturating_sub(key.chars().count());
    lines.push(Line::from(vec![
        Span::styled(key.to_string(), key_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(desc.to_string(), desc_style),
    ]));
}
