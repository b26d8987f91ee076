use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TaskFilter;
use crate::tui::app::{App, EditTarget, Panel};
use crate::util::unicode;

use super::helpers::{pad_to_width, panel_block};

/// Render the tasks panel: input field, stat cards, filter row, task list
pub fn render_tasks_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel_block(app, Panel::Tasks);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let bg = app.theme.background;
    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(input_row(app, width));
    lines.push(Line::from(""));
    lines.push(stats_row(app));
    lines.push(filter_row(app));
    lines.push(Line::from(""));

    let list_height = (inner.height as usize).saturating_sub(lines.len());
    lines.extend(task_list(app, width, list_height));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}

fn input_row(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let editing = app.edit_target == Some(EditTarget::TaskTitle);

    let mut spans = vec![Span::styled(
        " Task  ",
        Style::default().fg(app.theme.accent).bg(bg),
    )];
    if editing {
        let before = &app.edit_buffer[..app.edit_cursor];
        let after = &app.edit_buffer[app.edit_cursor..];
        let style = Style::default().fg(app.theme.text_bright).bg(bg);
        spans.push(Span::styled(before.to_string(), style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after.to_string(), style));
    } else {
        spans.push(Span::styled(
            "e.g. Study React",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    pad_to_width(&mut spans, width, Style::default().bg(bg));
    Line::from(spans)
}

fn stats_row(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let counts = app.tasks.counts();
    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(" Total ", label),
        Span::styled(counts.total.to_string(), value),
        Span::styled("   Completed ", label),
        Span::styled(counts.completed.to_string(), value),
        Span::styled("   Active ", label),
        Span::styled(counts.active.to_string(), value),
    ])
}

fn filter_row(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for filter in TaskFilter::ALL {
        let style = if filter == app.filter {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    Line::from(spans)
}

fn task_list(app: &App, width: usize, height: usize) -> Vec<Line<'static>> {
    let bg = app.theme.background;
    let visible = app.visible_tasks();

    if visible.is_empty() {
        return vec![Line::from(Span::styled(
            " No tasks in this view.",
            Style::default().fg(app.theme.dim).bg(bg),
        ))];
    }

    // Keep the cursor row on screen
    let skip = if height > 0 {
        app.task_cursor.saturating_sub(height - 1)
    } else {
        0
    };

    let mut lines = Vec::new();
    for (i, task) in visible.iter().enumerate().skip(skip).take(height.max(1)) {
        let is_cursor = i == app.task_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let checkbox = if task.done { "[x]" } else { "[ ]" };
        let checkbox_style = if task.done {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.accent).bg(row_bg)
        };

        let mut title_style = Style::default().fg(app.theme.text).bg(row_bg);
        if task.done {
            title_style = title_style
                .fg(app.theme.dim)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        if is_cursor {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }

        let title = unicode::truncate_to_width(&task.title, width.saturating_sub(6));
        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(checkbox, checkbox_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(title, title_style),
        ];
        if is_cursor {
            pad_to_width(&mut spans, width, Style::default().bg(row_bg));
        }
        lines.push(Line::from(spans));
    }
    lines
}
