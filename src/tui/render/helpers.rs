use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

use crate::tui::app::{App, Panel};

/// Bordered container for a panel; the focused panel gets the highlight
/// border.
pub fn panel_block(app: &App, panel: Panel) -> Block<'static> {
    let focused = app.panel == panel;
    let border_style = if focused {
        Style::default().fg(app.theme.highlight).bg(app.theme.background)
    } else {
        Style::default().fg(app.theme.border).bg(app.theme.background)
    };
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", panel.title()), title_style))
}

/// Pad a span list with background-colored spaces out to `width` cells
pub fn pad_to_width(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if content_width < width {
        spans.push(Span::styled(" ".repeat(width - content_width), style));
    }
}

/// Centered sub-rectangle, `percent_x`/`percent_y` of the given area
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
