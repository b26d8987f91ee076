use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TimerPhase;
use crate::tui::app::{App, Panel};
use crate::util::unicode;

use super::helpers::panel_block;

/// Render the focus timer panel: countdown readout plus controls
pub fn render_timer_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel_block(app, Panel::Timer);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let bg = app.theme.background;
    let width = inner.width as usize;
    let phase = app.timer.phase();

    let subtitle = match phase {
        TimerPhase::Idle => "classic 25-minute session",
        TimerPhase::Running => "stay focused",
        TimerPhase::Expired => "session complete, take a break",
    };

    let lines = vec![
        Line::from(""),
        centered(
            width,
            app.timer.display(),
            Style::default()
                .fg(app.theme.phase_color(phase))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        centered(
            width,
            subtitle.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Line::from(""),
        controls_row(app, width),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, inner);
}

fn centered(width: usize, text: String, style: Style) -> Line<'static> {
    let pad = width.saturating_sub(unicode::display_width(&text)) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text, style),
    ])
}

/// Start/Pause/Reset with their key hints; disabled controls are dimmed
fn controls_row(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let start_enabled = app.timer.can_start();
    let pause_enabled = app.timer.is_running();

    let key_style = |enabled: bool| {
        if enabled {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        }
    };
    let label_style = |enabled: bool| {
        if enabled {
            Style::default().fg(app.theme.text).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        }
    };

    // "s Start   p Pause   r Reset" is 26 cells wide
    let pad = width.saturating_sub(26) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled("s ", key_style(start_enabled)),
        Span::styled("Start", label_style(start_enabled)),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled("p ", key_style(pause_enabled)),
        Span::styled("Pause", label_style(pause_enabled)),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled("r ", key_style(true)),
        Span::styled("Reset", label_style(true)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_initial_display() {
        let app = App::new();
        let output = render_to_string(TERM_W, 8, |frame, area| {
            render_timer_view(frame, &app, area);
        });
        assert!(output.contains("Focus Timer"));
        assert!(output.contains("25:00"));
        assert!(output.contains("classic 25-minute session"));
        assert!(output.contains("Start"));
    }

    #[test]
    fn test_display_after_65_seconds() {
        let mut app = App::new();
        app.timer_start();
        for _ in 0..65 {
            app.on_tick();
        }
        let output = render_to_string(TERM_W, 8, |frame, area| {
            render_timer_view(frame, &app, area);
        });
        assert!(output.contains("23:55"));
        assert!(output.contains("stay focused"));
    }

    #[test]
    fn test_expired_copy() {
        let mut app = App::new();
        app.timer_start();
        for _ in 0..crate::model::SESSION_SECS {
            app.on_tick();
        }
        let output = render_to_string(TERM_W, 8, |frame, area| {
            render_timer_view(frame, &app, area);
        });
        assert!(output.contains("00:00"));
        assert!(output.contains("session complete"));
    }
}
