use ratatui::style::Color;

use crate::model::TimerPhase;

/// Color theme for the TUI. Soft lavender-on-dark.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub accent: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub border: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x17, 0x13, 0x24),
            text: Color::Rgb(0xC9, 0xC4, 0xE4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xF0, 0x8E, 0xC1),
            dim: Color::Rgb(0x6F, 0x6A, 0x8F),
            accent: Color::Rgb(0x9D, 0x8C, 0xFF),
            green: Color::Rgb(0x7E, 0xE0, 0xA3),
            yellow: Color::Rgb(0xFF, 0xD7, 0x87),
            red: Color::Rgb(0xFF, 0x7B, 0x8A),
            border: Color::Rgb(0x3A, 0x33, 0x56),
            selection_bg: Color::Rgb(0x2E, 0x27, 0x45),
        }
    }
}

impl Theme {
    /// Color for the big countdown readout in each phase
    pub fn phase_color(&self, phase: TimerPhase) -> Color {
        match phase {
            TimerPhase::Idle => self.text_bright,
            TimerPhase::Running => self.highlight,
            TimerPhase::Expired => self.green,
        }
    }
}
