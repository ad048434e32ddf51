//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application.
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Muted text (hints, labels).
    pub muted: Color,
    /// Highlight color for selected items and titles.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Cyan,
        }
    }
}

impl Theme {
    /// Style for block titles.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected table row or tab.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}

/// Color for a workflow status.
pub fn status_color(status: &str) -> Color {
    match status {
        "Done" => Color::Rgb(0x4E, 0xCD, 0xC4),
        "In Progress" => Color::Rgb(0xFF, 0xD9, 0x3D),
        "Testing" => Color::Rgb(0xA8, 0xE6, 0xCF),
        "To Do" => Color::Rgb(0xFF, 0xB6, 0xB9),
        _ => Color::Gray,
    }
}

/// Color for a priority.
pub fn priority_color(priority: &str) -> Color {
    match priority {
        "Highest" | "High" => Color::Rgb(0xFF, 0x6B, 0x6B),
        "Medium" => Color::Rgb(0xFF, 0xA0, 0x7A),
        "Low" | "Lowest" => Color::Rgb(0x45, 0xB7, 0xD1),
        _ => Color::Gray,
    }
}

/// Color for a completion percentage, red through green.
pub fn progress_color(percent: u16) -> Color {
    match percent {
        0..=44 => Color::Red,
        45..=64 => Color::Yellow,
        _ => Color::Green,
    }
}
